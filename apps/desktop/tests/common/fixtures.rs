//! CSV fixtures for uploads.

/// One row per `(question, options, key)` triple, fields quoted.
pub fn csv_deck(rows: &[(&str, &str, &str)]) -> Vec<u8> {
    rows.iter()
        .map(|(q, options, key)| format!("\"{q}\",\"{options}\",\"{key}\"\n"))
        .collect::<String>()
        .into_bytes()
}

/// Single arithmetic card, answer B.
pub fn arithmetic_deck() -> Vec<u8> {
    csv_deck(&[("2+2?", "3,4,5", "b")])
}

/// Header row followed by three questions.
#[allow(dead_code)]
pub fn sample_deck_with_header() -> Vec<u8> {
    csv_deck(&[
        ("Question", "Possible Answers", "Correct Answer"),
        ("2+2?", "3,4,5", "b"),
        ("Pick the primes (Choose 2)", "4,5,7", "b,c"),
        ("Capital of France?", "Paris,Rome,Berlin", "a"),
    ])
}
