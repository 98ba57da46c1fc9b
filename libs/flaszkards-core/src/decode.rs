//! Tabular decoding of uploaded files.
//!
//! Accepts CSV text or a spreadsheet workbook (first sheet only) and yields
//! rows mapped positionally to `question`, `possible_answers` and
//! `correct_answer`. No header detection is performed here.

use crate::error::{DecodeError, Result};
use crate::types::RawRow;
use serde::{Deserialize, Serialize};

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Container format of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Csv,
    Workbook,
}

/// Guess the format from the leading bytes.
pub fn detect_format(bytes: &[u8]) -> SourceFormat {
    if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC) {
        SourceFormat::Workbook
    } else {
        SourceFormat::Csv
    }
}

/// Decode an upload into rows. Rows with all three fields empty are dropped.
pub fn decode_rows(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let rows = match detect_format(bytes) {
        SourceFormat::Csv => decode_csv(bytes)?,
        SourceFormat::Workbook => decode_workbook(bytes)?,
    };
    Ok(rows.into_iter().filter(|row| !row.is_blank()).collect())
}

fn decode_csv(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let field = |idx: usize| field_text(record.get(idx).unwrap_or_default());
        rows.push(RawRow {
            question: field(0),
            possible_answers: field(1),
            correct_answer: field(2),
        });
    }
    Ok(rows)
}

/// UTF-8 when valid, otherwise Windows-1252 as written by Excel's CSV export.
fn field_text(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(raw);
            text.into_owned()
        }
    }
}

#[cfg(feature = "xlsx")]
fn decode_workbook(bytes: &[u8]) -> Result<Vec<RawRow>> {
    use calamine::{open_workbook_auto_from_rs, Reader};
    use std::io::Cursor;

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DecodeError::EmptyWorkbook)??;

    // The used range may start past column A; fields stay anchored to A.
    let col_offset = range.start().map_or(0, |(_, col)| col as usize);

    let rows = range
        .rows()
        .map(|cells| {
            let field = |column: usize| {
                column
                    .checked_sub(col_offset)
                    .and_then(|idx| cells.get(idx))
                    .map(cell_text)
                    .unwrap_or_default()
            };
            RawRow {
                question: field(0),
                possible_answers: field(1),
                correct_answer: field(2),
            }
        })
        .collect();
    Ok(rows)
}

#[cfg(feature = "xlsx")]
fn cell_text(cell: &calamine::Data) -> String {
    use calamine::Data;

    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(not(feature = "xlsx"))]
fn decode_workbook(_bytes: &[u8]) -> Result<Vec<RawRow>> {
    Err(DecodeError::UnsupportedFormat(
        "spreadsheet workbooks need the `xlsx` feature",
    ))
}
