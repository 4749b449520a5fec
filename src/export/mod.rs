//! CSV export of ledger records.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;

use crate::currency::format_amount;
use crate::errors::ExportError;
use crate::ledger::ExpenseRecord;

pub const CSV_HEADER: [&str; 4] = ["Title", "Amount", "Date", "Category"];

#[derive(Serialize)]
struct CsvOutRow<'a> {
    title: &'a str,
    amount: String,
    date: &'a str,
    category: &'a str,
}

impl<'a> From<&'a ExpenseRecord> for CsvOutRow<'a> {
    fn from(record: &'a ExpenseRecord) -> Self {
        Self {
            title: &record.title,
            amount: format_amount(record.amount),
            date: &record.date,
            category: &record.category,
        }
    }
}

/// Renders records in insertion order under a fixed header.
///
/// Lines are joined with `\n` without a trailing newline. Fields containing
/// delimiters, quotes or line breaks are quoted. An empty slice yields the header alone.
pub fn to_csv(records: &[ExpenseRecord]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(CsvOutRow::from(record))?;
    }

    let bytes = writer.into_inner()?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Writes the CSV export to `path`, staging through `<file name>.tmp` beside it.
///
/// The staging file is removed again when the write or the final rename fails.
pub fn write_csv(records: &[ExpenseRecord], path: &Path) -> Result<(), ExportError> {
    let text = to_csv(records)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = staging_path(path);
    if let Err(err) = fs::write(&tmp, text).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("export"));
    name.push(".tmp");
    path.with_file_name(name)
}
