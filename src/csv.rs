// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::HEADERS;
use crate::data::BookRecord;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write the whole table: optional `Title,Price,Rating` header, then one row per record.
pub fn write_records<W: Write>(
    mut w: W,
    records: &[BookRecord],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &HEADERS, sep)?;
    }
    for rec in records {
        write_row(&mut w, &rec.to_row(), sep)?;
    }
    Ok(())
}
