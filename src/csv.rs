// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::record::{Record, HEADERS};

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). std-only.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Parse an exported table back into records, checking the header row.
pub fn parse_records(text: &str, sep: char) -> Option<Vec<Record>> {
    let mut rows = parse_rows(text, sep).into_iter();
    let header = rows.next()?;
    if header != HEADERS {
        return None;
    }
    rows.map(|r| Record::from_row(&r)).collect()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
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

/// Serialize a record table: fixed header row, then one row per record.
/// Byte-for-byte reproducible for a given table.
pub fn to_export_string(records: &[Record], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let header: Vec<String> = HEADERS.iter().map(|h| s!(*h)).collect();
    let _ = write_row(&mut buf, &header, sep);
    for r in records {
        let _ = write_row(&mut buf, &r.to_row(), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_embedded_separators_and_newlines() {
        let mut buf = Vec::new();
        let row = vec![s!("plain"), s!("a,b"), s!("line\nbreak"), s!("has \"quotes\"")];
        write_row(&mut buf, &row, ',').unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"a,b\",\"line\nbreak\",\"has \"\"quotes\"\"\"\n"
        );
    }

    #[test]
    fn parse_inverts_write() {
        let rows = vec![
            vec![s!("a"), s!("b,c"), s!("d\"e")],
            vec![s!(""), s!("multi\nline"), s!("z")],
        ];
        let mut buf = Vec::new();
        for r in &rows {
            write_row(&mut buf, r, ',').unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(parse_rows(&text, ','), rows);
    }

    #[test]
    fn export_starts_with_fixed_header() {
        let text = to_export_string(&[], ',');
        assert_eq!(text, "display_name,handle,text,url,location\n");
    }

    #[test]
    fn tsv_uses_tab_separator() {
        let text = to_export_string(&[], '\t');
        assert_eq!(text, "display_name\thandle\ttext\turl\tlocation\n");
    }

    #[test]
    fn parse_records_rejects_foreign_header() {
        assert!(parse_records("a,b,c\n1,2,3\n", ',').is_none());
    }
}
