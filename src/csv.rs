// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
/// Blank lines are skipped; a leading UTF-8 BOM is ignored.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
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
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush the last line even without a trailing newline.
    row.push(field);
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Render an optional header row plus rows into one delimited string.
pub fn rows_to_string<S: AsRef<str>>(headers: Option<&[S]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
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
    fn quoted_fields_and_crlf() {
        let text = "name,ingredient\r\n\"Tylenol, ER\",\"Acetaminophen,\"\r\n\r\nAspirin,\"say \"\"hi\"\"\"\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], row!["Tylenol, ER", "Acetaminophen,"]);
        assert_eq!(rows[2], row!["Aspirin", "say \"hi\""]);
    }

    #[test]
    fn bom_and_missing_final_newline() {
        let rows = parse_rows("\u{feff}a\tb\nc\td", '\t');
        assert_eq!(rows, vec![row!["a", "b"], row!["c", "d"]]);
    }

    #[test]
    fn writer_quotes_only_when_needed() {
        let out = rows_to_string(Some(&["A", "B"][..]), &[row!["x,y", "plain"]], ',');
        assert_eq!(out, "A,B\n\"x,y\",plain\n");

        let out = rows_to_string::<&str>(None, &[row!["x,y", "tab\there"]], '\t');
        assert_eq!(out, "x,y\t\"tab\there\"\n");
    }
}
