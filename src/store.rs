// src/store.rs
//
// Where catalogs come from: the dataset compiled into the binary, or a JSON /
// CSV / TSV file on disk. Every loader funnels through `finish` so the
// cleanup rules are the same whatever the source.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, DrugRecord};
use crate::csv::parse_rows;
use crate::error::{CatalogError, Result};

/// The pre-bundled dataset.
const BUNDLED_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/drugs.json"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
    Tsv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(SourceFormat::Json),
            "csv" => Some(SourceFormat::Csv),
            "tsv" | "tab" => Some(SourceFormat::Tsv),
            _ => None,
        }
    }
}

/// Where the active catalog came from (shown in the GUI status line).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Bundled,
    File(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Bundled => write!(f, "bundled dataset"),
            Source::File(p) => write!(f, "{}", p.display()),
        }
    }
}

pub fn bundled() -> Result<Catalog> {
    let catalog = from_json_str(BUNDLED_JSON)?;
    logd!("Store: bundled dataset rows={}", catalog.len());
    Ok(catalog)
}

/// Load a catalog file, picking the parser by extension.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let format =
        SourceFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;

    let catalog = match format {
        SourceFormat::Json => from_json_str(&text)?,
        SourceFormat::Csv => from_delimited_str(&text, ',', path)?,
        SourceFormat::Tsv => from_delimited_str(&text, '\t', path)?,
    };
    logf!("Store: loaded {} (rows={}, format={:?})", path.display(), catalog.len(), format);
    Ok(catalog)
}

/// Explicit path wins; otherwise the bundled dataset.
pub fn resolve_catalog(path: Option<&Path>) -> Result<(Catalog, Source)> {
    match path {
        Some(p) => Ok((load_catalog(p)?, Source::File(p.to_path_buf()))),
        None => Ok((bundled()?, Source::Bundled)),
    }
}

pub fn from_json_str(text: &str) -> Result<Catalog> {
    let records: Vec<DrugRecord> = serde_json::from_str(text)?;
    finish(records)
}

/// Delimited text with a header row. Columns are matched by header name
/// (English or Korean); unknown columns are ignored, `name` is required.
pub fn from_delimited_str(text: &str, sep: char, origin: &Path) -> Result<Catalog> {
    let mut rows = parse_rows(text, sep).into_iter();
    let header = rows.next().ok_or(CatalogError::Empty)?;

    let columns: Vec<Option<usize>> = header.iter().map(|h| DrugRecord::column_for_header(h)).collect();
    if !columns.contains(&Some(0)) {
        return Err(CatalogError::MissingColumn { path: origin.to_path_buf(), column: "name" });
    }

    let records = rows
        .map(|cells| {
            let mut rec = DrugRecord::default();
            for (cell, col) in cells.into_iter().zip(&columns) {
                if let Some(col) = col {
                    rec.set_column(*col, cell);
                }
            }
            rec
        })
        .collect();

    finish(records)
}

fn finish(mut records: Vec<DrugRecord>) -> Result<Catalog> {
    for r in &mut records {
        r.tidy();
    }

    let before = records.len();
    records.retain(|r| !r.name.is_empty());
    let dropped = before - records.len();
    if dropped > 0 {
        logw!("Store: dropped {} record(s) without a product name", dropped);
    }

    if records.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(Catalog::new(records))
}
