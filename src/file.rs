// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::{Catalog, CatalogView, HEADERS, HEADERS_WITH_CATEGORY};
use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_filename;
use crate::csv::rows_to_string;
use crate::error::{CatalogError, Result};

/// Which columns a table carries. Category listings show the category,
/// same-ingredient tables don't.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Columns {
    Product,
    WithCategory,
}

impl Columns {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Columns::Product => &HEADERS,
            Columns::WithCategory => &HEADERS_WITH_CATEGORY,
        }
    }
}

/// Render a view in the chosen format (Copy and Export share this).
pub fn to_export_string(view: &CatalogView<'_>, columns: Columns, export: &ExportOptions) -> Result<String> {
    match export.format.delimiter() {
        Some(sep) => {
            let rows: Vec<Vec<String>> = view
                .iter()
                .map(|r| match columns {
                    Columns::Product => r.to_row(),
                    Columns::WithCategory => r.to_row_with_category(),
                })
                .collect();
            let headers = export.include_headers.then(|| columns.headers());
            Ok(rows_to_string(headers, &rows, sep))
        }
        None => {
            let mut text = serde_json::to_string_pretty(&view.to_owned_records())?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Write one export file at `export.out_path()`. Returns the final path.
pub fn write_export_single(view: &CatalogView<'_>, columns: Columns, export: &ExportOptions) -> Result<PathBuf> {
    if view.is_empty() {
        return Err(CatalogError::NothingToExport);
    }
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = to_export_string(view, columns, export)?;
    fs::write(&path, contents).map_err(|e| CatalogError::io(&path, e))?;
    Ok(path)
}

/// One file per category into the directory `export.out_path()`.
/// An empty `categories` slice means every category in the catalog.
pub fn write_export_per_category(
    catalog: &Catalog,
    categories: &[&str],
    export: &ExportOptions,
) -> Result<Vec<PathBuf>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    let all = catalog.categories();
    let wanted: &[&str] = if categories.is_empty() { &all } else { categories };

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(wanted.len());
    let ext = export.format.ext();

    for &category in wanted {
        let view = catalog.by_category(category);
        if view.is_empty() {
            logd!("Export: category {category:?} has no rows, skipped");
            continue;
        }
        let stem = sanitize_filename(category, "uncategorized");
        let path = resolve_unique_filename(&outdir, &stem, &mut seen, ext);

        let contents = to_export_string(&view, Columns::WithCategory, export)?;
        fs::write(&path, contents).map_err(|e| CatalogError::io(&path, e))?;
        written.push(path);
    }

    if written.is_empty() {
        return Err(CatalogError::NothingToExport);
    }
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(CatalogError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| CatalogError::io(dir, e))?;
    }
    Ok(())
}

/// Duplicate handling within one export run:
/// first `<stem>.<ext>`, then `<stem> (2).<ext>`, `<stem> (3).<ext>`, …
pub fn resolve_unique_filename(
    dir: &Path,
    stem: &str,
    seen_names: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let count = seen_names.entry(s!(stem)).or_insert(0);
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };
    *count += 1;
    dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_stems_get_counters() {
        let mut seen = HashMap::new();
        let dir = Path::new("out");
        assert_eq!(resolve_unique_filename(dir, "a", &mut seen, "csv"), dir.join("a.csv"));
        assert_eq!(resolve_unique_filename(dir, "a", &mut seen, "csv"), dir.join("a (2).csv"));
        assert_eq!(resolve_unique_filename(dir, "b", &mut seen, "csv"), dir.join("b.csv"));
        assert_eq!(resolve_unique_filename(dir, "a", &mut seen, "csv"), dir.join("a (3).csv"));
    }
}
