// src/config/options.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub search: SearchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageKind {
    Search,
    Categories,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of prefix suggestions shown under the search box.
    pub suggestion_limit: usize,
    /// Optional external catalog; `None` means the bundled dataset.
    pub data_path: Option<PathBuf>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            suggestion_limit: SUGGESTION_LIMIT,
            data_path: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportType {
    SingleFile,
    PerCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Tsv => "TSV",
            ExportFormat::Json => "JSON",
        }
    }

    /// Field separator for delimited formats; `None` for JSON.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    pub(crate) out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn default_dir_for(export_type: ExportType) -> PathBuf {
        match export_type {
            ExportType::SingleFile => PathBuf::from(DEFAULT_OUT_DIR),
            ExportType::PerCategory => PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_CATEGORY_SUBDIR),
        }
    }

    /// Single file: `<dir>/<stem>.<ext>`; an extension the user typed wins over the format's.
    /// Per category: the directory only.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match self.export_type {
            ExportType::SingleFile => {
                let stem = &self.out_path.file_stem;
                let ext = self.out_path.user_ext.as_deref().unwrap_or(self.format.ext());
                path.push(format!("{stem}.{ext}"));
            }
            ExportType::PerCategory => {}
        }
        path
    }

    pub fn current_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Parse user text into dir + stem (+ extension, if typed).
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_string_lossy().into_owned();
                }
                self.out_path.user_ext = p.extension().map(|e| e.to_string_lossy().into_owned());
            }
            ExportType::PerCategory => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    pub fn set_export_type(&mut self, export_type: ExportType) {
        if self.export_type == export_type {
            return;
        }
        // Follow the default directory only while the user hasn't chosen one.
        if self.out_path.dir == Self::default_dir_for(self.export_type) {
            self.out_path.dir = Self::default_dir_for(export_type);
        }
        self.export_type = export_type;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct OutputPath {
    dir: PathBuf,
    file_stem: String,
    user_ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
            user_ext: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_controls_extension_until_user_types_one() {
        let mut opts = ExportOptions::default();
        assert!(opts.out_path().to_string_lossy().ends_with("results.csv"));

        opts.format = ExportFormat::Json;
        assert!(opts.out_path().to_string_lossy().ends_with("results.json"));

        opts.set_path("exports/today.txt");
        opts.format = ExportFormat::Tsv;
        assert_eq!(opts.out_path(), PathBuf::from("exports").join("today.txt"));
    }

    #[test]
    fn per_category_follows_default_dir() {
        let mut opts = ExportOptions::default();
        opts.set_export_type(ExportType::PerCategory);
        assert_eq!(opts.out_path(), PathBuf::from("out").join("categories"));

        opts.set_path("mine");
        opts.set_export_type(ExportType::SingleFile);
        assert_eq!(opts.current_dir(), Path::new("mine"));
    }
}
