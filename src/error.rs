// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: missing required column \"{column}\"")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("unsupported catalog format: {0} (expected .json, .csv or .tsv)")]
    UnsupportedFormat(PathBuf),

    #[error("catalog contains no usable records")]
    Empty,

    #[error("no product named \"{0}\"")]
    NotFound(String),

    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),

    #[error("nothing to export")]
    NothingToExport,

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
