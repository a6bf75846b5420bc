// src/config/state.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::{SETTINGS_FILE, STORE_DIR, WINDOW_H, WINDOW_W};
use super::options::AppOptions;
use crate::error::{CatalogError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Last category opened on the Categories tab
    pub last_category: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            current_page_index: 0,
            last_category: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

pub fn settings_path() -> PathBuf {
    Path::new(STORE_DIR).join(SETTINGS_FILE)
}

impl AppState {
    /// Load persisted settings; anything unreadable falls back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(state) => state,
                Err(e) => {
                    logw!("Settings: {} is invalid ({e}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
            }
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|e| CatalogError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{ExportFormat, ExportType};

    #[test]
    fn settings_survive_a_save_and_load() {
        let dir = std::env::temp_dir().join("drug_finder_state_test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("settings.json");

        let mut state = AppState::default();
        state.options.export.format = ExportFormat::Tsv;
        state.gui.last_category = Some(s!("Analgesic"));
        state.save(&path).unwrap();

        assert_eq!(AppState::load_or_default(&path), state);
    }

    #[test]
    fn export_toggles_survive_a_save_and_load() {
        let dir = std::env::temp_dir().join("drug_finder_state_export");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("settings.json");

        let mut state = AppState::default();
        state.options.export.format = ExportFormat::Json;
        state.options.export.include_headers = false;
        state.options.export.set_export_type(ExportType::PerCategory);
        state.save(&path).unwrap();

        let back = AppState::load_or_default(&path);
        assert_eq!(back.options.export.format, ExportFormat::Json);
        assert!(!back.options.export.include_headers);
        assert_eq!(back.options.export.export_type, ExportType::PerCategory);
        assert_eq!(back.options.export.out_path(), state.options.export.out_path());
    }

    #[test]
    fn garbage_settings_fall_back_to_defaults() {
        let dir = std::env::temp_dir().join("drug_finder_state_garbage");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppState::load_or_default(&path), AppState::default());
    }
}
