// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const SETTINGS_FILE: &str = "settings.json";

// Logging
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "DRUG_FINDER_LOG";

// Search
pub const SUGGESTION_LIMIT: usize = 10;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_CATEGORY_SUBDIR: &str = "categories";
pub const DEFAULT_FILE: &str = "results";

// Window
pub const WINDOW_W: f32 = 900.0;
pub const WINDOW_H: f32 = 640.0;
