// src/core/mod.rs

pub mod normalize;
pub mod sanitize;

pub use normalize::{fold_case, normalize_field, normalize_ws};
