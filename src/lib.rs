// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod session;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use catalog::{Catalog, CatalogView, DrugRecord};
pub use error::CatalogError;
pub use session::{Mode, Session};
