// src/gui/actions/mod.rs
//
// Button handlers. Submodules stay private; callers see actions::{copy, export}.

mod copy;
mod export;

pub use copy::copy;
pub use export::export;
