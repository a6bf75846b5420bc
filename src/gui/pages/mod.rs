// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, file::Columns, gui::app::App};

pub mod categories;
pub mod search;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Columns of the result table (and of Copy/Export).
    fn columns(&self) -> Columns {
        Columns::Product
    }

    /// Per-page column widths (in px-ish), `columns()` order.
    fn preferred_column_widths(&self) -> &'static [f32] {
        &[200.0, 200.0, 70.0, 140.0, 60.0]
    }

    /// Message shown in place of an empty table.
    fn empty_hint(&self) -> &'static str;

    /// Draw page-specific controls above the export bar.
    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}
