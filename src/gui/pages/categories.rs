// src/gui/pages/categories.rs
use eframe::egui;

use crate::{config::options::PageKind, file::Columns, gui::app::App};

use super::Page;

pub struct CategoriesPage;
pub static PAGE: CategoriesPage = CategoriesPage;

impl Page for CategoriesPage {
    fn title(&self) -> &'static str { "Categories" }
    fn kind(&self) -> PageKind { PageKind::Categories }

    fn columns(&self) -> Columns { Columns::WithCategory }

    fn preferred_column_widths(&self) -> &'static [f32] {
        &[200.0, 200.0, 70.0, 140.0, 60.0, 100.0]
    }

    fn empty_hint(&self) -> &'static str {
        "Pick a category on the left."
    }

    /// Re-open the category the user last looked at.
    fn on_enter(&self, app: &mut App) {
        if app.session.category().is_some() {
            return;
        }
        if let Some(c) = app.state.gui.last_category.clone() {
            if !app.catalog.by_category(&c).is_empty() {
                app.session.select_category(&c);
            }
        }
    }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(category) = app.session.category().map(|c| s!(c)) else {
            ui.label(self.empty_hint());
            return;
        };
        let n = app.results().len();

        ui.horizontal(|ui| {
            ui.heading(&category);
            ui.label(egui::RichText::new(format!("{n} product(s)")).weak());
            if ui.button("Clear").clicked() {
                app.session.clear_category();
                app.state.gui.last_category = None;
                app.status("Category cleared");
                app.persist();
            }
        });
    }
}
