// src/gui/pages/search.rs
//
// Search box with a prefix suggestion dropdown, an exact-match Search
// button, and the "same dose only" refinement of the result table.

use eframe::egui;

use crate::{config::options::PageKind, gui::app::App};

use super::Page;

pub struct SearchPage;
pub static PAGE: SearchPage = SearchPage;

impl Page for SearchPage {
    fn title(&self) -> &'static str { "Search" }
    fn kind(&self) -> PageKind { PageKind::Search }

    fn empty_hint(&self) -> &'static str {
        "Type a product name and pick a suggestion, or press Search for an exact match."
    }

    fn on_enter(&self, app: &mut App) {
        app.session.clear_category();
    }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            let resp = ui.add(
                egui::TextEdit::singleline(&mut app.query_text)
                    .hint_text("Product name")
                    .desired_width(320.0),
            );
            if resp.changed() {
                app.apply_query_text();
            }

            let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Search").clicked() || enter {
                app.submit();
            }
        });

        // Suggestion dropdown
        let names: Vec<String> = app
            .session
            .suggestions(&app.catalog)
            .iter()
            .map(|r| r.name.clone())
            .collect();

        if !names.is_empty() {
            let mut picked = None;
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(320.0);
                egui::ScrollArea::vertical()
                    .id_salt("suggestions_scroll")
                    .max_height(160.0)
                    .show(ui, |ui| {
                        for (i, name) in names.iter().enumerate() {
                            if ui.selectable_label(false, name).clicked() {
                                picked = Some(i);
                            }
                        }
                    });
            });
            if let Some(i) = picked {
                app.pick_suggestion(i);
            }
        }

        // Selected product + refinement
        let Some(selected) = app.session.selected(&app.catalog) else { return };
        let heading = format!("Same ingredient as {}", selected.name);
        let detail = format!("{}  ·  {}", selected.ingredient_key(), selected.dose_key());

        ui.add_space(4.0);
        ui.heading(heading);
        ui.label(egui::RichText::new(detail).weak());

        let mut same_dose = app.session.same_dose_only();
        if ui.checkbox(&mut same_dose, "Same dose only").changed() {
            app.session.set_same_dose_only(same_dose);
            let n = app.results().len();
            logf!("UI: Same dose only → {} ({} row(s))", same_dose, n);
            app.status(format!("{n} product(s) shown"));
        }
    }
}
