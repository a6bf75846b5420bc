// src/gui/components/tabs.rs
//
// Top tabs. The switch itself (on_enter + persist) lives in App.

use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            if ui.selectable_label(idx == cur, page.title()).clicked() {
                clicked = Some(idx);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("{} products · {}", app.catalog.len(), app.source)).weak());
        });
    });

    if let Some(idx) = clicked {
        app.switch_page(idx);
    }
}
