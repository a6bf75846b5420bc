// src/gui/components/category_panel.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Categories");
    ui.separator();

    // Owned copy so the click handler can take `&mut App`.
    let entries: Vec<(String, usize)> = app
        .catalog
        .category_counts()
        .into_iter()
        .map(|(c, n)| (s!(c), n))
        .collect();

    if entries.is_empty() {
        ui.label(egui::RichText::new("No categories in this catalog").weak());
        return;
    }

    let current = app.session.category().map(|c| s!(c));
    let mut picked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("category_list_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (category, count) in &entries {
                let selected = current.as_deref() == Some(category.as_str());
                let text = format!("{category} ({count})");
                if ui.selectable_label(selected, text).clicked() {
                    picked = Some(category.clone());
                }
            }
        });

    if let Some(c) = picked {
        app.open_category(&c);
    }
}
