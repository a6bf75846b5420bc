// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::{
        ExportFormat,
        ExportType::{PerCategory, SingleFile},
        PageKind,
    },
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cur_kind = app.current_page_kind();
    let mut changed = false;

    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            for f in [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Json] {
                ui.selectable_value(&mut export.format, f, f.label());
            }

            let before_headers = export.include_headers;
            ui.add_enabled(
                export.format != ExportFormat::Json,
                egui::Checkbox::new(&mut export.include_headers, "Include headers"),
            );
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
                changed = true;
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            changed = true;
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Per-category toggle + Output field ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        if cur_kind == PageKind::Categories {
            let mut per_category = matches!(export.export_type, PerCategory);
            if ui.checkbox(&mut per_category, "One file per category").changed() {
                export.set_export_type(if per_category { PerCategory } else { SingleFile });
                if !app.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
                logf!("UI: export_type → {:?}", export.export_type);
                changed = true;
            }
        } else if export.export_type != SingleFile {
            export.set_export_type(SingleFile);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    if changed {
        app.persist();
    }

    // --- Actions ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
        ui.separator();
        ui.label(&app.status);
    });
}
