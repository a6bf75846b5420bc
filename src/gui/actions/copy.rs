// src/gui/actions/copy.rs
use eframe::egui;

use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let columns = app.current_page().columns();

    let result = {
        let view = app.results();
        if view.is_empty() {
            None
        } else {
            logf!("Copy: page={:?}, rows={}", app.current_page_kind(), view.len());
            Some(file::to_export_string(&view, columns, &app.state.options.export))
        }
    };

    match result {
        None => {
            logd!("Copy: Clicked, but there's nothing to copy");
            app.status("Nothing to copy");
        }
        Some(Ok(txt)) => {
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Some(Err(e)) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
