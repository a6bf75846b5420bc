// src/gui/actions/export.rs
use std::path::PathBuf;

use crate::{config::options::ExportType, error::Result, file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        app.out_path_dirty = false;
        logf!("Export: Out path set → {}", app.out_path_text);
    }

    let result: Result<Vec<PathBuf>> = {
        let export = &app.state.options.export;
        let columns = app.current_page().columns();

        logf!(
            "Export: Begin page={:?}, type={:?}, format={:?}",
            app.current_page_kind(),
            export.export_type,
            export.format
        );

        match export.export_type {
            ExportType::SingleFile => {
                let view = app.results();
                file::write_export_single(&view, columns, export).map(|p| vec![p])
            }
            // Per-category: just the open category, or all of them when none is.
            ExportType::PerCategory => {
                let wanted: Vec<&str> = app.session.category().into_iter().collect();
                file::write_export_per_category(&app.catalog, &wanted, export)
            }
        }
    };

    let status = match result {
        Ok(paths) => match paths.last() {
            Some(last) => {
                logf!("Export: OK count={} last={}", paths.len(), last.display());
                format!("Exported {} file(s). Last: {}", paths.len(), last.display())
            }
            None => s!("Export done"),
        },
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status);
    app.persist();
}
