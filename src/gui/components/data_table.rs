// src/gui/components/data_table.rs
//
// Read-only result table over the current page's view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{file::Columns, gui::app::App};

/// Index of the price column; right-aligned.
const PRICE_COL: usize = 4;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let columns = page.columns();
    let headers = columns.headers();
    let widths = page.preferred_column_widths();

    let view = app.results();
    if view.is_empty() {
        ui.add_space(8.0);
        ui.label(RichText::new(page.empty_hint()).weak());
        return;
    }

    let rows: Vec<Vec<String>> = view
        .iter()
        .map(|r| match columns {
            Columns::Product => r.to_row(),
            Columns::WithCategory => r.to_row_with_category(),
        })
        .collect();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let mut table = TableBuilder::new(ui)
        .id_salt(("results_table", page.kind()))
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..headers.len() {
        let w = widths.get(ci).copied().unwrap_or(100.0);
        table = table.column(Column::initial(w).at_least(40.0).clip(true));
    }

    table
        .header(22.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.strong(*h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(cells) = rows.get(row.index()) else { return };
                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        if ci == PRICE_COL {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(cell);
                            });
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });
}
