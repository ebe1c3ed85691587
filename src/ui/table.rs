use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

/// Table pagination size, matching the source dashboard.
pub const ROWS_PER_PAGE: usize = 10;

// ---------------------------------------------------------------------------
// Tweet table (bottom panel)
// ---------------------------------------------------------------------------

/// Render the selected tweets as a single-column paginated table.
pub fn tweet_table(ui: &mut Ui, state: &mut AppState) {
    if state.table_rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new("Select points on the plot to list tweets here").weak());
        });
        return;
    }

    let page_count = state.table_rows.len().div_ceil(ROWS_PER_PAGE);
    if state.table_page >= page_count {
        state.table_page = page_count - 1;
    }

    // ---- Page controls ----
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(state.table_page > 0, eframe::egui::Button::new("◀"))
            .clicked()
        {
            state.table_page -= 1;
        }
        ui.label(format!("Page {} / {}", state.table_page + 1, page_count));
        if ui
            .add_enabled(
                state.table_page + 1 < page_count,
                eframe::egui::Button::new("▶"),
            )
            .clicked()
        {
            state.table_page += 1;
        }
    });

    let start = state.table_page * ROWS_PER_PAGE;
    let end = (start + ROWS_PER_PAGE).min(state.table_rows.len());

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("RawTweet");
            });
        })
        .body(|mut body| {
            for text in &state.table_rows[start..end] {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(text);
                    });
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(25usize.div_ceil(ROWS_PER_PAGE), 3);
        assert_eq!(10usize.div_ceil(ROWS_PER_PAGE), 1);
        assert_eq!(1usize.div_ceil(ROWS_PER_PAGE), 1);
    }
}
