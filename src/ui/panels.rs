use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::filter::{FilterState, SENTIMENT_FULL_RANGE, SUBJECTIVITY_FULL_RANGE};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter panel: month dropdown plus the two range sliders.
/// Control changes are forwarded to the matching state handler.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Month dropdown ----
    ui.strong("Month");
    let months = state.dataset.distinct_months().to_vec();
    let selected_text = state.filters.month.clone().unwrap_or_else(|| "All".to_string());
    egui::ComboBox::from_id_salt("month_dropdown")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.filters.month.is_none(), "All")
                .clicked()
            {
                state.on_month_selected(None);
            }
            for month in &months {
                let is_selected = state.filters.month.as_deref() == Some(month.as_str());
                if ui.selectable_label(is_selected, month).clicked() {
                    state.on_month_selected(Some(month.clone()));
                }
            }
        });
    ui.separator();

    // ---- Sentiment range ----
    ui.strong("Sentiment");
    if let Some(range) = range_sliders(
        ui,
        "sentiment",
        state.filters.sentiment_range,
        SENTIMENT_FULL_RANGE,
    ) {
        state.on_sentiment_range_changed(range);
    }
    ui.separator();

    // ---- Subjectivity range ----
    ui.strong("Subjectivity");
    if let Some(range) = range_sliders(
        ui,
        "subjectivity",
        state.filters.subjectivity_range,
        SUBJECTIVITY_FULL_RANGE,
    ) {
        state.on_subjectivity_range_changed(range);
    }
    ui.separator();

    if ui.button("Reset filters").clicked() {
        // All three controls back to the sentinel in one step.
        state.filters = FilterState::default_state();
        state.apply_filters();
    }
}

/// A [lo, hi] range as a pair of sliders, each clamped so lo <= hi always
/// holds. Returns the new range when either slider moved this frame.
fn range_sliders(
    ui: &mut Ui,
    id: &str,
    mut range: [f64; 2],
    full: [f64; 2],
) -> Option<[f64; 2]> {
    let mut changed = false;
    ui.push_id(id, |ui: &mut Ui| {
        let hi = range[1];
        ui.horizontal(|ui: &mut Ui| {
            ui.label("min");
            changed |= ui
                .add(Slider::new(&mut range[0], full[0]..=hi).fixed_decimals(2))
                .changed();
        });
        let lo = range[0];
        ui.horizontal(|ui: &mut Ui| {
            ui.label("max");
            changed |= ui
                .add(Slider::new(&mut range[1], lo..=full[1]).fixed_decimals(2))
                .changed();
        });
    });
    changed.then_some(range)
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} tweets loaded, {} plotted, {} selected",
            state.dataset.len(),
            state.plotted.len(),
            state.table_rows.len()
        ));

        ui.separator();

        if ui
            .selectable_label(state.color_by_month, "Color by month")
            .clicked()
        {
            state.color_by_month = !state.color_by_month;
        }

        ui.separator();
        ui.label(RichText::new("Ctrl-drag to select points").weak());

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user pick a replacement dataset. A failed load keeps the current
/// dataset and surfaces the error in the status line.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tweet dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} tweets across months {:?}",
                    dataset.len(),
                    dataset.distinct_months()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
