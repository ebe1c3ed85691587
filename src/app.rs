use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TweetLensApp {
    pub state: AppState,
}

impl TweetLensApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for TweetLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: selected tweets ----
        egui::TopBottomPanel::bottom("tweet_table")
            .default_height(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::tweet_table(ui, &mut self.state);
            });

        // ---- Central panel: scatter plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &mut self.state);
        });
    }
}
