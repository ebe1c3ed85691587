mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::TweetLensApp;
use eframe::egui;
use state::AppState;

/// Dataset loaded when no path is given on the command line.
const DEFAULT_DATASET: &str = "ProcessedTweets.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET.to_string())
        .into();

    // The dashboard must not come up without its dataset.
    let dataset = match data::loader::load_file(&path) {
        Ok(ds) => {
            log::info!(
                "Loaded {} tweets from {} across months {:?}",
                ds.len(),
                path.display(),
                ds.distinct_months()
            );
            ds
        }
        Err(e) => {
            log::error!("Failed to load dataset {}: {e:#}", path.display());
            eprintln!("Failed to load dataset {}: {e:#}", path.display());
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TweetLens – Tweet Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(TweetLensApp::new(AppState::new(dataset))))),
    )
}
