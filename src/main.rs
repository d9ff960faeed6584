//! Tic-tac-toe GUI
//!
//! A single-window tic-tac-toe game with a time-traveling move history.

use anyhow::anyhow;
use tictactoe::ui::TicTacToeApp;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([780.0, 560.0])
            .with_min_inner_size([620.0, 460.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
    .map_err(|e| anyhow!("failed to start ui: {e}"))
}
