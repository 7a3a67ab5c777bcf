mod common;
mod config;
mod net;
mod transcript;
mod ui;

use std::error::Error;
use std::path::Path;

use clap::Parser;
use dotenvy::dotenv;

use common::SentimentReport;
use net::SentimentClient;
use ui::{AppState, SentimentApp};

#[derive(Parser)]
#[command(
    name = "rust_sentiment_plot",
    version,
    about = "Plot sentiment progression for a saved chat transcript"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    // 1. Load the saved conversation
    let chat_json = transcript::load_chat_data(Path::new(&app_config.chat_file))?;
    log::info!("Loaded transcript from {}", app_config.chat_file);

    // 2. Request sentiment scores
    let client = SentimentClient::new(app_config.api_url.clone());
    match client.request_sentiment(&chat_json).await? {
        Some(report) => {
            log::info!("Sentiment data received. Plotting...");
            // 3. Show the chart (blocks until the window closes)
            run_chart(report)?;
        }
        None => {
            log::error!("Could not gather sentiment data.");
        }
    }

    Ok(())
}

fn run_chart(report: SentimentReport) -> Result<(), Box<dyn Error>> {
    let state = AppState::from_report(&report)?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1000.0, 500.0]),
        ..Default::default()
    };

    let mut state = Some(state);
    eframe::run_native(
        "Sentiment Progression Over Time",
        options,
        Box::new(move |cc| {
            let state = state
                .take()
                .expect("SentimentApp should only be initialized once");

            Ok(Box::new(SentimentApp::new(cc, state)))
        }),
    )?;

    Ok(())
}
