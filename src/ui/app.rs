use eframe::egui;

use super::components::chart;
use super::state::AppState;

pub struct SentimentApp {
    state: AppState,
}

impl SentimentApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sentiment Progression Over Time");
            ui.separator();
            chart::render(ui, &self.state);
        });
    }
}
