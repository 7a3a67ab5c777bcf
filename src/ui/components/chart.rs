use std::ops::RangeInclusive;

use chrono::DateTime;
use eframe::egui;
use egui_plot::{GridMark, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if state.is_empty() {
        ui.label("The report contained no sentiment entries");
        return;
    }

    let series = state.plot_points();

    Plot::new("sentiment_over_time")
        .x_axis_label("Time")
        .y_axis_label("Sentiment Score")
        .x_axis_formatter(format_time_mark)
        .show_grid(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new("sentiment", PlotPoints::from(series.clone())));
            plot_ui.points(
                Points::new("sentiment", PlotPoints::from(series))
                    .shape(MarkerShape::Circle)
                    .radius(3.0)
                    .filled(true),
            );
        });
}

fn format_time_mark(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    match DateTime::from_timestamp(mark.value.round() as i64, 0) {
        Some(timestamp) => timestamp.format("%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}
