pub mod chart_utils;
pub mod comparison_view;
pub mod quarter_view;
pub mod trends_view;

use eframe::egui;

use crate::data::models::CallStatus;
use crate::format::{self, GrowthDirection};

pub const POSITIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 170, 94);
pub const NEGATIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(222, 66, 66);

pub fn direction_color(direction: GrowthDirection) -> egui::Color32 {
    match direction {
        GrowthDirection::Positive => POSITIVE_COLOR,
        GrowthDirection::Negative => NEGATIVE_COLOR,
    }
}

/// Colored arrow plus signed percentage, e.g. "↗ +7.2%"
pub fn growth_indicator(ui: &mut egui::Ui, growth: f64) {
    let direction = GrowthDirection::of(growth);
    ui.colored_label(
        direction_color(direction),
        format!("{} {}", direction.arrow(), format::format_growth(growth)),
    );
}

pub fn status_badge(ui: &mut egui::Ui, status: CallStatus) {
    match status {
        CallStatus::Completed => {
            ui.colored_label(POSITIVE_COLOR, "completed");
        }
        CallStatus::Upcoming => {
            ui.colored_label(egui::Color32::GRAY, "upcoming");
        }
    }
}
