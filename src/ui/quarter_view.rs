use eframe::egui;

use crate::app::AppState;
use crate::config;
use crate::data::models::{CallStatus, Company, QuarterRecord};
use crate::format;
use crate::ui::{growth_indicator, status_badge};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Quarterly Earnings Data");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(config::SEASON_LABEL).weak());
        });
    });
    ui.add_space(8.0);

    if state.store.is_empty() {
        ui.label("No company data loaded.");
        return;
    }
    if state.selection.is_empty() {
        ui.label("No companies selected. Use the search box to add companies.");
        return;
    }

    // Tab strip over the current selection. Every tab carries a remove
    // control; removing the last one just empties the view.
    let symbols: Vec<String> = state.selection.list().to_vec();
    let mut pending_remove: Option<String> = None;
    ui.horizontal_wrapped(|ui| {
        for (i, symbol) in symbols.iter().enumerate() {
            if ui
                .selectable_label(state.active_company_idx == i, symbol)
                .clicked()
            {
                state.active_company_idx = i;
            }
            if ui
                .small_button("✕")
                .on_hover_text(format!("Remove {}", symbol))
                .clicked()
            {
                pending_remove = Some(symbol.clone());
            }
            ui.add_space(6.0);
        }
    });
    if let Some(symbol) = pending_remove {
        state.selection.remove(&symbol);
        state.status_message = format!("Removed {} from selection", symbol);
    }
    if state.active_company_idx >= state.selection.len() {
        state.active_company_idx = state.selection.len().saturating_sub(1);
    }

    let Some(symbol) = state.selection.list().get(state.active_company_idx) else {
        return;
    };
    let Some(company) = state.store.get(symbol) else {
        return;
    };

    ui.add_space(8.0);
    company_card(ui, company);
}

fn company_card(ui: &mut egui::Ui, company: &Company) {
    let reference = company.quarter(config::REFERENCE_QUARTER);

    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.strong(&company.name);
                ui.label(
                    egui::RichText::new(format!(
                        "{} • {} • {}",
                        company.symbol,
                        company.sector,
                        config::REFERENCE_QUARTER
                    ))
                    .weak(),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match reference {
                    Some(q) => status_badge(ui, q.status),
                    None => {
                        ui.colored_label(egui::Color32::GRAY, "Pending");
                    }
                }
            });
        });
        ui.separator();

        match reference {
            Some(quarter) => quarter_metrics(ui, quarter),
            None => {
                ui.label("No data reported for this quarter yet.");
            }
        }
    });

    ui.add_space(8.0);
    ui.collapsing("All quarters", |ui| quarters_table(ui, company));
}

fn quarter_metrics(ui: &mut egui::Ui, quarter: &QuarterRecord) {
    egui::Grid::new("quarter_metrics")
        .num_columns(3)
        .min_col_width(120.0)
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Revenue").weak());
            ui.strong(format::format_currency(quarter.revenue));
            growth_indicator(ui, quarter.revenue_growth);
            ui.end_row();

            ui.label(egui::RichText::new("Net Profit").weak());
            ui.strong(format::format_currency(quarter.profit));
            growth_indicator(ui, quarter.profit_growth);
            ui.end_row();

            ui.label(egui::RichText::new("Profit Margin").weak());
            ui.strong(format::format_percent(quarter.margin_percent));
            growth_indicator(ui, quarter.margin_growth);
            ui.end_row();

            // Undisclosed headcount (0) suppresses the row entirely
            if quarter.discloses_headcount() {
                ui.label(egui::RichText::new("Employees").weak());
                ui.strong(format::format_count(quarter.employees));
                growth_indicator(ui, quarter.employee_growth);
                ui.end_row();
            }

            ui.label(egui::RichText::new("Call Date").weak());
            ui.strong(quarter.call_date.format("%b %d, %Y").to_string());
            ui.label("");
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("Resources").weak());
        if quarter.resources.is_empty() {
            ui.colored_label(egui::Color32::GRAY, "Pending");
        } else {
            for link in &quarter.resources {
                if ui.small_button(&link.name).on_hover_text(&link.file).clicked() {
                    // External navigation in a new context; content is never
                    // fetched or validated here
                    ui.ctx().open_url(egui::OpenUrl::new_tab(&link.file));
                }
            }
        }
    });
}

fn quarters_table(ui: &mut egui::Ui, company: &Company) {
    egui::Grid::new(("quarters_table", &company.symbol))
        .striped(true)
        .min_col_width(90.0)
        .show(ui, |ui| {
            ui.strong("Quarter");
            ui.strong("Revenue");
            ui.strong("Net Profit");
            ui.strong("Margin");
            ui.strong("Employees");
            ui.strong("Call Date");
            ui.strong("Status");
            ui.end_row();

            for q in &company.quarters {
                ui.label(&q.label);
                ui.label(format::format_currency(q.revenue));
                ui.label(format::format_currency(q.profit));
                ui.label(format::format_percent(q.margin_percent));
                if q.discloses_headcount() {
                    ui.label(format::format_count(q.employees));
                } else {
                    ui.label("-");
                }
                ui.label(q.call_date.format("%b %d, %Y").to_string());
                match q.status {
                    CallStatus::Completed => ui.label("completed"),
                    CallStatus::Upcoming => ui.label("upcoming"),
                };
                ui.end_row();
            }
        });
}
