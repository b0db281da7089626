use eframe::egui;

use crate::app::AppState;
use crate::comparison::ResolvedSlot;
use crate::config;
use crate::data::models::QuarterRecord;
use crate::format;
use crate::ui::growth_indicator;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Company Comparison");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{} Comparison", config::REFERENCE_QUARTER)).weak(),
            );
        });
    });
    ui.add_space(8.0);

    if state.store.is_empty() {
        ui.label("No company data loaded.");
        return;
    }

    ui.label("Select Companies to Compare");
    ui.add_space(4.0);

    let entries: Vec<(String, String)> = state
        .store
        .companies()
        .iter()
        .map(|c| (c.symbol.clone(), c.name.clone()))
        .collect();

    // Picks and clears are applied after the widgets so the combo boxes
    // render against a consistent snapshot of the slots
    let mut picks: [Option<String>; 2] = [None, None];
    let mut clears: [bool; 2] = [false, false];

    ui.horizontal(|ui| {
        for index in 0..2 {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(format!("Company {}", index + 1)).weak());

                let selected_text = state
                    .comparison
                    .slot(index)
                    .and_then(|s| state.store.get(s))
                    .map(|c| format!("{} ({})", c.name, c.symbol))
                    .unwrap_or_else(|| "Select company".to_string());

                egui::ComboBox::from_id_salt(("comparison_slot", index))
                    .width(280.0)
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for (symbol, name) in &entries {
                            // The other slot's occupant is greyed out:
                            // a company cannot be compared against itself
                            let blocked = state.comparison.is_blocked(index, symbol);
                            let current = state.comparison.slot(index) == Some(symbol.as_str());
                            ui.add_enabled_ui(!blocked, |ui| {
                                if ui
                                    .selectable_label(current, format!("{} ({})", name, symbol))
                                    .clicked()
                                {
                                    picks[index] = Some(symbol.clone());
                                }
                            });
                        }
                    });

                if state.comparison.slot(index).is_some() && ui.small_button("Clear").clicked() {
                    clears[index] = true;
                }
            });
            ui.add_space(16.0);
        }
    });

    for index in 0..2 {
        if clears[index] {
            state.comparison.clear_slot(index);
        }
        if let Some(symbol) = picks[index].take() {
            if !state.comparison.set_slot(index, &symbol) {
                state.status_message = format!("{} already occupies the other slot", symbol);
            }
        }
    }

    ui.add_space(12.0);

    match state.comparison.resolved(&state.store) {
        Some(slots) => comparison_grid(ui, &slots),
        None => placeholder(ui),
    }
}

fn comparison_grid(ui: &mut egui::Ui, slots: &[ResolvedSlot<'_>; 2]) {
    ui.group(|ui| {
        egui::Grid::new("comparison_grid")
            .striped(true)
            .min_col_width(170.0)
            .show(ui, |ui| {
                ui.strong("Metric");
                for slot in slots {
                    ui.vertical(|ui| {
                        ui.strong(&slot.company.name);
                        ui.label(
                            egui::RichText::new(format!("({})", slot.company.symbol)).weak(),
                        );
                    });
                }
                ui.end_row();

                metric_row(ui, "Revenue", slots, |q| {
                    (format::format_currency(q.revenue), q.revenue_growth)
                });
                metric_row(ui, "Net Profit", slots, |q| {
                    (format::format_currency(q.profit), q.profit_growth)
                });
                metric_row(ui, "Profit Margin", slots, |q| {
                    (format::format_percent(q.margin_percent), q.margin_growth)
                });

                // Shown only when both companies disclose headcount
                if slots.iter().all(|s| s.quarter.discloses_headcount()) {
                    metric_row(ui, "Employee Count", slots, |q| {
                        (format::format_count(q.employees), q.employee_growth)
                    });
                }
            });
    });
}

fn metric_row(
    ui: &mut egui::Ui,
    label: &str,
    slots: &[ResolvedSlot<'_>; 2],
    extract: impl Fn(&QuarterRecord) -> (String, f64),
) {
    ui.label(label);
    for slot in slots {
        let (value, growth) = extract(slot.quarter);
        ui.vertical(|ui| {
            ui.strong(value);
            growth_indicator(ui, growth);
        });
    }
    ui.end_row();
}

fn placeholder(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                egui::RichText::new(
                    "Select two companies above to see detailed quarterly comparison",
                )
                .weak(),
            );
            ui.add_space(24.0);
        });
    });
}
