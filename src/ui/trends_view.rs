use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::app::AppState;
use crate::ui::chart_utils::height_control;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Quarterly Trends");
    ui.add_space(8.0);

    if state.selection.is_empty() {
        ui.label("No companies selected. Use the search box to add companies.");
        return;
    }

    // One series per selected company; x is the quarter index, oldest first
    let series: Vec<(String, Vec<[f64; 2]>, Vec<[f64; 2]>)> = state
        .selection
        .list()
        .iter()
        .filter_map(|symbol| state.store.get(symbol))
        .map(|c| {
            let revenue = c
                .quarters
                .iter()
                .enumerate()
                .map(|(i, q)| [i as f64, q.revenue])
                .collect();
            let profit = c
                .quarters
                .iter()
                .enumerate()
                .map(|(i, q)| [i as f64, q.profit])
                .collect();
            (c.symbol.clone(), revenue, profit)
        })
        .collect();

    let quarter_labels: Vec<String> = state
        .selection
        .list()
        .first()
        .and_then(|s| state.store.get(s))
        .map(|c| c.quarters.iter().map(|q| q.label.clone()).collect())
        .unwrap_or_default();
    if !quarter_labels.is_empty() {
        ui.label(
            egui::RichText::new(format!("Quarters, oldest first: {}", quarter_labels.join(" → ")))
                .weak(),
        );
        ui.add_space(4.0);
    }

    height_control(ui, &mut state.chart_heights.revenue, "Revenue Chart Height");
    Plot::new("revenue_trend")
        .height(state.chart_heights.revenue)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_label("Quarter")
        .y_axis_label("Revenue (₹ Cr)")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (symbol, revenue, _) in &series {
                plot_ui.line(Line::new(PlotPoints::from(revenue.clone())).name(symbol));
            }
        });

    ui.add_space(12.0);

    height_control(ui, &mut state.chart_heights.profit, "Net Profit Chart Height");
    Plot::new("profit_trend")
        .height(state.chart_heights.profit)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_label("Quarter")
        .y_axis_label("Net Profit (₹ Cr)")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (symbol, _, profit) in &series {
                plot_ui.line(Line::new(PlotPoints::from(profit.clone())).name(symbol));
            }
        });
}
