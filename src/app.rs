use eframe::egui;

use crate::comparison::ComparisonState;
use crate::config;
use crate::data::bundle;
use crate::data::models::CompanyStore;
use crate::search;
use crate::selection::SelectionState;
use crate::ui;

/// Active tab in the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Earnings,
    Comparison,
    Trends,
}

/// Per-chart height overrides (pixels), adjustable by the user at runtime
#[derive(Debug, Clone)]
pub struct ChartHeights {
    pub revenue: f32,
    pub profit: f32,
}

impl Default for ChartHeights {
    fn default() -> Self {
        Self {
            revenue: 240.0,
            profit: 240.0,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub store: CompanyStore,
    pub selection: SelectionState,
    pub comparison: ComparisonState,
    pub active_tab: Tab,
    pub active_company_idx: usize,
    pub status_message: String,
    pub chart_heights: ChartHeights,
}

impl Default for AppState {
    fn default() -> Self {
        let (store, status_message) = match bundle::load() {
            Ok(store) => {
                let msg = format!("Loaded {} companies. {}.", store.len(), config::SEASON_LABEL);
                (store, msg)
            }
            Err(e) => {
                tracing::error!("Failed to load company bundle: {:?}", e);
                (
                    CompanyStore::default(),
                    "Company bundle failed to load; dashboard is empty.".to_string(),
                )
            }
        };

        let selection = SelectionState::with_defaults(config::DEFAULT_SELECTION, &store);

        Self {
            store,
            selection,
            comparison: ComparisonState::default(),
            active_tab: Tab::Earnings,
            active_company_idx: 0,
            status_message,
            chart_heights: ChartHeights::default(),
        }
    }
}

/// Main application struct for eframe
#[derive(Default)]
pub struct EarningsApp {
    pub state: AppState,
}

impl EarningsApp {
    /// Search box with a suggestion popup. Clicking a suggestion adds the
    /// company to the selection and clears the query, which also hides
    /// the suggestions again.
    fn search_box(&mut self, ui: &mut egui::Ui) {
        let suggestions: Vec<(String, String)> =
            search::filter(&self.state.selection.pending_query, self.state.store.companies())
                .into_iter()
                .take(config::MAX_SUGGESTIONS)
                .map(|c| (c.symbol.clone(), c.name.clone()))
                .collect();

        let response = ui.add(
            egui::TextEdit::singleline(&mut self.state.selection.pending_query)
                .hint_text("Search companies (e.g. TCS, Infosys, Reliance)")
                .desired_width(280.0),
        );

        let popup_id = ui.make_persistent_id("company_search_suggestions");
        if response.has_focus() && !suggestions.is_empty() {
            ui.memory_mut(|mem| mem.open_popup(popup_id));
        }

        let mut picked: Option<String> = None;
        egui::popup_below_widget(
            ui,
            popup_id,
            &response,
            egui::PopupCloseBehavior::CloseOnClickOutside,
            |ui| {
                ui.set_min_width(280.0);
                for (symbol, name) in &suggestions {
                    let already = self.state.selection.is_selected(symbol);
                    let text = if already {
                        format!("{} ({}) — already added", name, symbol)
                    } else {
                        format!("{} ({})", name, symbol)
                    };
                    if ui.selectable_label(false, text).clicked() {
                        picked = Some(symbol.clone());
                    }
                }
            },
        );

        if let Some(symbol) = picked {
            self.state.selection.add(&symbol, &self.state.store);
            self.state.status_message = format!("Added {} to selection", symbol);
            ui.memory_mut(|mem| mem.close_popup());
        }
    }
}

impl eframe::App for EarningsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel with title, tabs and the company search box
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("EarningsHub India");
                ui.separator();
                ui.selectable_value(&mut self.state.active_tab, Tab::Earnings, "Earnings");
                ui.selectable_value(&mut self.state.active_tab, Tab::Comparison, "Comparison");
                ui.selectable_value(&mut self.state.active_tab, Tab::Trends, "Trends");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.search_box(ui);
                });
            });
        });

        // Bottom status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
            });
        });

        // Central panel with active tab content (scrollable when content overflows)
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| match self.state.active_tab {
                    Tab::Earnings => ui::quarter_view::render(ui, &mut self.state),
                    Tab::Comparison => ui::comparison_view::render(ui, &mut self.state),
                    Tab::Trends => ui::trends_view::render(ui, &mut self.state),
                });
        });
    }
}
