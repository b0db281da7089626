use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Earnings-call status for a quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Completed,
    Upcoming,
}

/// A downloadable/openable artifact attached to a quarter
/// (call recording, slide deck, press release)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub name: String,
    pub file: String,
}

/// Reported figures for a single fiscal quarter.
///
/// Currency values are in INR crore. `employees == 0` means the company
/// does not disclose headcount; growth fields are signed percentage deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterRecord {
    pub label: String,
    pub revenue: f64,
    pub profit: f64,
    pub margin_percent: f64,
    pub employees: u64,
    pub revenue_growth: f64,
    pub profit_growth: f64,
    pub margin_growth: f64,
    pub employee_growth: f64,
    pub call_date: NaiveDate,
    pub status: CallStatus,
    #[serde(default)]
    pub resources: Vec<ResourceLink>,
}

impl QuarterRecord {
    pub fn discloses_headcount(&self) -> bool {
        self.employees > 0
    }
}

/// A listed company with its per-quarter records, oldest quarter first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub quarters: Vec<QuarterRecord>,
}

impl Company {
    pub fn quarter(&self, label: &str) -> Option<&QuarterRecord> {
        self.quarters.iter().find(|q| q.label == label)
    }
}

/// Read-only table of all bundled companies.
///
/// Loaded once at startup and never mutated; iteration order is the
/// bundle order, which also defines search-result order.
#[derive(Debug, Clone, Default)]
pub struct CompanyStore {
    companies: Vec<Company>,
}

impl CompanyStore {
    pub fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn get(&self, symbol: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}
