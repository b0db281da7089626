use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::data::models::{Company, CompanyStore, ResourceLink};

const COMPANIES_JSON: &str = include_str!("../../assets/companies.json");
const RESOURCES_JSON: &str = include_str!("../../assets/resources.json");

/// Raw resource bundle shape: symbol -> quarter label -> loosely-typed entries.
/// Entries are normalized into [`ResourceLink`] at load time; anything
/// malformed is dropped here rather than surfacing at render time.
type RawResources = HashMap<String, HashMap<String, Vec<Value>>>;

/// Load the embedded company bundle and merge the resource bundle into it
pub fn load() -> Result<CompanyStore> {
    load_from_str(COMPANIES_JSON, RESOURCES_JSON)
}

fn load_from_str(companies_json: &str, resources_json: &str) -> Result<CompanyStore> {
    let mut companies: Vec<Company> =
        serde_json::from_str(companies_json).context("Failed to parse company bundle")?;

    // Symbols must be unique; a duplicate means a corrupt bundle
    for i in 0..companies.len() {
        for j in (i + 1)..companies.len() {
            if companies[i].symbol == companies[j].symbol {
                bail!("Duplicate symbol '{}' in company bundle", companies[i].symbol);
            }
        }
    }

    let mut resources: RawResources =
        serde_json::from_str(resources_json).context("Failed to parse resource bundle")?;

    for company in &mut companies {
        let Some(mut by_quarter) = resources.remove(&company.symbol) else {
            continue;
        };
        for quarter in &mut company.quarters {
            if let Some(entries) = by_quarter.remove(&quarter.label) {
                quarter.resources = normalize_entries(&company.symbol, &quarter.label, entries);
            }
        }
        for label in by_quarter.keys() {
            tracing::warn!(
                "Resource bundle references unknown quarter '{}' for {}",
                label,
                company.symbol
            );
        }
    }

    for symbol in resources.keys() {
        tracing::warn!("Resource bundle references unknown symbol '{}'", symbol);
    }

    tracing::info!("Loaded {} companies from bundle", companies.len());
    Ok(CompanyStore::new(companies))
}

/// Keep only entries that are objects carrying non-empty `name` and `file`
/// strings; everything else is logged and skipped.
fn normalize_entries(symbol: &str, quarter: &str, entries: Vec<Value>) -> Vec<ResourceLink> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let name = entry.get("name").and_then(Value::as_str).unwrap_or("").trim();
            let file = entry.get("file").and_then(Value::as_str).unwrap_or("").trim();
            if name.is_empty() || file.is_empty() {
                tracing::warn!(
                    "Skipping malformed resource entry for {} {}: {}",
                    symbol,
                    quarter,
                    entry
                );
                return None;
            }
            Some(ResourceLink {
                name: name.to_string(),
                file: file.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_bundle_loads() {
        let store = load().expect("embedded bundle should parse");
        assert_eq!(store.len(), 5);
        assert!(store.contains("TCS"));
        assert!(store.contains("ITC"));
    }

    #[test]
    fn test_symbols_unique() {
        let store = load().unwrap();
        for (i, a) in store.companies().iter().enumerate() {
            for b in &store.companies()[i + 1..] {
                assert_ne!(a.symbol, b.symbol, "Duplicate symbol in bundle");
            }
        }
    }

    #[test]
    fn test_resources_merged() {
        let store = load().unwrap();
        let tcs_q3 = store.get("TCS").unwrap().quarter("Q3 FY24").unwrap();
        assert_eq!(tcs_q3.resources.len(), 2);
        assert_eq!(tcs_q3.resources[0].name, "Earnings Call (45 min)");

        // RIL has no entries in the resource bundle; missing keys resolve
        // to an empty collection, not an error
        let ril_q3 = store.get("RIL").unwrap().quarter("Q3 FY24").unwrap();
        assert!(ril_q3.resources.is_empty());
    }

    #[test]
    fn test_malformed_resource_entries_dropped() {
        let companies = r#"[{
            "symbol": "TCS", "name": "Tata Consultancy Services",
            "sector": "Information Technology",
            "quarters": [{
                "label": "Q3 FY24", "revenue": 59162, "profit": 11058,
                "marginPercent": 18.7, "employees": 614795,
                "revenueGrowth": 4.1, "profitGrowth": 7.2,
                "marginGrowth": 0.1, "employeeGrowth": 0.1,
                "callDate": "2024-01-11", "status": "completed"
            }]
        }]"#;
        let resources = r#"{
            "TCS": {
                "Q3 FY24": [
                    { "name": "Earnings Call", "file": "https://example.com/call" },
                    { "name": "", "file": "https://example.com/empty-name" },
                    { "name": "No file key" },
                    "not an object",
                    42
                ]
            }
        }"#;
        let store = load_from_str(companies, resources).unwrap();
        let q3 = store.get("TCS").unwrap().quarter("Q3 FY24").unwrap();
        assert_eq!(q3.resources.len(), 1, "only the well-formed entry survives");
        assert_eq!(q3.resources[0].file, "https://example.com/call");
    }

    #[test]
    fn test_unknown_resource_symbol_ignored() {
        let companies = r#"[{
            "symbol": "TCS", "name": "Tata Consultancy Services",
            "sector": "Information Technology", "quarters": []
        }]"#;
        let resources = r#"{ "WIPRO": { "Q3 FY24": [] } }"#;
        let store = load_from_str(companies, resources).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let companies = r#"[
            { "symbol": "TCS", "name": "A", "sector": "IT", "quarters": [] },
            { "symbol": "TCS", "name": "B", "sector": "IT", "quarters": [] }
        ]"#;
        let err = load_from_str(companies, "{}").unwrap_err();
        assert!(err.to_string().contains("Duplicate symbol"));
    }
}
