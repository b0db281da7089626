use crate::data::models::CompanyStore;

/// Ordered set of selected company symbols driving the earnings tabs,
/// plus the pending text in the search box.
///
/// Every member is guaranteed to exist in the store: adding an unknown
/// symbol is a complete no-op.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    active: Vec<String>,
    pub pending_query: String,
}

impl SelectionState {
    pub fn with_defaults(defaults: &[&str], store: &CompanyStore) -> Self {
        let mut state = Self::default();
        for symbol in defaults {
            state.add(symbol, store);
        }
        state
    }

    /// Append `symbol` iff the store knows it and it is not already
    /// selected. Idempotent. Picking a known company also resets the
    /// search box, so the suggestion list disappears after a pick.
    pub fn add(&mut self, symbol: &str, store: &CompanyStore) {
        if !store.contains(symbol) {
            return;
        }
        if !self.is_selected(symbol) {
            self.active.push(symbol.to_string());
        }
        self.pending_query.clear();
    }

    /// Remove `symbol`; removing a non-member is a no-op
    pub fn remove(&mut self, symbol: &str) {
        self.active.retain(|s| s != symbol);
    }

    /// Current ordered selection, for tab rendering
    pub fn list(&self) -> &[String] {
        &self.active
    }

    pub fn is_selected(&self, symbol: &str) -> bool {
        self.active.iter().any(|s| s == symbol)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::Company;

    fn store() -> CompanyStore {
        let companies = ["TCS", "INFY", "RIL"]
            .iter()
            .map(|s| Company {
                symbol: s.to_string(),
                name: s.to_string(),
                sector: "Test".to_string(),
                quarters: vec![],
            })
            .collect();
        CompanyStore::new(companies)
    }

    #[test]
    fn test_add_is_idempotent() {
        let store = store();
        let mut sel = SelectionState::default();
        sel.add("TCS", &store);
        sel.add("TCS", &store);
        assert_eq!(sel.list(), ["TCS"]);
    }

    #[test]
    fn test_add_preserves_order() {
        let store = store();
        let mut sel = SelectionState::default();
        sel.add("RIL", &store);
        sel.add("TCS", &store);
        sel.add("INFY", &store);
        assert_eq!(sel.list(), ["RIL", "TCS", "INFY"]);
    }

    #[test]
    fn test_unknown_symbol_is_noop() {
        let store = store();
        let mut sel = SelectionState::default();
        sel.pending_query = "wip".to_string();
        sel.add("WIPRO", &store);
        assert!(sel.is_empty());
        assert_eq!(sel.pending_query, "wip", "no-op add must not touch the query");
    }

    #[test]
    fn test_add_clears_pending_query() {
        let store = store();
        let mut sel = SelectionState::default();
        sel.pending_query = "tc".to_string();
        sel.add("TCS", &store);
        assert!(sel.pending_query.is_empty());
    }

    #[test]
    fn test_remove_inverts_add() {
        let store = store();
        let mut sel = SelectionState::default();
        sel.add("TCS", &store);

        let before: Vec<String> = sel.list().to_vec();
        sel.add("INFY", &store);
        sel.remove("INFY");
        assert_eq!(sel.list(), before.as_slice());
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let store = store();
        let mut sel = SelectionState::default();
        sel.add("TCS", &store);
        sel.remove("INFY");
        assert_eq!(sel.list(), ["TCS"]);
    }

    #[test]
    fn test_remove_last_selection_allowed() {
        let store = store();
        let mut sel = SelectionState::default();
        sel.add("TCS", &store);
        sel.remove("TCS");
        assert!(sel.is_empty());
    }

    #[test]
    fn test_with_defaults_skips_unknown() {
        let store = store();
        let sel = SelectionState::with_defaults(&["TCS", "WIPRO", "RIL"], &store);
        assert_eq!(sel.list(), ["TCS", "RIL"]);
    }
}
