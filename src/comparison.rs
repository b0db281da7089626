use crate::config;
use crate::data::models::{Company, CompanyStore, QuarterRecord};

/// A comparison slot resolved against the store at the reference quarter
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSlot<'a> {
    pub company: &'a Company,
    pub quarter: &'a QuarterRecord,
}

/// Two optional company slots for the side-by-side comparison view.
///
/// A symbol may occupy at most one slot: a company cannot be compared
/// against itself.
#[derive(Debug, Clone, Default)]
pub struct ComparisonState {
    slots: [Option<String>; 2],
}

impl ComparisonState {
    /// Put `symbol` into slot `index` (0 or 1). Returns false and leaves
    /// the state unchanged when the symbol already occupies the other slot.
    pub fn set_slot(&mut self, index: usize, symbol: &str) -> bool {
        let other = 1 - index;
        if self.slots[other].as_deref() == Some(symbol) {
            return false;
        }
        self.slots[index] = Some(symbol.to_string());
        true
    }

    pub fn clear_slot(&mut self, index: usize) {
        self.slots[index] = None;
    }

    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots[index].as_deref()
    }

    /// True when `symbol` must be greyed out in the picker for `index`
    /// because it occupies the other slot
    pub fn is_blocked(&self, index: usize, symbol: &str) -> bool {
        self.slots[1 - index].as_deref() == Some(symbol)
    }

    /// Resolve both slots at the reference quarter. Returns `None` until
    /// both slots are filled and each symbol has data for that quarter;
    /// the view shows a placeholder prompt in that case.
    pub fn resolved<'a>(&self, store: &'a CompanyStore) -> Option<[ResolvedSlot<'a>; 2]> {
        let resolve = |slot: &Option<String>| -> Option<ResolvedSlot<'a>> {
            let company = store.get(slot.as_deref()?)?;
            let quarter = company.quarter(config::REFERENCE_QUARTER)?;
            Some(ResolvedSlot { company, quarter })
        };
        Some([resolve(&self.slots[0])?, resolve(&self.slots[1])?])
    }
}
