/// Fiscal quarter used for headline metrics and the comparison view
pub const REFERENCE_QUARTER: &str = "Q3 FY24";

/// Season label shown next to the earnings view heading
pub const SEASON_LABEL: &str = "Q3 FY24 Season";

/// Companies selected when the app starts
pub const DEFAULT_SELECTION: &[&str] = &["TCS", "INFY", "RIL"];

/// Cap on the number of search suggestions shown below the search box
pub const MAX_SUGGESTIONS: usize = 8;
