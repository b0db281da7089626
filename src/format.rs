//! Pure display formatting for headline metrics. No state, no UI types.

/// Whether a growth delta renders with the positive (up) or negative
/// (down) indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthDirection {
    Positive,
    Negative,
}

impl GrowthDirection {
    /// Zero (and negative zero) counts as Positive
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Positive => "↗",
            Self::Negative => "↘",
        }
    }
}

/// Render an f64 the way the dashboard shows plain numbers: integers
/// without a decimal point, fractions with their shortest representation
fn plain(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// INR crore rendering: four-digit values collapse to thousands of crore
/// with one decimal, smaller values stay as-is.
///
/// `format_currency(59162.0) == "₹59.2K Cr"`, `format_currency(850.0) == "₹850 Cr"`.
pub fn format_currency(value: f64) -> String {
    if value >= 1000.0 {
        format!("₹{:.1}K Cr", value / 1000.0)
    } else {
        format!("₹{} Cr", plain(value))
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", plain(value))
}

/// Signed growth percentage with an explicit "+" for non-negative deltas
pub fn format_growth(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}%", plain(value))
    } else {
        format!("{}%", plain(value))
    }
}

/// Headcount with thousands separators: 614795 -> "614,795"
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_collapses_thousands() {
        assert_eq!(format_currency(59162.0), "₹59.2K Cr");
        assert_eq!(format_currency(235122.0), "₹235.1K Cr");
        assert_eq!(format_currency(1000.0), "₹1.0K Cr");
    }

    #[test]
    fn test_currency_below_threshold() {
        assert_eq!(format_currency(850.0), "₹850 Cr");
        assert_eq!(format_currency(999.0), "₹999 Cr");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(18.7), "18.7%");
        assert_eq!(format_percent(8.0), "8%");
    }

    #[test]
    fn test_growth_sign() {
        assert_eq!(format_growth(7.2), "+7.2%");
        assert_eq!(format_growth(0.0), "+0%");
        assert_eq!(format_growth(-0.3), "-0.3%");
    }

    #[test]
    fn test_direction_tie_break() {
        assert_eq!(GrowthDirection::of(0.0), GrowthDirection::Positive);
        assert_eq!(GrowthDirection::of(-0.0), GrowthDirection::Positive);
        assert_eq!(GrowthDirection::of(-0.1), GrowthDirection::Negative);
        assert_eq!(GrowthDirection::of(7.9), GrowthDirection::Positive);
    }

    #[test]
    fn test_count_separators() {
        assert_eq!(format_count(614795), "614,795");
        assert_eq!(format_count(23829), "23,829");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
    }
}
