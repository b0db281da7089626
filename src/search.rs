use crate::data::models::Company;

/// Case-insensitive substring search over symbol and name.
///
/// An empty or whitespace-only query yields no matches (suggestions only
/// appear once the user has typed something). Result order is store order;
/// there is no relevance ranking.
pub fn filter<'a>(query: &str, companies: &'a [Company]) -> Vec<&'a Company> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    companies
        .iter()
        .filter(|c| {
            c.symbol.to_lowercase().contains(&query) || c.name.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(symbol: &str, name: &str) -> Company {
        Company {
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector: "Test".to_string(),
            quarters: vec![],
        }
    }

    fn sample() -> Vec<Company> {
        vec![
            company("TCS", "Tata Consultancy Services"),
            company("INFY", "Infosys Limited"),
            company("RIL", "Reliance Industries"),
            company("HDFCBANK", "HDFC Bank"),
            company("ITC", "ITC Limited"),
        ]
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let companies = sample();
        assert!(filter("", &companies).is_empty());
        assert!(filter("   ", &companies).is_empty());
        assert!(filter("\t", &companies).is_empty());
    }

    #[test]
    fn test_case_insensitive_symbol_and_name() {
        let companies = sample();
        let by_symbol = filter("tcs", &companies);
        assert_eq!(by_symbol.len(), 1);
        assert_eq!(by_symbol[0].symbol, "TCS");

        let by_name = filter("infosys", &companies);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].symbol, "INFY");
    }

    #[test]
    fn test_partition_correctness() {
        let companies = sample();
        let query = "it";
        let matches = filter(query, &companies);

        for c in &matches {
            let hit = c.symbol.to_lowercase().contains(query)
                || c.name.to_lowercase().contains(query);
            assert!(hit, "{} should not have matched '{}'", c.symbol, query);
        }
        let matched: Vec<&str> = matches.iter().map(|c| c.symbol.as_str()).collect();
        for c in &companies {
            let hit = c.symbol.to_lowercase().contains(query)
                || c.name.to_lowercase().contains(query);
            assert_eq!(
                hit,
                matched.contains(&c.symbol.as_str()),
                "partition broken for {}",
                c.symbol
            );
        }
    }

    #[test]
    fn test_store_order_preserved() {
        let companies = sample();
        let matches = filter("limited", &companies);
        let symbols: Vec<&str> = matches.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["INFY", "ITC"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let companies = sample();
        assert!(filter("zzz", &companies).is_empty());
    }
}
