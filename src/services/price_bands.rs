//! Fixed price band table and classifier.

/// A fixed price interval with its display label.
///
/// `max` is inclusive; `None` marks the open-ended top band.
#[derive(Debug, Clone, Copy)]
pub struct PriceBand {
    pub min: i64,
    pub max: Option<i64>,
    pub label: &'static str,
}

impl PriceBand {
    fn contains(&self, price: i64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

/// The fixed band table, ascending, contiguous over all non-negative prices.
///
/// Exactly one band contains any given non-negative price; band identity is
/// the position in this table.
pub const PRICE_BANDS: [PriceBand; 10] = [
    PriceBand { min: 0, max: Some(20_000), label: "2만원 이하" },
    PriceBand { min: 20_001, max: Some(30_000), label: "2만원 초과 ~ 3만원" },
    PriceBand { min: 30_001, max: Some(40_000), label: "3만원 초과 ~ 4만원" },
    PriceBand { min: 40_001, max: Some(50_000), label: "4만원 초과 ~ 5만원" },
    PriceBand { min: 50_001, max: Some(60_000), label: "5만원 초과 ~ 6만원" },
    PriceBand { min: 60_001, max: Some(70_000), label: "6만원 초과 ~ 7만원" },
    PriceBand { min: 70_001, max: Some(80_000), label: "7만원 초과 ~ 8만원" },
    PriceBand { min: 80_001, max: Some(90_000), label: "8만원 초과 ~ 9만원" },
    PriceBand { min: 90_001, max: Some(99_999), label: "9만원 초과 ~ 10만원 미만" },
    PriceBand { min: 100_000, max: None, label: "10만원 이상" },
];

/// Return the index of the band containing `price`, first match wins.
///
/// Every non-negative price matches exactly one band; a negative price
/// matches none and yields `None`.
pub fn classify(price: i64) -> Option<usize> {
    PRICE_BANDS.iter().position(|band| band.contains(price))
}

/// Assert the band table invariants: ten bands, ascending, contiguous,
/// starting at zero, ending open-ended. Called once at server startup.
pub fn verify_band_table() {
    assert_eq!(PRICE_BANDS.len(), 10);
    assert_eq!(PRICE_BANDS[0].min, 0);
    assert!(PRICE_BANDS[PRICE_BANDS.len() - 1].max.is_none());

    for pair in PRICE_BANDS.windows(2) {
        let max = pair[0].max.expect("only the last band is open-ended");
        assert_eq!(pair[1].min, max + 1, "price bands must be contiguous");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_table_invariants() {
        verify_band_table();
    }

    #[test]
    fn test_boundary_prices() {
        // Exact thresholds from the fixed table
        assert_eq!(classify(20_000), Some(0));
        assert_eq!(classify(20_001), Some(1));
        assert_eq!(classify(99_999), Some(8));
        assert_eq!(classify(100_000), Some(9));
    }

    #[test]
    fn test_zero_and_large_prices() {
        assert_eq!(classify(0), Some(0));
        assert_eq!(classify(1), Some(0));
        assert_eq!(classify(55_000), Some(4));
        assert_eq!(classify(10_000_000), Some(9));
    }

    #[test]
    fn test_negative_price_matches_no_band() {
        assert_eq!(classify(-1), None);
    }

    #[test]
    fn test_every_band_boundary_maps_to_itself() {
        for (index, band) in PRICE_BANDS.iter().enumerate() {
            assert_eq!(classify(band.min), Some(index));
            if let Some(max) = band.max {
                assert_eq!(classify(max), Some(index));
            }
        }
    }

    #[test]
    fn test_labels_match_fixed_table() {
        assert_eq!(PRICE_BANDS[0].label, "2만원 이하");
        assert_eq!(PRICE_BANDS[8].label, "9만원 초과 ~ 10만원 미만");
        assert_eq!(PRICE_BANDS[9].label, "10만원 이상");
    }
}
