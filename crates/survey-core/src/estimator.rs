//! Single-value salary estimate from a reported range.

/// Share of the upper bound used when only the upper bound is reported.
const UPPER_ONLY_FACTOR: f64 = 0.8;

/// Multiple of the lower bound used when only the lower bound is reported.
const LOWER_ONLY_FACTOR: f64 = 1.2;

/// Estimate a representative salary from optional range bounds.
///
/// Returns `None` when neither bound is known. Both bounds give the midpoint,
/// a lone upper bound is discounted and a lone lower bound is marked up.
///
/// Bounds are taken as given: zero and other placeholder values must be
/// normalized away beforehand (see [`crate::RawSalaryRange::reported`]).
#[must_use]
pub fn estimate(lower: Option<f64>, upper: Option<f64>) -> Option<f64> {
    match (lower, upper) {
        (None, None) => None,
        (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
        (None, Some(upper)) => Some(upper * UPPER_ONLY_FACTOR),
        (Some(lower), None) => Some(lower * LOWER_ONLY_FACTOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bounds() {
        assert_eq!(estimate(None, None), None);
    }

    #[test]
    fn test_both_bounds_midpoint() {
        assert_eq!(estimate(Some(1000.0), Some(2000.0)), Some(1500.0));
        assert_eq!(estimate(Some(100_001.0), Some(100_002.0)), Some(100_001.5));
        assert_eq!(estimate(Some(0.0), Some(0.0)), Some(0.0));
    }

    #[test]
    fn test_upper_only() {
        assert_eq!(estimate(None, Some(100_000.0)), Some(80_000.0));
        assert_eq!(estimate(None, Some(3000.0)), Some(2400.0));
    }

    #[test]
    fn test_lower_only() {
        assert_eq!(estimate(Some(100_000.0), None), Some(120_000.0));
    }
}
