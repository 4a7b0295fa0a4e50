use statrs::statistics::Statistics;

/// Midpoint of two prices.
#[inline]
pub fn average_price(price_a: f64, price_b: f64) -> f64 {
    (price_a + price_b) / 2.0
}

/// `difference` expressed as a percentage of `reference`.
/// A non-positive reference yields 0.0 rather than NaN/inf.
pub fn percent_of(difference: f64, reference: f64) -> f64 {
    if reference <= 0.0 || !reference.is_finite() {
        return 0.0;
    }
    difference / reference * 100.0
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    // statrs yields NaN on empty input, hence the guard above
    Statistics::mean(values.iter())
}

/// Largest value, 0.0 for an empty slice.
pub fn max_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Statistics::max(values.iter())
}

/// True when `price` can take part in a percentage computation.
#[inline]
pub fn is_usable_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_guards_zero_reference() {
        assert_eq!(percent_of(5.0, 0.0), 0.0);
        assert_eq!(percent_of(5.0, -1.0), 0.0);
        assert!((percent_of(2.0, 101.0) - 1.980198).abs() < 1e-6);
    }

    #[test]
    fn test_empty_reductions_are_zero() {
        assert_eq!(mean_or_zero(&[]), 0.0);
        assert_eq!(max_or_zero(&[]), 0.0);
    }

    #[test]
    fn test_reductions() {
        let values = [1.0, 4.0, 2.5];
        assert!((mean_or_zero(&values) - 2.5).abs() < 1e-12);
        assert_eq!(max_or_zero(&values), 4.0);
    }

    #[test]
    fn test_usable_price() {
        assert!(is_usable_price(0.0001));
        assert!(!is_usable_price(0.0));
        assert!(!is_usable_price(-3.0));
        assert!(!is_usable_price(f64::NAN));
    }
}
