/// Highest value on the grade-point scale.
pub const MAX_GRADE_POINT: f64 = 10.0;

/// Divides an accumulated weighted total by its total weight. Returns 0.0 when
/// there is no weight to divide by.
pub fn weighted_mean(weighted_total: f64, total_weight: f64) -> f64 {
    if total_weight > 0.0 {
        weighted_total / total_weight
    } else {
        0.0
    }
}

/// Maps an average on the 0–10 scale to a 0–100 fill percentage.
pub fn scale_percent(value: f64) -> f64 {
    (value / MAX_GRADE_POINT) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_mean_with_zero_weight() {
        assert_eq!(weighted_mean(10.0, 0.0), 0.0);
        assert_eq!(weighted_mean(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_weighted_mean_normal_values() {
        assert_eq!(weighted_mean(36.0, 4.0), 9.0);
        assert_eq!(weighted_mean(15.0, 5.0), 3.0);
    }

    #[test]
    fn test_scale_percent() {
        assert_eq!(scale_percent(0.0), 0.0);
        assert_eq!(scale_percent(7.5), 75.0);
        assert_eq!(scale_percent(10.0), 100.0);
    }
}
