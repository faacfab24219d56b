/// Median of the samples, or 0 when there are none.
///
/// An even number of samples yields the mean of the two middle values.
#[must_use]
pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        f64::midpoint(sorted[mid - 1], sorted[mid])
    } else {
        sorted[mid]
    }
}

/// Arithmetic mean of the samples, or 0 when there are none.
#[expect(clippy::cast_precision_loss, reason = "sample counts are small")]
#[must_use]
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    samples.iter().sum::<f64>() / samples.len() as f64
}

/// `part` as a percentage of `whole`, or 0 when `whole` is 0.
#[expect(clippy::cast_precision_loss, reason = "counts are small")]
#[must_use]
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    part as f64 / whole as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_samples_are_zero() {
        assert!(median(&[]).abs() < f64::EPSILON);
        assert!(mean(&[]).abs() < f64::EPSILON);
        assert!(percentage(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_median_odd() {
        assert!((median(&[5.0, 1.0, 3.0]) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_median_even_averages_middle_pair() {
        assert!((median(&[4.0, 1.0, 3.0, 2.0]) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_median_single() {
        assert!((median(&[42.0]) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean() {
        assert!((mean(&[5.0, 10.0, 20.0]) - 35.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage() {
        assert!((percentage(1, 2) - 50.0).abs() < f64::EPSILON);
        assert!((percentage(3, 3) - 100.0).abs() < f64::EPSILON);
    }
}
