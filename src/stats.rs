//! Order statistics over latency samples.

/// Percentile of `sorted` (ascending) using linear interpolation between the
/// closest ranks. Returns `None` when empty or when `p` is outside `0..=100`.
pub fn percentile_sorted(sorted: &[u64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }
    if sorted.len() == 1 {
        return Some(sorted[0] as f64);
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let lower_value = sorted[lower] as f64;
    if lower == upper {
        return Some(lower_value);
    }
    let upper_value = sorted[upper] as f64;
    Some(lower_value + (rank - lower as f64) * (upper_value - lower_value))
}

/// Percentile of unsorted samples.
pub fn percentile(samples: &[u64], p: f64) -> Option<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    percentile_sorted(&sorted, p)
}

/// Median, averaging the two middle values for an even count.
pub fn median(samples: &[u64]) -> Option<f64> {
    percentile(samples, 50.0)
}

pub fn mean(samples: &[u64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let sum: f64 = samples.iter().map(|&v| v as f64).sum();
    Some(sum / samples.len() as f64)
}

/// Split samples at `threshold`: values `<=` go left, values `>` go right.
/// Both halves keep file order.
pub fn partition_at(samples: &[u64], threshold: f64) -> (Vec<u64>, Vec<u64>) {
    samples.iter().partition(|&&v| v as f64 <= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_percentile_empty_and_invalid() {
        assert_eq!(percentile(&[], 99.0), None);
        assert_eq!(percentile(&[1, 2, 3], -1.0), None);
        assert_eq!(percentile(&[1, 2, 3], 100.5), None);
    }

    #[test]
    fn test_percentile_single_sample() {
        assert_eq!(percentile(&[42], 0.0), Some(42.0));
        assert_eq!(percentile(&[42], 99.0), Some(42.0));
    }

    #[test]
    fn test_percentile_interpolates_between_ranks() {
        // rank = 0.99 * 2 = 1.98 -> 20 + 0.98 * 10
        assert_close(percentile(&[10, 20, 30], 99.0).unwrap(), 29.8);
        // rank = 0.99 * 9 = 8.91 -> 9 + 0.91 * 1
        let one_to_ten: Vec<u64> = (1..=10).collect();
        assert_close(percentile(&one_to_ten, 99.0).unwrap(), 9.91);
        assert_close(percentile(&one_to_ten, 25.0).unwrap(), 3.25);
    }

    #[test]
    fn test_percentile_ignores_input_order() {
        assert_eq!(
            percentile(&[30, 10, 20], 99.0),
            percentile(&[10, 20, 30], 99.0)
        );
    }

    #[test]
    fn test_percentile_reference_dataset() {
        // Reference: 1..=100 at p99 -> rank 98.01 -> 99.01
        let samples: Vec<u64> = (1..=100).collect();
        assert_close(percentile(&samples, 99.0).unwrap(), 99.01);
        assert_eq!(percentile(&samples, 100.0), Some(100.0));
        assert_eq!(percentile(&samples, 0.0), Some(1.0));
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[30, 10, 20]), Some(20.0));
        assert_eq!(median(&[10, 20, 30, 40]), Some(25.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10, 20, 30]), Some(20.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_partition_value_at_threshold_is_kept() {
        let (kept, outliers) = partition_at(&[5, 10, 15, 10], 10.0);
        assert_eq!(kept, vec![5, 10, 10]);
        assert_eq!(outliers, vec![15]);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let samples = vec![12, 40, 7, 99, 40, 3, 250, 18];
        let threshold = percentile(&samples, 99.0).unwrap();
        let (kept, outliers) = partition_at(&samples, threshold);
        assert_eq!(kept.len() + outliers.len(), samples.len());
        assert!(kept.iter().all(|&v| v as f64 <= threshold));
        assert!(outliers.iter().all(|&v| v as f64 > threshold));

        let mut rejoined: Vec<u64> = kept.iter().chain(&outliers).copied().collect();
        let mut expected = samples.clone();
        rejoined.sort_unstable();
        expected.sort_unstable();
        assert_eq!(rejoined, expected);
    }
}
