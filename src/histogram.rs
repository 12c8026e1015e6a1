use crate::model::{Histogram, HistogramBin};

impl Histogram {
    /// Bucket `samples` into `bins` equal-width bins spanning their range.
    ///
    /// Bins are half-open `[start, end)` except the last, which also takes the
    /// maximum. A single distinct value is centred in a range one unit wide.
    pub fn from_samples(samples: &[u64], bins: usize) -> Self {
        let (Some(&min), Some(&max)) = (samples.iter().min(), samples.iter().max()) else {
            return Self { bins: Vec::new() };
        };
        if bins == 0 {
            return Self { bins: Vec::new() };
        }

        let (lo, hi) = if min == max {
            (min as f64 - 0.5, max as f64 + 0.5)
        } else {
            (min as f64, max as f64)
        };
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0u64; bins];
        for &v in samples {
            let idx = (((v as f64 - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: lo + i as f64 * width,
                end: if i + 1 == bins {
                    hi
                } else {
                    lo + (i + 1) as f64 * width
                },
                count,
            })
            .collect();
        Self { bins }
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn bin_width(&self) -> f64 {
        self.bins.first().map(|b| b.end - b.start).unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_samples_have_no_bins() {
        assert!(Histogram::from_samples(&[], 100).bins.is_empty());
        assert!(Histogram::from_samples(&[1, 2], 0).bins.is_empty());
    }

    #[test]
    fn test_counts_sum_to_sample_count() {
        let samples: Vec<u64> = (0..1000).map(|i| (i * 37) % 251).collect();
        let hist = Histogram::from_samples(&samples, 100);
        assert_eq!(hist.bins.len(), 100);
        assert_eq!(hist.total(), samples.len() as u64);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let hist = Histogram::from_samples(&[0, 10], 10);
        assert_eq!(hist.bins[0].count, 1);
        assert_eq!(hist.bins[9].count, 1);
        assert_eq!(hist.bins[9].end, 10.0);
        assert_eq!(hist.bin_width(), 1.0);
    }

    #[test]
    fn test_edges_are_contiguous() {
        let hist = Histogram::from_samples(&[3, 8, 21, 40], 7);
        assert_eq!(hist.bins[0].start, 3.0);
        assert_eq!(hist.bins[6].end, 40.0);
        for pair in hist.bins.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_distinct_value() {
        let hist = Histogram::from_samples(&[42, 42, 42], 4);
        assert_eq!(hist.bins[0].start, 41.5);
        assert_eq!(hist.bins[3].end, 42.5);
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.max_count(), 3);
    }
}
