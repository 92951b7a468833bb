//! Summary statistics over per-group degeneracy samples

use crate::error::StatsError;
use anyhow::Result;

/// Mean, spread and order statistics of a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of samples
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (Bessel's correction); `None` below two samples
    pub std_dev: Option<f64>,
    /// Median (mean of the middle pair for an even count)
    pub median: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
}

impl Summary {
    /// Summarise a non-empty sample
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InsufficientData`] for an empty slice
    ///
    /// # Example
    ///
    /// ```
    /// use kcore_stats::Summary;
    ///
    /// let s = Summary::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(s.mean, 3.0);
    /// assert_eq!(s.median, 3.0);
    /// assert!((s.std_dev.unwrap() - 2.5_f64.sqrt()).abs() < 1e-12);
    /// ```
    #[allow(clippy::cast_precision_loss)] // sample counts stay far below 2^52
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(StatsError::InsufficientData.into());
        }

        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;

        let std_dev = (n > 1).then(|| {
            let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (sum_sq / (n - 1) as f64).sqrt()
        });

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = n / 2;
        let median = if n % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Ok(Self {
            count: n,
            mean,
            std_dev,
            median,
            min: sorted[0],
            max: sorted[n - 1],
        })
    }

    /// Summarise integer degeneracy values
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InsufficientData`] for an empty slice
    pub fn from_degeneracies(values: &[u32]) -> Result<Self> {
        let values: Vec<f64> = values.iter().copied().map(f64::from).collect();
        Self::from_values(&values)
    }
}

/// Format a float the way the reports print it (`3.0`, `1.5811388300841898`)
///
/// Very small or large magnitudes use Rust's exponent form (`1e-5`, `1e16`),
/// which has no sign or zero padding on the exponent.
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:?}")
    }
}

/// Format an optional float, printing `nan` when absent
#[must_use]
pub fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "nan".to_string(), format_float)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_to_five() {
        let s = Summary::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(s.count, 5);
        assert!((s.mean - 3.0).abs() < 1e-12);
        assert!((s.std_dev.unwrap() - 1.581_138_830_084_189_8).abs() < 1e-12);
        assert!((s.median - 3.0).abs() < 1e-12);
        assert_eq!((s.min, s.max), (1.0, 5.0));
    }

    #[test]
    fn test_even_median_unsorted_input() {
        let s = Summary::from_degeneracies(&[7, 1, 4, 2]).unwrap();
        assert!((s.median - 3.0).abs() < 1e-12);
        assert_eq!((s.min, s.max), (1.0, 7.0));
    }

    #[test]
    fn test_single_sample_has_no_std_dev() {
        let s = Summary::from_degeneracies(&[4]).unwrap();
        assert_eq!(s.std_dev, None);
        assert!((s.mean - 4.0).abs() < 1e-12);
        assert!((s.median - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_sample() {
        let s = Summary::from_degeneracies(&[3, 3, 3]).unwrap();
        assert_eq!(s.std_dev, Some(0.0));
    }

    #[test]
    fn test_empty_sample_rejected() {
        let err = Summary::from_values(&[]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StatsError>(),
            Some(&StatsError::InsufficientData)
        );
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(2.5_f64.sqrt()), "1.5811388300841898");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_optional(None), "nan");
        assert_eq!(format_optional(Some(0.5)), "0.5");
        assert_eq!(format_float(0.000_01), "1e-5");
        assert_eq!(format_float(1e16), "1e16");
    }
}
