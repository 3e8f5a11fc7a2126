//! Logged-interval detection
//!
//! A curve is drawn as one bar per contiguous run of finite samples. Gaps
//! (NaN / infinite samples) split runs; leading and trailing gaps are not
//! part of any run.

use super::RenderError;
use crate::types::Curve;
use serde::Serialize;

/// A maximal run of finite samples, `start..=end` in sample indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoggedInterval {
    pub start: usize,
    pub end: usize,
    /// Basis depth at `start`
    pub top: f64,
    /// Basis depth at `end`
    pub base: f64,
    /// `base - top`; zero for a single-sample run
    pub span: f64,
}

impl LoggedInterval {
    fn from_run(start: usize, end: usize, basis: &[f64]) -> Self {
        let top = basis[start];
        let base = basis[end];
        Self {
            start,
            end,
            top,
            base,
            span: base - top,
        }
    }

    /// Depth halfway down the run.
    pub fn mid_depth(&self) -> f64 {
        self.top + self.span / 2.0
    }
}

/// Find every run of finite samples in `curve`.
///
/// Errors if the curve has no finite sample at all: there is nothing to
/// anchor a bar to.
pub fn find_logged_intervals(curve: &Curve) -> Result<Vec<LoggedInterval>, RenderError> {
    let basis = curve.basis();
    let mut intervals = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, value) in curve.samples().iter().enumerate() {
        match (value.is_finite(), run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                intervals.push(LoggedInterval::from_run(start, i - 1, basis));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        intervals.push(LoggedInterval::from_run(start, curve.len() - 1, basis));
    }

    if intervals.is_empty() {
        return Err(RenderError::NoFiniteSamples {
            mnemonic: curve.mnemonic().to_string(),
        });
    }
    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAN: f64 = f64::NAN;

    fn curve(samples: Vec<f64>) -> Curve {
        Curve::regular("GR", "API", samples, 1000.0, 0.5)
    }

    #[test]
    fn fully_finite_curve_is_one_interval() {
        let c = curve(vec![50.0, 60.0, 70.0, 80.0, 90.0]);
        let intervals = find_logged_intervals(&c).unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!((intervals[0].start, intervals[0].end), (0, 4));
        assert!((intervals[0].span - 2.0).abs() < 1e-12);
        assert!((intervals[0].top - 1000.0).abs() < 1e-12);
    }

    #[test]
    fn gap_splits_into_two_intervals() {
        let c = curve(vec![1.0, 2.0, 3.0, NAN, NAN, 6.0, 7.0]);
        let intervals = find_logged_intervals(&c).unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!((intervals[0].start, intervals[0].end), (0, 2));
        assert_eq!((intervals[1].start, intervals[1].end), (5, 6));
        assert!((intervals[1].top - 1002.5).abs() < 1e-12);
        assert!((intervals[1].span - 0.5).abs() < 1e-12);
    }

    #[test]
    fn leading_and_trailing_gaps_are_excluded() {
        let c = curve(vec![NAN, NAN, 4.0, 5.0, 6.0, NAN]);
        let intervals = find_logged_intervals(&c).unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!((intervals[0].start, intervals[0].end), (2, 4));
        assert!((intervals[0].top - 1001.0).abs() < 1e-12);
    }

    #[test]
    fn infinite_values_count_as_missing() {
        let c = curve(vec![1.0, f64::INFINITY, 3.0]);
        assert_eq!(find_logged_intervals(&c).unwrap().len(), 2);
    }

    #[test]
    fn single_finite_sample_is_zero_height() {
        let c = curve(vec![NAN, 42.0, NAN]);
        let intervals = find_logged_intervals(&c).unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].span, 0.0);
        assert!((intervals[0].mid_depth() - 1000.5).abs() < 1e-12);
    }

    #[test]
    fn all_missing_is_an_error() {
        let c = curve(vec![NAN, NAN]);
        let err = find_logged_intervals(&c).unwrap_err();
        assert!(matches!(err, RenderError::NoFiniteSamples { ref mnemonic } if mnemonic == "GR"));

        let empty = curve(Vec::new());
        assert!(find_logged_intervals(&empty).is_err());
    }
}
