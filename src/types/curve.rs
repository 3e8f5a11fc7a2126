//! Logged curve: samples on a parallel depth basis.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    #[error("Curve {mnemonic}: {samples} samples but {basis} basis depths")]
    LengthMismatch {
        mnemonic: String,
        samples: usize,
        basis: usize,
    },
}

/// A named sequence of measurements at well depths.
///
/// Missing samples are stored as non-finite values (NaN). `samples[i]` was
/// measured at `basis[i]`; the two vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    mnemonic: String,
    units: String,
    description: String,
    samples: Vec<f64>,
    basis: Vec<f64>,
}

impl Curve {
    pub fn new(
        mnemonic: impl Into<String>,
        units: impl Into<String>,
        samples: Vec<f64>,
        basis: Vec<f64>,
    ) -> Result<Self, CurveError> {
        let mnemonic = mnemonic.into();
        if samples.len() != basis.len() {
            return Err(CurveError::LengthMismatch {
                mnemonic,
                samples: samples.len(),
                basis: basis.len(),
            });
        }
        Ok(Self {
            mnemonic,
            units: units.into(),
            description: String::new(),
            samples,
            basis,
        })
    }

    /// Curve sampled at a regular depth step starting at `start`.
    pub fn regular(
        mnemonic: impl Into<String>,
        units: impl Into<String>,
        samples: Vec<f64>,
        start: f64,
        step: f64,
    ) -> Self {
        let basis = (0..samples.len()).map(|i| start + step * i as f64).collect();
        Self {
            mnemonic: mnemonic.into(),
            units: units.into(),
            description: String::new(),
            samples,
            basis,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn basis(&self) -> &[f64] {
        &self.basis
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Deepest finite value among the samples, used when this curve is the
    /// depth curve itself.
    pub fn max_finite_sample(&self) -> Option<f64> {
        self.samples
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }
}
