//! Curve classification: which track a curve goes in and what color its bar is.

use crate::config::{defaults, ScorecardConfig};
use crate::figure::Color;
use crate::types::Curve;
use std::collections::HashMap;
use tracing::warn;

/// Where a curve is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Track index, or `None` when neither mnemonic nor units place it
    pub track: Option<usize>,
    pub color: Color,
}

/// Lookup tables resolved from config for fast, case-normalized access.
#[derive(Debug, Clone)]
pub(crate) struct TrackTables {
    curve_tracks: HashMap<String, usize>,
    /// Keys upper-cased
    unit_colors: HashMap<String, Color>,
    /// Keys opaque
    color_tracks: HashMap<Color, usize>,
    fallback: Color,
}

impl TrackTables {
    pub(crate) fn from_config(config: &ScorecardConfig) -> Self {
        let curve_tracks = config
            .curve_tracks
            .iter()
            .map(|(m, t)| (m.clone(), *t))
            .collect();
        let unit_colors = config
            .unit_colors
            .iter()
            .map(|(u, c)| (normalize_units(u), *c))
            .collect();
        let color_tracks = config
            .color_tracks
            .iter()
            .filter_map(|(name, track)| match name.parse::<Color>() {
                Ok(color) => Some((color.with_alpha(1.0), *track)),
                Err(e) => {
                    warn!(error = %e, "Ignoring color_tracks entry");
                    None
                }
            })
            .collect();
        Self {
            curve_tracks,
            unit_colors,
            color_tracks,
            fallback: defaults::FALLBACK_COLOR,
        }
    }

    /// Mnemonic lookup is exact; units lookup ignores case and surrounding
    /// whitespace. An unknown mnemonic is unassigned unless `color_tracks`
    /// maps its color (alpha ignored) to a track.
    pub(crate) fn classify(&self, mnemonic: &str, units: &str) -> Classification {
        let color = self
            .unit_colors
            .get(&normalize_units(units))
            .copied()
            .unwrap_or(self.fallback);
        let track = self
            .curve_tracks
            .get(mnemonic)
            .or_else(|| self.color_tracks.get(&color.with_alpha(1.0)))
            .copied();
        Classification { track, color }
    }

    pub(crate) fn classify_curve(&self, curve: &Curve) -> Classification {
        self.classify(curve.mnemonic(), curve.units())
    }
}

fn normalize_units(units: &str) -> String {
    units.trim().to_uppercase()
}
