//! Well container: header, location and the curves logged in it.

use super::Curve;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well identification shown in the scorecard header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellHeader {
    pub name: String,
    /// Unique well identifier
    #[serde(default)]
    pub uwi: String,
}

/// Well location metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellLocation {
    /// Kelly-bushing elevation (m)
    #[serde(default)]
    pub kb: Option<f64>,
    /// Total measured depth (m)
    #[serde(default)]
    pub td: Option<f64>,
}

/// A well and its logged curves, keyed by curve name.
///
/// Curves are kept in a `BTreeMap` so iteration (and therefore slot order in
/// the scorecard tracks) is alphabetical and reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Well {
    pub header: WellHeader,
    pub location: WellLocation,
    pub data: BTreeMap<String, Curve>,
}

impl Well {
    pub fn new(header: WellHeader, location: WellLocation) -> Self {
        Self {
            header,
            location,
            data: BTreeMap::new(),
        }
    }

    /// Insert a curve under its own mnemonic, replacing any previous curve.
    pub fn insert(&mut self, curve: Curve) -> Option<Curve> {
        self.data.insert(curve.mnemonic().to_string(), curve)
    }

    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.insert(curve);
        self
    }

    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.data.get(name)
    }

    /// First curve found under any of `depth_fields`, tried in order.
    pub fn basis<S: AsRef<str>>(&self, depth_fields: &[S]) -> Option<&Curve> {
        depth_fields
            .iter()
            .find_map(|field| self.data.get(field.as_ref()))
    }

    /// Total depth: `location.td` when known, otherwise the deepest finite
    /// value on the depth curve.
    pub fn total_depth(&self, basis: &Curve) -> Option<f64> {
        self.location
            .td
            .filter(|td| td.is_finite())
            .or_else(|| basis.max_finite_sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth_curve(name: &str) -> Curve {
        Curve::regular(name, "M", vec![0.0, 100.0, 200.0], 0.0, 100.0)
    }

    #[test]
    fn basis_prefers_first_field_name() {
        let well = Well::default()
            .with_curve(depth_curve("DEPTH"))
            .with_curve(depth_curve("DEPT"));
        let basis = well.basis(&["DEPT", "DEPTH"]).unwrap();
        assert_eq!(basis.mnemonic(), "DEPT");
    }

    #[test]
    fn basis_falls_back_to_second_field_name() {
        let well = Well::default().with_curve(depth_curve("DEPTH"));
        assert_eq!(well.basis(&["DEPT", "DEPTH"]).unwrap().mnemonic(), "DEPTH");
        assert!(Well::default().basis(&["DEPT", "DEPTH"]).is_none());
    }

    #[test]
    fn total_depth_prefers_location() {
        let mut well = Well::default().with_curve(depth_curve("DEPT"));
        let basis = well.curve("DEPT").unwrap().clone();
        assert_eq!(well.total_depth(&basis), Some(200.0));
        well.location.td = Some(2500.0);
        assert_eq!(well.total_depth(&basis), Some(2500.0));
    }
}
