//! Formation tops: named depth markers drawn across every track.

use serde::{Deserialize, Serialize};

/// A single formation pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Top {
    pub formation: String,
    /// Representative depth of the pick (m)
    pub depth: f64,
}

impl Top {
    pub fn new(formation: impl Into<String>, depth: f64) -> Self {
        Self {
            formation: formation.into(),
            depth,
        }
    }
}
