//! Scorecard Configuration Module
//!
//! Track tables, unit colors, striplog legend and layout constants loaded
//! from TOML, so alternate logging conventions can be supplied without code
//! changes.
//!
//! ## Loading Order
//!
//! 1. `SCORECARD_CONFIG` environment variable (path to TOML file)
//! 2. `scorecard.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! The config is injected into the renderer; there is no global instance.
//!
//! ```ignore
//! let renderer = ScorecardRenderer::new(ScorecardConfig::load())?;
//! ```

mod scorecard_config;
pub mod defaults;
pub mod validation;

pub use scorecard_config::*;
