//! Well Scorecard: one-page summary of what was logged in a well
//!
//! Builds a six-track figure from a well's curves, an optional lithology
//! striplog and optional formation tops. Each curve is shown as a bar over
//! the depths where it has data, grouped into tracks by measurement family.
//!
//! ## Architecture
//!
//! - **Types**: `Curve`, `Well`, `Top` (the well data model)
//! - **Config**: lookup tables and layout, loaded from TOML with defaults
//! - **Render**: `ScorecardRenderer` (interval detection, classification, drawing)
//! - **Figure**: retained-mode panels and glyphs, serializable for any backend
//! - **Striplog**: `StriplogRender` seam for the lithology track
//!
//! ## Usage
//!
//! ```ignore
//! let renderer = ScorecardRenderer::new(ScorecardConfig::load())?;
//! let figure = renderer.assemble(&well, Some(&striplog), Some(&tops))?;
//! ```

pub mod config;
pub mod figure;
pub mod render;
pub mod striplog;
pub mod types;

// Re-export configuration
pub use config::{ConfigError, ScorecardConfig};

// Re-export commonly used types
pub use figure::{Color, Figure, Glyph, Panel};
pub use render::{
    find_logged_intervals, Classification, LoggedInterval, RenderError, ScorecardRenderer,
};
pub use striplog::{Interval, Striplog, StriplogError, StriplogRender, StriplogStyle};
pub use types::{Curve, CurveError, Top, Well, WellHeader, WellLocation};
