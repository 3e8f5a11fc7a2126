//! Scorecard Configuration - lookup tables and layout as TOML values
//!
//! Every table the renderer consults (mnemonic to track, units to color,
//! color to track, striplog legend) lives here as plain data. Each struct
//! implements `Default` from the tables in `defaults`, so a missing file or a
//! partial file renders with the standard conventions.

use super::defaults;
use crate::figure::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable pointing at a scorecard TOML file.
pub const CONFIG_ENV_VAR: &str = "SCORECARD_CONFIG";

/// File looked up in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "scorecard.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for scorecard rendering.
///
/// Load with `ScorecardConfig::load()` which searches:
/// 1. `$SCORECARD_CONFIG` env var
/// 2. `./scorecard.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardConfig {
    /// Curve names treated as the depth basis, tried in order
    #[serde(default = "default_depth_fields")]
    pub depth_fields: Vec<String>,

    /// Skip curves without finite samples instead of failing the render
    #[serde(default)]
    pub skip_empty_curves: bool,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub tracks: TrackConfig,

    /// Mnemonic -> track index (case-sensitive)
    #[serde(default = "default_curve_tracks")]
    pub curve_tracks: BTreeMap<String, usize>,

    /// Units -> bar color (matched case-insensitively)
    #[serde(default = "default_unit_colors")]
    pub unit_colors: BTreeMap<String, Color>,

    /// Bar color -> track index for curves whose mnemonic is unknown.
    /// Empty by default, so unknown mnemonics are skipped.
    #[serde(default)]
    pub color_tracks: BTreeMap<String, usize>,

    #[serde(default)]
    pub tops: TopsConfig,

    #[serde(default)]
    pub striplog: StriplogConfig,
}

fn default_depth_fields() -> Vec<String> {
    defaults::DEPTH_FIELDS.iter().map(|s| (*s).to_string()).collect()
}

fn default_curve_tracks() -> BTreeMap<String, usize> {
    defaults::CURVE_TRACKS
        .iter()
        .map(|(m, t)| ((*m).to_string(), *t))
        .collect()
}

fn default_unit_colors() -> BTreeMap<String, Color> {
    defaults::UNIT_COLORS
        .iter()
        .map(|(u, c)| ((*u).to_string(), *c))
        .collect()
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self {
            depth_fields: default_depth_fields(),
            skip_empty_curves: false,
            layout: LayoutConfig::default(),
            tracks: TrackConfig::default(),
            curve_tracks: default_curve_tracks(),
            unit_colors: default_unit_colors(),
            color_tracks: BTreeMap::new(),
            tops: TopsConfig::default(),
            striplog: StriplogConfig::default(),
        }
    }
}

impl ScorecardConfig {
    /// Load configuration using the standard search order:
    /// 1. `$SCORECARD_CONFIG` environment variable
    /// 2. `./scorecard.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded scorecard config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load scorecard config, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded scorecard config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        info!("No scorecard.toml found, using built-in tables");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings with a suggested spelling; they
    /// never fail the load.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Scorecard config saved");
        Ok(())
    }

    /// Reject values the renderer cannot lay out.
    ///
    /// Suspicious-but-usable values are logged and accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_ranges(self);
        for w in &warnings {
            warn!(field = %w.field, "{}", w);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Track title for `track`, or an empty string past the configured list.
    pub fn track_title(&self, track: usize) -> &str {
        self.tracks.titles.get(track).map_or("", String::as_str)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Layout
// ============================================================================

/// Figure geometry and bar styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Figure width (inches)
    pub figure_width: f64,
    /// Figure height before depth scaling (inches)
    pub figure_height: f64,
    /// Relative panel widths, one per track
    pub width_ratios: Vec<f64>,
    /// x position of the first slot in each track
    pub slot_start: f64,
    pub slot_width: f64,
    pub bar_width: f64,
    /// Gap between the slot's left edge and its bar
    pub padding: f64,
    /// Bar fill opacity in [0, 1]
    pub bar_alpha: f64,
    pub label_font_size: f64,
    pub title_font_size: f64,
    /// Metres of depth per inch of figure height
    pub vertical_scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            figure_width: defaults::FIGURE_WIDTH_IN,
            figure_height: defaults::FIGURE_HEIGHT_IN,
            width_ratios: defaults::WIDTH_RATIOS.to_vec(),
            slot_start: 0.0,
            slot_width: defaults::SLOT_WIDTH,
            bar_width: defaults::BAR_WIDTH,
            padding: defaults::SLOT_PADDING,
            bar_alpha: defaults::BAR_ALPHA,
            label_font_size: defaults::LABEL_FONT_SIZE,
            title_font_size: defaults::TRACK_TITLE_FONT_SIZE,
            vertical_scale: defaults::VERTICAL_SCALE_M_PER_IN,
        }
    }
}

impl LayoutConfig {
    /// Center x of the bar occupying `slot` within a track.
    pub fn slot_center(&self, slot: usize) -> f64 {
        self.slot_start + slot as f64 * self.slot_width + self.padding + self.bar_width / 2.0
    }
}

// ============================================================================
// Tracks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackConfig {
    #[serde(default = "default_track_titles")]
    pub titles: Vec<String>,
}

fn default_track_titles() -> Vec<String> {
    defaults::TRACK_TITLES.iter().map(|s| (*s).to_string()).collect()
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            titles: default_track_titles(),
        }
    }
}

// ============================================================================
// Tops
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopsConfig {
    pub line_width: f64,
    pub color: Color,
    /// Panel fraction the line extends to
    pub xmax: f64,
    /// Label x as a multiple of the last panel's right x limit
    pub label_offset: f64,
    pub label_font_size: f64,
    pub shadow: bool,
}

impl Default for TopsConfig {
    fn default() -> Self {
        Self {
            line_width: defaults::TOP_LINE_WIDTH,
            color: Color::BLACK,
            xmax: defaults::TOP_LINE_XMAX,
            label_offset: defaults::TOP_LABEL_OFFSET,
            label_font_size: defaults::TOP_LABEL_FONT_SIZE,
            shadow: true,
        }
    }
}

// ============================================================================
// Striplog
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StriplogConfig {
    #[serde(default = "default_striplog_aspect")]
    pub aspect: f64,

    /// Component property intervals are colored by
    #[serde(default = "default_match_property")]
    pub match_property: String,

    /// Property value (lower case) -> fill color
    #[serde(default = "default_legend")]
    pub legend: BTreeMap<String, Color>,
}

fn default_striplog_aspect() -> f64 {
    defaults::STRIPLOG_ASPECT
}

fn default_match_property() -> String {
    defaults::STRIPLOG_MATCH_PROPERTY.to_string()
}

fn default_legend() -> BTreeMap<String, Color> {
    defaults::STRIPLOG_LEGEND
        .iter()
        .map(|(l, c)| ((*l).to_string(), *c))
        .collect()
}

impl Default for StriplogConfig {
    fn default() -> Self {
        Self {
            aspect: default_striplog_aspect(),
            match_property: default_match_property(),
            legend: default_legend(),
        }
    }
}
