//! Built-in lookup tables and layout constants.
//!
//! These seed `ScorecardConfig::default()`. Everything here can be
//! overridden from `scorecard.toml`; nothing reads these directly at render
//! time.

use crate::figure::Color;

// ============================================================================
// Tracks
// ============================================================================

/// Number of vertical tracks in a scorecard.
pub const TRACK_COUNT: usize = 6;

/// Index of the narrow lithology-interpretation (striplog) track.
pub const STRIPLOG_TRACK: usize = TRACK_COUNT - 1;

/// Relative panel widths; the striplog track is narrower.
pub const WIDTH_RATIOS: [f64; TRACK_COUNT] = [3.0, 3.0, 3.0, 3.0, 3.0, 1.0];

pub const TRACK_TITLES: [&str; TRACK_COUNT] = [
    "Lithology",
    "Resistivity",
    "Porosity",
    "Density",
    "Sonic",
    "Canstrat\nLithology",
];

/// Recognized depth-basis curve names, tried in order.
pub const DEPTH_FIELDS: [&str; 2] = ["DEPT", "DEPTH"];

/// Mnemonic to track index.
pub const CURVE_TRACKS: &[(&str, usize)] = &[
    // Lithology / MD: calipers, gamma, PE, SP
    ("C1", 0),
    ("CALS", 0),
    ("CAX", 0),
    ("CAY", 0),
    ("CALI", 0),
    ("GR", 0),
    ("GAM", 0),
    ("PEF", 0),
    ("SP", 0),
    // Resistivity
    ("ILD", 1),
    ("ILM", 1),
    ("SFL", 1),
    ("CILD", 1),
    ("NOR", 1),
    ("MFR", 1),
    ("LL8", 1),
    ("LLD", 1),
    ("LLS", 1),
    ("INV", 1),
    // Porosity
    ("NPSS", 2),
    ("PDS", 2),
    ("NPLS", 2),
    ("DPSS", 2),
    ("DPLS", 2),
    ("POS", 2),
    ("POL", 2),
    // Density
    ("RHOB", 3),
    ("DEN", 3),
    ("DRHO", 3),
    ("DC", 3),
    ("DTLN", 3),
    // Sonic
    ("DT", 4),
    ("DT4P", 4),
    ("AC", 4),
    ("ACL", 4),
];

/// Units (upper case) to bar color.
pub const UNIT_COLORS: &[(&str, Color)] = &[
    ("GAPI", Color::GREEN),
    ("API", Color::GREEN),
    ("NAPI", Color::GREEN),
    ("B/E", Color::GREEN),
    ("MV", Color::GREEN),
    ("MM", Color::GREEN),
    ("OHMM", Color::MAGENTA),
    ("OHM.M", Color::MAGENTA),
    ("OHM/M", Color::MAGENTA),
    ("MMHO/M", Color::MAGENTA),
    ("V/V", Color::RED),
    ("PU", Color::RED),
    ("%", Color::RED),
    ("M3/M3", Color::RED),
    ("DEC", Color::RED),
    ("K/M3", Color::BLUE),
    ("G/C3", Color::BLUE),
    ("KG/M3", Color::BLUE),
    ("KGM3", Color::BLUE),
    ("G/CM3", Color::BLUE),
    ("US/M", Color::NAVY),
    ("USEC/M", Color::NAVY),
    ("US/F", Color::NAVY),
    ("US/FT", Color::NAVY),
];

/// Color for curves whose units are not recognized.
pub const FALLBACK_COLOR: Color = Color::GREY;

// ============================================================================
// Layout
// ============================================================================

/// Default figure size (inches) before depth scaling.
pub const FIGURE_WIDTH_IN: f64 = 8.0;
pub const FIGURE_HEIGHT_IN: f64 = 6.0;

/// Horizontal space each curve occupies within its track (data units).
pub const SLOT_WIDTH: f64 = 1.0;

/// Bar width within a slot (data units).
pub const BAR_WIDTH: f64 = 0.8;

/// Left padding before the bar in each slot (data units).
pub const SLOT_PADDING: f64 = 0.2;

/// Bar fill opacity.
pub const BAR_ALPHA: f64 = 0.2;

/// Font size of curve name/units labels.
pub const LABEL_FONT_SIZE: f64 = 8.0;

pub const TRACK_TITLE_FONT_SIZE: f64 = 14.0;

/// Vertical scale in metres per inch of figure height.
///
/// 250 m/in puts a 3 000 m well on a 12 inch tall figure.
pub const VERTICAL_SCALE_M_PER_IN: f64 = 250.0;

// ============================================================================
// Tops
// ============================================================================

pub const TOP_LINE_WIDTH: f64 = 2.0;

/// Panel fraction the top line extends to (past the right edge).
pub const TOP_LINE_XMAX: f64 = 1.05;

/// Label x position as a multiple of the last panel's right x limit.
pub const TOP_LABEL_OFFSET: f64 = 1.1;

pub const TOP_LABEL_FONT_SIZE: f64 = 10.0;

/// Font size of the KB / TD notes beside the striplog track.
pub const SIDE_TEXT_FONT_SIZE: f64 = 8.0;

pub const HEADER_NAME_FONT_SIZE: f64 = 14.0;
pub const HEADER_UWI_FONT_SIZE: f64 = 12.0;

// ============================================================================
// Striplog
// ============================================================================

pub const STRIPLOG_ASPECT: f64 = 0.2;

/// Component property the striplog is colored by.
pub const STRIPLOG_MATCH_PROPERTY: &str = "lithology";

pub const STRIPLOG_LEGEND: &[(&str, Color)] = &[
    ("sandstone", Color::YELLOW),
    ("siltstone", Color::TAN),
    ("shale", Color::GREY),
    ("limestone", Color::LIGHT_BLUE),
    ("dolomite", Color::MAGENTA),
    ("anhydrite", Color::WHITE),
    ("coal", Color::BLACK),
];
