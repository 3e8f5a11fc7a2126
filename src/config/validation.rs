//! Config validation: unknown-key detection with Levenshtein suggestions
//! and range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use super::defaults::TRACK_COUNT;
use super::ScorecardConfig;
use crate::figure::Color;
use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Tables whose keys are user data (mnemonics, units, lithologies), not
/// field names. Anything below them is accepted.
pub const FREE_FORM_TABLES: &[&str] = &[
    "curve_tracks",
    "unit_colors",
    "color_tracks",
    "striplog.legend",
];

/// Returns the complete set of valid dotted key paths for ScorecardConfig.
///
/// Maintained by hand to match the struct hierarchy in scorecard_config.rs.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        "depth_fields",
        "skip_empty_curves",
        // [layout]
        "layout",
        "layout.figure_width",
        "layout.figure_height",
        "layout.width_ratios",
        "layout.slot_start",
        "layout.slot_width",
        "layout.bar_width",
        "layout.padding",
        "layout.bar_alpha",
        "layout.label_font_size",
        "layout.title_font_size",
        "layout.vertical_scale",
        // [tracks]
        "tracks",
        "tracks.titles",
        // lookup tables
        "curve_tracks",
        "unit_colors",
        "color_tracks",
        // [tops]
        "tops",
        "tops.line_width",
        "tops.color",
        "tops.xmax",
        "tops.label_offset",
        "tops.label_font_size",
        "tops.shadow",
        // [striplog]
        "striplog",
        "striplog.aspect",
        "striplog.match_property",
        "striplog.legend",
    ];
    keys.iter().copied().collect()
}

fn is_free_form(key: &str) -> bool {
    FREE_FORM_TABLES.iter().any(|table| {
        key.strip_prefix(table)
            .is_some_and(|rest| rest.starts_with('.'))
    })
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties resolve to the lexicographically smallest key so suggestions are
/// stable across runs.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), *k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys, it only warns.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are reported by serde
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()) && !is_free_form(key))
        .map(|key| {
            let suggestion = suggest_correction(&key, &known);
            ValidationWarning {
                message: format!("Unknown config key '{key}'"),
                field: key,
                suggestion,
            }
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

/// Validate ranges on a parsed ScorecardConfig.
///
/// Returns (errors, warnings): errors are values the renderer cannot lay
/// out; warnings are suspicious but usable.
pub fn validate_ranges(config: &ScorecardConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let layout = &config.layout;

    if layout.width_ratios.len() != TRACK_COUNT {
        errors.push(format!(
            "layout.width_ratios has {} entries, expected {TRACK_COUNT}",
            layout.width_ratios.len()
        ));
    }
    if layout.width_ratios.iter().any(|r| !(r.is_finite() && *r > 0.0)) {
        errors.push("layout.width_ratios entries must be > 0".to_string());
    }

    for (name, value) in [
        ("layout.figure_width", layout.figure_width),
        ("layout.figure_height", layout.figure_height),
        ("layout.slot_width", layout.slot_width),
        ("layout.bar_width", layout.bar_width),
        ("layout.vertical_scale", layout.vertical_scale),
        ("layout.label_font_size", layout.label_font_size),
        ("layout.title_font_size", layout.title_font_size),
    ] {
        if !(value.is_finite() && value > 0.0) {
            errors.push(format!("{name} = {value} must be > 0"));
        }
    }

    if !(0.0..=1.0).contains(&layout.bar_alpha) {
        errors.push(format!(
            "layout.bar_alpha = {:.2} must be within [0, 1]",
            layout.bar_alpha
        ));
    }

    if !(layout.padding.is_finite() && layout.padding >= 0.0) {
        errors.push(format!("layout.padding = {} must be >= 0", layout.padding));
    }

    if !layout.slot_start.is_finite() {
        errors.push(format!("layout.slot_start = {} must be finite", layout.slot_start));
    }

    // Bars wider than their slot overlap the neighbouring curve
    if layout.padding + layout.bar_width > layout.slot_width + 1e-9 {
        warnings.push(ValidationWarning {
            field: "layout.bar_width".to_string(),
            message: format!(
                "padding + bar_width ({:.2}) exceeds slot_width ({:.2}); bars will overlap",
                layout.padding + layout.bar_width,
                layout.slot_width
            ),
            suggestion: None,
        });
    }

    for (mnemonic, track) in &config.curve_tracks {
        if *track >= TRACK_COUNT {
            errors.push(format!(
                "curve_tracks.{mnemonic} = {track} is outside 0-{}",
                TRACK_COUNT - 1
            ));
        }
    }

    for (color, track) in &config.color_tracks {
        if color.parse::<Color>().is_err() {
            errors.push(format!("color_tracks.{color} is not a recognized color"));
        }
        if *track >= TRACK_COUNT {
            errors.push(format!(
                "color_tracks.{color} = {track} is outside 0-{}",
                TRACK_COUNT - 1
            ));
        }
    }

    let tops = &config.tops;
    for (name, value) in [
        ("tops.line_width", tops.line_width),
        ("tops.xmax", tops.xmax),
        ("tops.label_offset", tops.label_offset),
        ("tops.label_font_size", tops.label_font_size),
    ] {
        if !(value.is_finite() && value > 0.0) {
            errors.push(format!("{name} = {value} must be > 0"));
        }
    }

    if config.depth_fields.is_empty() {
        errors.push("depth_fields must name at least one curve".to_string());
    }

    if config.tracks.titles.len() != TRACK_COUNT {
        warnings.push(ValidationWarning {
            field: "tracks.titles".to_string(),
            message: format!(
                "tracks.titles has {} entries, expected {TRACK_COUNT}; missing titles are left blank",
                config.tracks.titles.len()
            ),
            suggestion: None,
        });
    }

    if !(config.striplog.aspect.is_finite() && config.striplog.aspect > 0.0) {
        errors.push(format!(
            "striplog.aspect = {} must be > 0",
            config.striplog.aspect
        ));
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
