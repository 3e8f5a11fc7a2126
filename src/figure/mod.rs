//! Retained-mode figure model
//!
//! The scorecard is drawn into plain data: a [`Figure`] holding side-by-side
//! [`Panel`]s that share a depth axis, each panel holding a list of
//! [`Glyph`]s. Nothing here rasterizes; the whole tree is `Serialize` so a
//! host can hand it to whatever backend it uses for display or export.
//!
//! Coordinates follow the usual plotting convention: `x` is horizontal in
//! the panel's data space, `y` is depth. Panels with an inverted depth range
//! (`ylim = (td, 0)`) draw depth increasing downwards.

mod color;

pub use color::{Color, ParseColorError};

use serde::Serialize;

/// Which coordinate system a text position is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Coords {
    /// Panel data space (x slots, depth).
    Data,
    /// Panel fraction: (0, 0) bottom-left, (1, 1) top-right.
    Axes,
    /// Figure fraction: (0, 0) bottom-left, (1, 1) top-right.
    Figure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    Horizontal,
    Vertical,
}

/// A text label.
///
/// Alignment refers to the rendered text box on screen, after rotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font_size: f64,
    pub halign: HAlign,
    pub valign: VAlign,
    pub rotation: Rotation,
    pub coords: Coords,
}

impl Text {
    /// Horizontal, left/bottom aligned text in data coordinates.
    pub fn new(x: f64, y: f64, content: impl Into<String>, font_size: f64) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            font_size,
            halign: HAlign::Left,
            valign: VAlign::Bottom,
            rotation: Rotation::Horizontal,
            coords: Coords::Data,
        }
    }

    #[must_use]
    pub fn align(mut self, halign: HAlign, valign: VAlign) -> Self {
        self.halign = halign;
        self.valign = valign;
        self
    }

    #[must_use]
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn in_coords(mut self, coords: Coords) -> Self {
        self.coords = coords;
        self
    }
}

/// A vertical bar centered on `x`, spanning depth `bottom..bottom + height`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub x: f64,
    pub width: f64,
    pub bottom: f64,
    pub height: f64,
    pub color: Color,
}

/// A horizontal line across the panel at depth `y`.
///
/// `xmax` is the panel fraction the line extends to; values above 1.0 let the
/// line poke out past the right edge of the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HLine {
    pub y: f64,
    pub line_width: f64,
    pub color: Color,
    pub xmax: f64,
    pub shadow: bool,
}

/// A filled rectangle in data coordinates, used for striplog intervals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub edge: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Glyph {
    Bar(Bar),
    HLine(HLine),
    Rect(Rect),
    Text(Text),
}

/// Panel border visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spines {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for Spines {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

/// One vertical track of the figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: Option<String>,
    /// Track label, positioned in axes coordinates.
    pub caption: Option<Text>,
    pub xlim: (f64, f64),
    /// Depth range as `(bottom, top)`; `(td, 0.0)` inverts the axis.
    pub ylim: Option<(f64, f64)>,
    pub show_xticks: bool,
    pub show_yticks: bool,
    pub show_ytick_labels: bool,
    pub spines: Spines,
    /// Horizontal/vertical display ratio, if fixed.
    pub aspect: Option<f64>,
    pub glyphs: Vec<Glyph>,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            title: None,
            caption: None,
            xlim: (0.0, 1.0),
            ylim: None,
            show_xticks: true,
            show_yticks: true,
            show_ytick_labels: true,
            spines: Spines::default(),
            aspect: None,
            glyphs: Vec::new(),
        }
    }
}

impl Panel {
    pub fn bar(&mut self, bar: Bar) {
        self.glyphs.push(Glyph::Bar(bar));
    }

    pub fn text(&mut self, text: Text) {
        self.glyphs.push(Glyph::Text(text));
    }

    pub fn hline(&mut self, line: HLine) {
        self.glyphs.push(Glyph::HLine(line));
    }

    pub fn rect(&mut self, rect: Rect) {
        self.glyphs.push(Glyph::Rect(rect));
    }

    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.glyphs.iter().filter_map(|g| match g {
            Glyph::Bar(b) => Some(b),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.glyphs.iter().filter_map(|g| match g {
            Glyph::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn hlines(&self) -> impl Iterator<Item = &HLine> {
        self.glyphs.iter().filter_map(|g| match g {
            Glyph::HLine(l) => Some(l),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.glyphs.iter().filter_map(|g| match g {
            Glyph::Rect(r) => Some(r),
            _ => None,
        })
    }
}

/// A complete figure: panels laid out left to right plus figure-level text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Size in inches.
    pub width: f64,
    pub height: f64,
    pub width_ratios: Vec<f64>,
    /// Horizontal gap between panels as a fraction of mean panel width.
    pub wspace: f64,
    pub panels: Vec<Panel>,
    pub texts: Vec<Text>,
}

impl Figure {
    /// Figure with one empty panel per entry in `width_ratios`.
    pub fn with_panels(width: f64, height: f64, width_ratios: &[f64]) -> Self {
        Self {
            width,
            height,
            width_ratios: width_ratios.to_vec(),
            wspace: 0.2,
            panels: width_ratios.iter().map(|_| Panel::default()).collect(),
            texts: Vec::new(),
        }
    }

    pub fn text(&mut self, text: Text) {
        self.texts.push(text.in_coords(Coords::Figure));
    }

    pub fn glyph_count(&self) -> usize {
        self.panels.iter().map(|p| p.glyphs.len()).sum()
    }

    /// Pretty JSON for handing the figure to a drawing backend.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
