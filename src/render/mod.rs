//! Scorecard rendering
//!
//! Turns a [`Well`] (plus optional striplog and tops) into a six-track
//! [`Figure`]:
//!
//! | Track | Contents                                   |
//! |-------|--------------------------------------------|
//! | 0     | Lithology / MD: calipers, gamma, PE, SP    |
//! | 1     | Resistivity                                |
//! | 2     | Porosity                                   |
//! | 3     | Density                                    |
//! | 4     | Sonic                                      |
//! | 5     | Lithology interpretation (striplog)        |
//!
//! Each curve becomes one translucent bar per logged interval in its own
//! slot of its track, so the figure shows at a glance what was logged where.

mod annotate;
mod classify;
mod intervals;

pub use classify::Classification;
pub use intervals::{find_logged_intervals, LoggedInterval};

use crate::config::{ConfigError, ScorecardConfig};
use crate::figure::{Bar, Color, Figure, HAlign, Panel, Rotation, Text, VAlign};
use crate::striplog::{StriplogError, StriplogRender};
use crate::types::{Curve, Top, Well};
use classify::TrackTables;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No depth basis in well (tried {})", .tried.join(", "))]
    MissingDepthBasis { tried: Vec<String> },

    #[error("Curve {mnemonic} has no finite samples")]
    NoFiniteSamples { mnemonic: String },

    #[error("Striplog rendering failed: {0}")]
    Striplog(#[from] StriplogError),
}

/// Renders well scorecards with an injected set of lookup tables and
/// layout constants. Holds no per-well state; one renderer can draw any
/// number of wells.
#[derive(Debug, Clone)]
pub struct ScorecardRenderer {
    config: ScorecardConfig,
    tables: TrackTables,
}

impl Default for ScorecardRenderer {
    fn default() -> Self {
        Self::from_parts(ScorecardConfig::default())
    }
}

impl ScorecardRenderer {
    /// Validate `config` and build a renderer from it.
    pub fn new(config: ScorecardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: ScorecardConfig) -> Self {
        let tables = TrackTables::from_config(&config);
        Self { config, tables }
    }

    pub fn config(&self) -> &ScorecardConfig {
        &self.config
    }

    /// Allocate a `width` x `height` inch figure with one empty panel per
    /// track, sized by the configured width ratios.
    pub fn create_layout(&self, width: f64, height: f64) -> Figure {
        Figure::with_panels(width, height, &self.config.layout.width_ratios)
    }

    /// Track and bar color for `curve`. Never fails: unknown mnemonics and
    /// units fall back to no track / grey.
    pub fn classify_curve(&self, curve: &Curve) -> Classification {
        self.tables.classify_curve(curve)
    }

    /// Draw one bar per logged interval of `curve` in horizontal `slot` of
    /// `panel`, labelled with the curve's name and units.
    pub fn draw_curve_bar(
        &self,
        panel: &mut Panel,
        curve: &Curve,
        color: Color,
        slot: usize,
    ) -> Result<(), RenderError> {
        let layout = &self.config.layout;
        let intervals = find_logged_intervals(curve)?;
        let x = layout.slot_center(slot);
        let fill = color.with_alpha(layout.bar_alpha);

        for interval in &intervals {
            panel.bar(Bar {
                x,
                width: layout.bar_width,
                bottom: interval.top,
                height: interval.span,
                color: fill,
            });
            // Name above the midpoint, units below it
            let mid = interval.mid_depth();
            panel.text(
                Text::new(x, mid, curve.mnemonic(), layout.label_font_size)
                    .align(HAlign::Center, VAlign::Bottom)
                    .rotated(Rotation::Vertical),
            );
            panel.text(
                Text::new(x, mid, curve.units(), layout.label_font_size)
                    .align(HAlign::Center, VAlign::Top)
                    .rotated(Rotation::Vertical),
            );
        }
        Ok(())
    }

    fn is_depth_field(&self, name: &str) -> bool {
        self.config.depth_fields.iter().any(|f| f == name)
    }

    /// Place every non-depth curve of `well` into its track, left to right,
    /// then give all panels the same x range so slots line up.
    ///
    /// Returns the number of curves drawn.
    fn plot_bars(&self, panels: &mut [Panel], well: &Well) -> Result<usize, RenderError> {
        let mut slots = vec![0usize; panels.len()];
        let mut drawn = 0;

        for (name, curve) in &well.data {
            if self.is_depth_field(name) {
                continue;
            }
            let class = self.classify_curve(curve);
            let Some(track) = class.track.filter(|t| *t < panels.len()) else {
                debug!(curve = %name, units = %curve.units(), "No track for curve, skipping");
                continue;
            };

            match self.draw_curve_bar(&mut panels[track], curve, class.color, slots[track]) {
                Ok(()) => {}
                Err(RenderError::NoFiniteSamples { .. }) if self.config.skip_empty_curves => {
                    warn!(curve = %name, "Curve has no finite samples, skipping");
                    continue;
                }
                Err(e) => return Err(e),
            }

            debug!(curve = %name, track, slot = slots[track], color = %class.color, "Placed curve");
            slots[track] += 1;
            drawn += 1;
        }

        let layout = &self.config.layout;
        let max_slots = slots.iter().copied().max().unwrap_or(0);
        let xlim = (
            layout.slot_start - layout.slot_width,
            layout.slot_start + (max_slots + 1) as f64 * layout.slot_width,
        );
        for panel in panels.iter_mut() {
            panel.xlim = xlim;
        }
        Ok(drawn)
    }

    /// Build the complete scorecard for `well`.
    ///
    /// Fails if the well has no curve under any configured depth field name,
    /// or if a curve has no finite samples (unless `skip_empty_curves`).
    pub fn assemble(
        &self,
        well: &Well,
        striplog: Option<&dyn StriplogRender>,
        tops: Option<&[Top]>,
    ) -> Result<Figure, RenderError> {
        let basis = well
            .basis(&self.config.depth_fields)
            .ok_or_else(|| RenderError::MissingDepthBasis {
                tried: self.config.depth_fields.clone(),
            })?;
        let td = well.total_depth(basis);

        let layout = &self.config.layout;
        let mut figure = self.create_layout(layout.figure_width, layout.figure_height);

        let drawn = self.plot_bars(&mut figure.panels, well)?;
        // All tracks share one inverted depth axis
        if let Some(td) = td {
            for panel in &mut figure.panels {
                panel.ylim = Some((td, 0.0));
            }
        }
        self.put_track_names(&mut figure.panels);

        if let Some(striplog) = striplog {
            if let Some(panel) = figure.panels.last_mut() {
                self.draw_striplog(panel, striplog, td)?;
            }
        }
        if let Some(tops) = tops {
            self.draw_tops(&mut figure.panels, tops, td);
        }
        if let Some(panel) = figure.panels.last_mut() {
            self.put_side_text(panel, &well.location, td);
        }
        self.put_header_text(&mut figure, &well.header);
        self.adjust_fig_dims(&mut figure, td);

        info!(
            well = %well.header.name,
            curves = drawn,
            tops = tops.map_or(0, <[Top]>::len),
            striplog = striplog.is_some(),
            glyphs = figure.glyph_count(),
            height_in = figure.height,
            "Scorecard assembled"
        );
        Ok(figure)
    }
}
