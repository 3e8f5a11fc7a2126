//! Striplog rendering seam
//!
//! The scorecard's last track shows a lithology interpretation. Anything
//! that can draw itself into a [`Panel`] implements [`StriplogRender`]; the
//! crate ships [`Striplog`], a plain list of depth intervals with component
//! properties, as the standard implementation.

use crate::figure::{Color, Panel, Rect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StriplogError {
    #[error("Interval {index} has base {base} above top {top}")]
    InvertedInterval { index: usize, top: f64, base: f64 },

    #[error("Interval {index} has a non-finite depth")]
    NonFiniteDepth { index: usize },
}

/// Styling handed to a striplog renderer.
#[derive(Debug, Clone, Copy)]
pub struct StriplogStyle<'a> {
    /// Property value (lower case) -> fill color
    pub legend: &'a BTreeMap<String, Color>,
    /// Only this component property is matched against the legend
    pub match_property: &'a str,
    pub aspect: f64,
}

impl StriplogStyle<'_> {
    /// Legend color for a property value, case-insensitive.
    pub fn color_for(&self, value: &str) -> Option<Color> {
        self.legend.get(&value.trim().to_lowercase()).copied()
    }
}

/// Draws lithology intervals into a panel.
pub trait StriplogRender {
    fn render(&self, panel: &mut Panel, style: &StriplogStyle<'_>) -> Result<(), StriplogError>;
}

/// One component of an interval, e.g. `{ lithology = "sandstone", grainsize = "vf" }`.
pub type Component = BTreeMap<String, String>;

/// A depth interval with its components, primary component first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub top: f64,
    pub base: f64,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Interval {
    pub fn new(top: f64, base: f64) -> Self {
        Self {
            top,
            base,
            components: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_component(mut self, property: &str, value: &str) -> Self {
        let mut component = Component::new();
        component.insert(property.to_string(), value.to_string());
        self.components.push(component);
        self
    }

    /// First component value for `property`.
    pub fn primary(&self, property: &str) -> Option<&str> {
        self.components
            .iter()
            .find_map(|c| c.get(property))
            .map(String::as_str)
    }
}

/// Ordered lithology intervals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Striplog {
    pub intervals: Vec<Interval>,
}

impl Striplog {
    pub fn new(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }
}

impl StriplogRender for Striplog {
    /// One full-width rectangle per interval, filled from the legend by the
    /// matched property; unmatched intervals are drawn white.
    fn render(&self, panel: &mut Panel, style: &StriplogStyle<'_>) -> Result<(), StriplogError> {
        panel.xlim = (0.0, 1.0);
        panel.aspect = Some(style.aspect);

        for (index, interval) in self.intervals.iter().enumerate() {
            if !(interval.top.is_finite() && interval.base.is_finite()) {
                return Err(StriplogError::NonFiniteDepth { index });
            }
            if interval.base < interval.top {
                return Err(StriplogError::InvertedInterval {
                    index,
                    top: interval.top,
                    base: interval.base,
                });
            }
            let fill = interval
                .primary(style.match_property)
                .and_then(|v| style.color_for(v))
                .unwrap_or(Color::WHITE);
            panel.rect(Rect {
                x: 0.0,
                y: interval.top,
                width: 1.0,
                height: interval.base - interval.top,
                fill,
                edge: Some(Color::BLACK),
            });
        }
        Ok(())
    }
}
