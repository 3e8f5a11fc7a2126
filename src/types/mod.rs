//! Well data model consumed by the scorecard renderer
//!
//! - [`Curve`]: samples on a co-indexed depth basis
//! - [`Well`]: header, location and named curves
//! - [`Top`]: formation picks

mod curve;
mod tops;
mod well;

pub use curve::*;
pub use tops::*;
pub use well::*;
