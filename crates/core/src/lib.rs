#![cfg_attr(not(test), no_std)]

//! `segment-display-core` provides core primitives for the `segment-display` crate.
//!
//! Each display topology (seven segment, sixteen segment, ...) implements
//! [Topology] to supply its character table and the outline of every segment
//! in a single character cell. Drawing happens through the [Surface] trait.

extern crate alloc;

mod bar;
mod color;
mod elements;
mod error;
mod surface;
mod symmetry;

use alloc::vec::Vec;

pub use bar::{Axis, separate_ends};
pub use color::Color;
pub use elements::ElementArray;
pub use error::Error;
pub use surface::Surface;
pub use symmetry::{flip_horizontal, flip_vertical};

/// Number of points making up the outline of every segment.
pub const POINTS_PER_SEGMENT: usize = 6;

/// Bitmask of lit segments for one character cell.
/// Bit `k` is set when segment `k` is lit.
pub type CharacterMask = u32;

/// A point within a character cell, relative to the cell's top left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed outline of one segment. The last point connects back to the first,
/// and point order sets the winding used when filling.
pub type Polygon = [Point; POINTS_PER_SEGMENT];

/// Proportions used to derive segment outlines from a cell's size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentStyle {
    /// Thickness of a segment, as a fraction of the cell width.
    pub segment_width: f64,
    /// Gap between neighbouring segments, as a fraction of the cell width.
    pub segment_interval: f64,
    /// Size of the corner bevel, as a fraction of the segment width.
    pub bevel_width: f64,
    /// Bevel the inner ends of the outer segments as well as the corners.
    pub side_bevel: bool,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            segment_width: 0.16,
            segment_interval: 0.05,
            bevel_width: 0.06,
            side_bevel: false,
        }
    }
}

/// A fixed segment layout: its character table and segment geometry.
///
/// Implementors are unit types; every method is a pure function of its inputs.
pub trait Topology {
    /// Number of segments in one cell. Only bits `0..SEGMENT_COUNT` of a
    /// [CharacterMask] are drawn.
    const SEGMENT_COUNT: usize;

    /// Mask stored for characters missing from the table. It sets the first
    /// bit past the last segment, so it draws as a blank cell but can still be
    /// told apart from a space.
    const UNKNOWN_MASK: CharacterMask = 1 << Self::SEGMENT_COUNT;

    /// Look up the mask for a character. Returns `None` when the table has no
    /// entry for it.
    fn character_mask(c: char) -> Option<CharacterMask>;

    /// Compute the outline of every segment for a cell of the given size,
    /// indexed by segment number.
    fn compute_points(width: f64, height: f64, style: &SegmentStyle) -> Vec<Polygon>;

    /// Look up the mask for a character, substituting [Self::UNKNOWN_MASK]
    /// when the table has no entry.
    fn mask_or_unknown(c: char) -> CharacterMask {
        Self::character_mask(c).unwrap_or(Self::UNKNOWN_MASK)
    }
}

/// Returns whether segment `segment` is lit in `mask`.
pub fn is_lit(mask: CharacterMask, segment: usize) -> bool {
    segment < CharacterMask::BITS as usize && mask & (1 << segment) != 0
}
