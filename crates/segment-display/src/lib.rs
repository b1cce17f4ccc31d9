#![cfg_attr(not(test), no_std)]

//! `segment-display` is a library for drawing text the way a digital clock or
//! calculator shows it, as seven or sixteen segment characters.
//!
//! The library supports `no_std` environments but requires an allocator.
//! Output goes to any [Surface]; `segment-display-svg` provides one that
//! writes SVG documents.
//!
//! Supported topologies:
//! - Seven segment digits (and approximate letters), via [segment_display_seven]
//! - Sixteen segment characters covering the Latin alphabet, via [segment_display_sixteen]
//!
//! ```
//! use segment_display::{DisplayConfig, SegmentDisplay, SegmentKind};
//! # use segment_display::{Color, Point, Surface};
//! # struct Null;
//! # impl Surface for Null {
//! #     fn clear_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {}
//! #     fn save(&mut self) {}
//! #     fn restore(&mut self) {}
//! #     fn translate(&mut self, _: f64, _: f64) {}
//! #     fn begin_path(&mut self) {}
//! #     fn move_to(&mut self, _: Point) {}
//! #     fn line_to(&mut self, _: Point) {}
//! #     fn close_path(&mut self) {}
//! #     fn fill(&mut self, _: Color) {}
//! #     fn stroke(&mut self, _: Color, _: f64) {}
//! # }
//! # let surface = Null;
//!
//! let config = DisplayConfig {
//!     cell_count: 4,
//!     ..DisplayConfig::default()
//! };
//! let mut display = SegmentDisplay::new(SegmentKind::SevenSegment, config, surface).unwrap();
//! display.set_text(Some("12AB"));
//! ```

extern crate alloc;

mod config;
mod display;

use alloc::vec::Vec;

pub use config::{CellSize, DisplayConfig};
pub use display::SegmentDisplay;
pub use segment_display_core::{
    CharacterMask, Color, ElementArray, Error, Point, Polygon, SegmentStyle, Surface, Topology,
};
pub use segment_display_seven::SevenSegment;
pub use segment_display_sixteen::SixteenSegment;

/// One of the supported segment layouts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    SevenSegment,
    SixteenSegment,
}

impl SegmentKind {
    /// Number of segments in one cell.
    pub fn segment_count(self) -> usize {
        match self {
            Self::SevenSegment => SevenSegment::SEGMENT_COUNT,
            Self::SixteenSegment => SixteenSegment::SEGMENT_COUNT,
        }
    }

    /// Mask stored for characters missing from the table.
    pub fn unknown_mask(self) -> CharacterMask {
        match self {
            Self::SevenSegment => SevenSegment::UNKNOWN_MASK,
            Self::SixteenSegment => SixteenSegment::UNKNOWN_MASK,
        }
    }

    /// Look up the mask for a character in this layout's table.
    pub fn character_mask(self, c: char) -> Option<CharacterMask> {
        match self {
            Self::SevenSegment => SevenSegment::character_mask(c),
            Self::SixteenSegment => SixteenSegment::character_mask(c),
        }
    }

    /// Compute the outline of every segment for a cell of the given size.
    pub fn compute_points(self, width: f64, height: f64, style: &SegmentStyle) -> Vec<Polygon> {
        match self {
            Self::SevenSegment => SevenSegment::compute_points(width, height, style),
            Self::SixteenSegment => SixteenSegment::compute_points(width, height, style),
        }
    }

    /// Fill `elements` with the masks for `value` using this layout's table.
    pub fn set_text(self, elements: &mut ElementArray, value: Option<&str>) {
        match self {
            Self::SevenSegment => elements.set_text::<SevenSegment>(value),
            Self::SixteenSegment => elements.set_text::<SixteenSegment>(value),
        }
    }
}
