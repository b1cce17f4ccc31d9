//! Configuration for a [SegmentDisplay](crate::SegmentDisplay).
//!
//! [DisplayConfig] can be deserialized from any serde format. Missing fields
//! take their default values.

use serde::{Deserialize, Serialize};

use segment_display_core::{Color, Error, SegmentStyle};

/// Every setting of a display: cell count, bounding box, segment proportions,
/// colours and spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of character cells.
    pub cell_count: usize,
    /// Left edge of the display on the surface.
    pub x: f64,
    /// Top edge of the display on the surface.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Segment thickness, as a fraction of the cell width, strictly between 0 and 1.
    pub segment_width: f64,
    /// Gap between segments, as a fraction of the cell width, strictly between 0 and 1.
    pub segment_interval: f64,
    /// Corner bevel, as a fraction of the segment width, strictly between 0 and 1.
    pub bevel_width: f64,
    /// Bevel the inner ends of the outer segments.
    pub side_bevel: bool,
    /// Fill of a lit segment.
    pub on_fill: Color,
    /// Fill of an unlit segment.
    pub off_fill: Color,
    /// Outline of a lit segment.
    pub on_stroke: Color,
    /// Outline of an unlit segment.
    pub off_stroke: Color,
    /// Outline width. Outlines are skipped when this is zero.
    pub stroke_width: f64,
    /// Space between the bounding box and the cells.
    pub padding: f64,
    /// Space between neighbouring cells.
    pub spacing: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_count: 1,
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 100.0,
            segment_width: 0.16,
            segment_interval: 0.05,
            bevel_width: 0.06,
            side_bevel: false,
            on_fill: Color::rgb(0x86, 0xFD, 0x06),
            off_fill: Color::rgb(0x00, 0x44, 0x00),
            on_stroke: Color::rgb(0x00, 0x77, 0x00),
            off_stroke: Color::rgb(0x44, 0x00, 0x44),
            stroke_width: 0.0,
            padding: 10.0,
            spacing: 10.0,
        }
    }
}

/// Size of a single character cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl DisplayConfig {
    /// Check that every field is usable for layout.
    pub fn validate(&self) -> Result<(), Error> {
        let numbers = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("segment_width", self.segment_width),
            ("segment_interval", self.segment_interval),
            ("bevel_width", self.bevel_width),
            ("stroke_width", self.stroke_width),
            ("padding", self.padding),
            ("spacing", self.spacing),
        ];

        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidConfiguration(*name));
        }

        let non_negative = [
            ("width", self.width),
            ("height", self.height),
            ("stroke_width", self.stroke_width),
            ("padding", self.padding),
            ("spacing", self.spacing),
        ];

        if let Some((name, _)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(Error::InvalidConfiguration(*name));
        }

        // Ratios of the cell width, or of the segment width for the bevel.
        let ratios = [
            ("segment_width", self.segment_width),
            ("segment_interval", self.segment_interval),
            ("bevel_width", self.bevel_width),
        ];

        match ratios.iter().find(|(_, v)| *v <= 0.0 || *v >= 1.0) {
            Some((name, _)) => Err(Error::InvalidConfiguration(*name)),
            None => Ok(()),
        }
    }

    /// Proportions passed to the topology's geometry.
    pub fn segment_style(&self) -> SegmentStyle {
        SegmentStyle {
            segment_width: self.segment_width,
            segment_interval: self.segment_interval,
            bevel_width: self.bevel_width,
            side_bevel: self.side_bevel,
        }
    }

    /// Size of each cell when the box is split into `count` cells.
    ///
    /// The padding surrounds all cells and `spacing` separates neighbours.
    pub fn cell_size(&self, count: usize) -> CellSize {
        let n = count as f64;
        CellSize {
            width: (self.width - self.spacing * (n - 1.0) - self.padding * 2.0) / n,
            height: self.height - self.padding * 2.0,
        }
    }

    /// Whether switching from `self` to `other` changes the cell geometry.
    pub(crate) fn same_layout(&self, other: &Self) -> bool {
        self.cell_count == other.cell_count
            && self.width == other.width
            && self.height == other.height
            && self.padding == other.padding
            && self.spacing == other.spacing
            && self.segment_style() == other.segment_style()
    }
}
