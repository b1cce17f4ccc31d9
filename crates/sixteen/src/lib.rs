#![cfg_attr(not(test), no_std)]

//! `segment-display-sixteen` is a topology for the `segment-display` crate
//! that draws sixteen segment (starburst) characters, which can show the full
//! Latin alphabet.
//!
//! ```text
//!  A1  A2
//! F H I J B
//!  G1  G2
//! E K L M C
//!  D1  D2
//! ```

extern crate alloc;

use alloc::{vec, vec::Vec};
use core::f64::consts::SQRT_2;

use segment_display_core::{
    Axis, CharacterMask, Point, Polygon, SegmentStyle, Topology, flip_horizontal, flip_vertical,
    separate_ends,
};

include!(concat!(env!("OUT_DIR"), "/sixteen_segment_table.rs"));

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Index of each segment within a cell's geometry and bit within a mask.
pub mod segment {
    pub const A1: usize = 0;
    pub const A2: usize = 1;
    pub const B: usize = 2;
    pub const C: usize = 3;
    pub const D1: usize = 4;
    pub const D2: usize = 5;
    pub const E: usize = 6;
    pub const F: usize = 7;
    pub const G1: usize = 8;
    pub const G2: usize = 9;
    pub const H: usize = 10;
    pub const I: usize = 11;
    pub const J: usize = 12;
    pub const K: usize = 13;
    pub const L: usize = 14;
    pub const M: usize = 15;
}

/// The sixteen segment [Topology].
pub struct SixteenSegment;

impl SixteenSegment {
    /// Every character in the table with its mask.
    pub fn characters() -> impl Iterator<Item = (char, CharacterMask)> {
        CHARACTER_MASKS.iter().copied()
    }
}

impl Topology for SixteenSegment {
    const SEGMENT_COUNT: usize = 16;

    fn character_mask(c: char) -> Option<CharacterMask> {
        lookup(c)
    }

    fn compute_points(w: f64, h: f64, style: &SegmentStyle) -> Vec<Polygon> {
        use segment::*;

        let sw = style.segment_width * w;
        let si = style.segment_interval * w;
        let bw = style.bevel_width * sw;
        let ib = if style.side_bevel { 1.0 } else { 0.0 };
        let sf = sw * 0.8;
        let slope = h / w;

        let di = si / SQRT_2;
        let mi = si / 2.0 * SQRT_3;

        // Grid lines of the cell before bevels and gaps are applied.
        let (w0, h0) = (w / 2.0 - sw / 2.0, 0.0);
        let (w1, h1) = (w / 2.0, sw / 2.0);
        let (w2, h2) = (w / 2.0 + sw / 2.0, sw);
        let (w3, h3) = (w - sw, h / 2.0 - sw / 2.0);
        let (w4, h4) = (w - sw / 2.0, h / 2.0);
        let (w5, h5) = (w, h / 2.0 + sw / 2.0);

        let a1 = separate_ends(
            [
                Point::new(bw * 2.0 + di, h0),
                Point::new(w1 - si / 2.0 - sw / 2.0 * ib, h0),
                Point::new(w1 - si / 2.0, h1),
                Point::new(w0 - si / 2.0, h2),
                Point::new(sw + di, h2),
                Point::new(bw + di, h0 + bw),
            ],
            Axis::Horizontal,
        );

        let g2 = separate_ends(
            [
                Point::new(w2 + di, h3),
                Point::new(w3 - mi, h3),
                Point::new(w4 - mi, h4),
                Point::new(w3 - mi, h5),
                Point::new(w2 + di, h5),
                Point::new(w1 + di, h4),
            ],
            Axis::Horizontal,
        );

        let b = separate_ends(
            [
                Point::new(w5, h0 + bw * 2.0 + di),
                Point::new(w5, h4 - si / 2.0 - sw / 2.0 * ib),
                Point::new(w4, h4 - si / 2.0),
                Point::new(w3, h3 - si / 2.0),
                Point::new(w3, h2 + di),
                Point::new(w5 - bw, h0 + bw + di),
            ],
            Axis::Vertical,
        );

        let i = separate_ends(
            [
                Point::new(w2, h2 + mi),
                Point::new(w2, h3 - di),
                Point::new(w1, h4 - di),
                Point::new(w0, h3 - di),
                Point::new(w0, h2 + mi),
                Point::new(w1, h1 + mi),
            ],
            Axis::Vertical,
        );

        // The diagonal runs corner to corner across the box left between the
        // side, top, centre and middle bars. A box with no room left collapses
        // to a line.
        let (left, top) = (sw + si, h2 + si);
        let right = (w0 - si).max(left);
        let bottom = (h3 - si).max(top);
        let tx = sf.min(right - left);
        let ty = (sf * slope).min(bottom - top);
        let hd = [
            Point::new(left + tx, top),
            Point::new(right, bottom - ty),
            Point::new(right, bottom),
            Point::new(right - tx, bottom),
            Point::new(left, top + ty),
            Point::new(left, top),
        ];

        let mut points = vec![[Point::default(); 6]; 16];
        points[A1] = a1;
        points[B] = b;
        points[G2] = g2;
        points[H] = hd;
        points[I] = i;

        points[A2] = flip_horizontal(&points[A1], w);
        points[C] = flip_vertical(&points[B], h);
        points[D1] = flip_vertical(&points[A1], h);
        points[D2] = flip_horizontal(&points[D1], w);
        points[E] = flip_horizontal(&points[C], w);
        points[F] = flip_horizontal(&points[B], w);
        points[G1] = flip_horizontal(&points[G2], w);
        points[J] = flip_horizontal(&points[H], w);
        points[K] = flip_vertical(&points[J], h);
        points[L] = flip_vertical(&points[I], h);
        points[M] = flip_vertical(&points[H], h);

        points
    }
}
