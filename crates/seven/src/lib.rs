#![cfg_attr(not(test), no_std)]

//! `segment-display-seven` is a topology for the `segment-display` crate that
//! draws classic seven segment digits.
//!
//! Segments are numbered `A` (top) through `F` clockwise, then `G` (middle):
//!
//! ```text
//!  AAA
//! F   B
//!  GGG
//! E   C
//!  DDD
//! ```

extern crate alloc;

use alloc::{vec, vec::Vec};
use core::f64::consts::SQRT_2;

use segment_display_core::{
    Axis, CharacterMask, Point, Polygon, SegmentStyle, Topology, flip_horizontal, flip_vertical,
    separate_ends,
};

include!(concat!(env!("OUT_DIR"), "/seven_segment_table.rs"));

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Index of each segment within a cell's geometry and bit within a mask.
pub mod segment {
    pub const A: usize = 0;
    pub const B: usize = 1;
    pub const C: usize = 2;
    pub const D: usize = 3;
    pub const E: usize = 4;
    pub const F: usize = 5;
    pub const G: usize = 6;
}

/// The seven segment [Topology].
pub struct SevenSegment;

impl SevenSegment {
    /// Every character in the table with its mask.
    pub fn characters() -> impl Iterator<Item = (char, CharacterMask)> {
        CHARACTER_MASKS.iter().copied()
    }
}

impl Topology for SevenSegment {
    const SEGMENT_COUNT: usize = 7;

    fn character_mask(c: char) -> Option<CharacterMask> {
        lookup(c)
    }

    fn compute_points(w: f64, h: f64, style: &SegmentStyle) -> Vec<Polygon> {
        let sw = style.segment_width * w;
        let si = style.segment_interval * w;
        let bw = style.bevel_width * sw;

        // Gap measured along the 45 degree bevels and the 60 degree middle points.
        let di = si / SQRT_2;
        let mi = si / 2.0 * SQRT_3;

        let a = separate_ends(
            [
                Point::new(bw * 2.0 + di, 0.0),
                Point::new(w - bw * 2.0 - di, 0.0),
                Point::new(w - bw - di, bw),
                Point::new(w - sw - di, sw),
                Point::new(sw + di, sw),
                Point::new(bw + di, bw),
            ],
            Axis::Horizontal,
        );

        // Side bars in wide cells are shorter than their pointed ends.
        let b = separate_ends(
            [
                Point::new(w, bw * 2.0 + di),
                Point::new(w, h / 2.0 - si / 2.0),
                Point::new(w - sw / 2.0, h / 2.0 - si / 2.0),
                Point::new(w - sw, h / 2.0 - sw / 2.0 - si / 2.0),
                Point::new(w - sw, sw + di),
                Point::new(w - bw, bw + di),
            ],
            Axis::Vertical,
        );

        let g = separate_ends(
            [
                Point::new(sw + mi, h / 2.0 - sw / 2.0),
                Point::new(w - sw - mi, h / 2.0 - sw / 2.0),
                Point::new(w - sw / 2.0 - mi, h / 2.0),
                Point::new(w - sw - mi, h / 2.0 + sw / 2.0),
                Point::new(sw + mi, h / 2.0 + sw / 2.0),
                Point::new(sw / 2.0 + mi, h / 2.0),
            ],
            Axis::Horizontal,
        );

        let c = flip_vertical(&b, h);
        let d = flip_vertical(&a, h);
        let e = flip_horizontal(&c, w);
        let f = flip_horizontal(&b, w);

        vec![a, b, c, d, e, f, g]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    fn signed_area(polygon: &Polygon) -> f64 {
        let mut area = 0.0;
        for i in 0..polygon.len() {
            let p = polygon[i];
            let q = polygon[(i + 1) % polygon.len()];
            area += p.x * q.y - q.x * p.y;
        }
        area / 2.0
    }

    fn cross(o: Point, a: Point, b: Point) -> f64 {
        (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
    }

    /// True when two non-adjacent edges of the outline properly cross.
    fn crosses_itself(polygon: &Polygon) -> bool {
        let n = polygon.len();
        let edge = |i: usize| (polygon[i], polygon[(i + 1) % n]);
        for i in 0..n {
            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let ((a, b), (c, d)) = (edge(i), edge(j));
                if cross(a, b, c) * cross(a, b, d) < -EPSILON
                    && cross(c, d, a) * cross(c, d, b) < -EPSILON
                {
                    return true;
                }
            }
        }
        false
    }

    #[test_log::test]
    fn table_matches_documented_patterns() {
        let expected: &[(char, CharacterMask)] = &[
            (' ', 0b0000000),
            ('0', 0b0111111),
            ('1', 0b0000110),
            ('2', 0b1011011),
            ('3', 0b1001111),
            ('4', 0b1100110),
            ('5', 0b1101101),
            ('6', 0b1111101),
            ('7', 0b0000111),
            ('8', 0b1111111),
            ('9', 0b1100111),
            ('A', 0b1110111),
            ('B', 0b1111111),
            ('C', 0b0111001),
            ('D', 0b0111111),
            ('E', 0b1111001),
            ('F', 0b1110001),
            ('G', 0b1111101),
            ('H', 0b1110110),
            ('I', 0b0000110),
            ('J', 0b0011110),
            ('K', 0b1110000),
            ('L', 0b0111000),
            ('M', 0b0110111),
            ('N', 0b0110111),
            ('O', 0b0111111),
            ('P', 0b1110011),
            ('Q', 0b0111111),
            ('R', 0b1110111),
            ('S', 0b1101101),
            ('T', 0b0000111),
            ('U', 0b0111110),
            ('V', 0b0111110),
            ('W', 0b0111110),
            ('X', 0b1110000),
            ('Y', 0b1110010),
            ('Z', 0b1011011),
            ('-', 0b1000000),
        ];

        for &(c, mask) in expected {
            assert_eq!(SevenSegment::character_mask(c), Some(mask), "{c:?}");
        }
        assert_eq!(SevenSegment::characters().count(), expected.len());
    }

    #[test_log::test]
    fn lowercase_and_symbols_are_unknown() {
        for c in ['a', 'z', '?', '+', '*', '\0', 'é'] {
            assert_eq!(SevenSegment::character_mask(c), None, "{c:?}");
            assert_eq!(SevenSegment::mask_or_unknown(c), 0x80);
        }
    }

    #[test_log::test]
    fn masks_fit_in_seven_bits() {
        for (c, mask) in SevenSegment::characters() {
            assert_eq!(mask >> SevenSegment::SEGMENT_COUNT, 0, "{c:?}");
        }
    }

    #[test_log::test]
    fn produces_seven_hexagons() {
        for (w, h) in [(37.5, 80.0), (1.0, 1.0), (200.0, 20.0)] {
            let points = SevenSegment::compute_points(w, h, &SegmentStyle::default());
            assert_eq!(points.len(), 7);
            assert!(points.iter().all(|p| p.len() == 6));
        }
    }

    #[test_log::test]
    fn top_segment_is_derived_from_ratios() {
        let style = SegmentStyle::default();
        let points = SevenSegment::compute_points(100.0, 200.0, &style);
        let sw = 16.0;
        let bw = 0.06 * sw;
        let di = 5.0 / SQRT_2;

        let top = points[segment::A];
        assert!(close(top[0], Point::new(bw * 2.0 + di, 0.0)));
        assert!(close(top[1], Point::new(100.0 - bw * 2.0 - di, 0.0)));
        assert!(close(top[3], Point::new(100.0 - sw - di, sw)));
        assert!(close(top[4], Point::new(sw + di, sw)));

        let middle = points[segment::G];
        assert!(close(middle[2], Point::new(100.0 - sw / 2.0 - 2.5 * SQRT_3, 100.0)));
        assert!(close(middle[5], Point::new(sw / 2.0 + 2.5 * SQRT_3, 100.0)));
    }

    #[test_log::test]
    fn mirrored_segments_follow_flip_chain() {
        let (w, h) = (37.5, 80.0);
        let points = SevenSegment::compute_points(w, h, &SegmentStyle::default());

        assert_eq!(points[segment::C], flip_vertical(&points[segment::B], h));
        assert_eq!(points[segment::D], flip_vertical(&points[segment::A], h));
        assert_eq!(points[segment::E], flip_horizontal(&points[segment::C], w));
        assert_eq!(points[segment::F], flip_horizontal(&points[segment::B], w));
    }

    #[test_log::test]
    fn outlines_never_cross_themselves() {
        let styles = [
            SegmentStyle::default(),
            SegmentStyle {
                segment_width: 0.3,
                segment_interval: 0.1,
                bevel_width: 0.9,
                side_bevel: false,
            },
        ];
        for style in &styles {
            for (w, h) in [
                (37.5, 80.0),
                (50.0, 100.0),
                (180.0, 80.0),
                (1000.0, 1.0),
                (1.0, 1000.0),
            ] {
                let points = SevenSegment::compute_points(w, h, style);
                for (index, polygon) in points.iter().enumerate() {
                    assert!(!crosses_itself(polygon), "{w}x{h} segment {index}: {polygon:?}");
                }
            }
        }
    }

    #[test_log::test]
    fn wide_cells_stay_inside_the_cell() {
        for (w, h) in [(37.5, 80.0), (50.0, 100.0), (180.0, 80.0)] {
            for polygon in SevenSegment::compute_points(w, h, &SegmentStyle::default()) {
                for p in polygon {
                    assert!((-EPSILON..=w + EPSILON).contains(&p.x), "{w}x{h} {p:?}");
                    assert!((-EPSILON..=h + EPSILON).contains(&p.y), "{w}x{h} {p:?}");
                }
            }
        }
    }

    #[test_log::test]
    fn segments_are_non_degenerate_and_inside_the_cell() {
        let (w, h) = (37.5, 80.0);
        for polygon in SevenSegment::compute_points(w, h, &SegmentStyle::default()) {
            assert!(signed_area(&polygon).abs() > 1.0);
            for p in polygon {
                assert!((-EPSILON..=w + EPSILON).contains(&p.x), "{p:?}");
                assert!((-EPSILON..=h + EPSILON).contains(&p.y), "{p:?}");
            }
        }
    }

    #[test_log::test]
    fn zero_sized_cell_is_degenerate_but_finite() {
        let points = SevenSegment::compute_points(0.0, 0.0, &SegmentStyle::default());
        assert_eq!(points.len(), 7);
        for p in points.iter().flatten() {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert_eq!(*p, Point::new(0.0, 0.0));
        }
    }
}
