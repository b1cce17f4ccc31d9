use crate::{Point, Polygon};

/// The axis a straight segment runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left to right, like the top and middle bars.
    Horizontal,
    /// Top to bottom, like the side bars.
    Vertical,
}

/// Keep the two end caps of a straight segment from passing each other.
///
/// Segments are wound so that points 4, 5 and 0 form the cap nearest the
/// origin and points 1, 2 and 3 form the far cap. When a cell is too short
/// along `axis` for both caps, they are squeezed onto the line halfway between
/// them. A segment that fits is returned unchanged.
pub fn separate_ends(mut polygon: Polygon, axis: Axis) -> Polygon {
    const NEAR: [usize; 3] = [4, 5, 0];
    const FAR: [usize; 3] = [1, 2, 3];

    let along = |p: &Point| match axis {
        Axis::Horizontal => p.x,
        Axis::Vertical => p.y,
    };

    let near = NEAR
        .iter()
        .map(|&i| along(&polygon[i]))
        .fold(f64::NEG_INFINITY, f64::max);
    let far = FAR
        .iter()
        .map(|&i| along(&polygon[i]))
        .fold(f64::INFINITY, f64::min);
    if near <= far {
        return polygon;
    }

    let split = (near + far) / 2.0;
    let mut clamp = |i: usize, pick: fn(f64, f64) -> f64| {
        let p = &mut polygon[i];
        match axis {
            Axis::Horizontal => p.x = pick(p.x, split),
            Axis::Vertical => p.y = pick(p.y, split),
        }
    };
    for i in NEAR {
        clamp(i, f64::min);
    }
    for i in FAR {
        clamp(i, f64::max);
    }

    polygon
}
