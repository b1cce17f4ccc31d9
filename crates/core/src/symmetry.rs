use crate::Point;

/// Mirror a point sequence top to bottom within a cell of the given height.
///
/// Point order is kept, so the winding of the result is reversed.
pub fn flip_vertical<const N: usize>(points: &[Point; N], height: f64) -> [Point; N] {
    points.map(|p| Point::new(p.x, height - p.y))
}

/// Mirror a point sequence left to right within a cell of the given width.
pub fn flip_horizontal<const N: usize>(points: &[Point; N], width: f64) -> [Point; N] {
    points.map(|p| Point::new(width - p.x, p.y))
}
