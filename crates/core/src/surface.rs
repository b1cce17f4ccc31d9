use crate::{Color, Point};

/// A 2D drawing surface with canvas-style path operations.
///
/// Coordinates passed to path operations are relative to the current origin,
/// which [Surface::translate] moves and [Surface::save]/[Surface::restore]
/// push and pop.
pub trait Surface {
    /// Clear a rectangle, given in current coordinates.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Push the current origin.
    fn save(&mut self);

    /// Pop the origin pushed by the matching [Surface::save].
    fn restore(&mut self);

    /// Move the origin by the given offset.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    fn move_to(&mut self, point: Point);

    fn line_to(&mut self, point: Point);

    /// Connect the last point of the current path back to its first point.
    fn close_path(&mut self);

    /// Fill the current path.
    fn fill(&mut self, color: Color);

    /// Outline the current path.
    fn stroke(&mut self, color: Color, width: f64);

    /// Add a closed polygon as the current path.
    fn polygon(&mut self, points: &[Point]) {
        self.begin_path();
        if let Some((first, rest)) = points.split_first() {
            self.move_to(*first);
            for point in rest {
                self.line_to(*point);
            }
        }
        self.close_path();
    }
}
