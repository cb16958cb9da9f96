use glam::Vec2;

use crate::math::Color;

/// Path-based drawing target that scene nodes paint into
///
/// A path is built with `move_to`/`line_to`/`close_path` and consumed by
/// `fill_and_stroke`, which fills then strokes it with the current paint
/// state and starts a fresh path. Paint state persists between paths.
pub trait DrawContext {
    /// Begin a new subpath at `point`
    fn move_to(&mut self, point: Vec2);

    /// Straight segment from the current point to `point`
    fn line_to(&mut self, point: Vec2);

    /// Close the current subpath back to its starting point
    fn close_path(&mut self);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_stroke_width(&mut self, width: f32);

    /// Fill, then stroke, the current path and clear it
    fn fill_and_stroke(&mut self);
}
