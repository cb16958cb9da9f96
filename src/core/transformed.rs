use glam::{Affine2, Vec2};

use crate::math::{length_scale, Color};
use crate::traits::DrawContext;

/// Maps every point (and stroke width) through an affine transform before
/// forwarding to the wrapped context
pub struct TransformedContext<'a> {
    inner: &'a mut dyn DrawContext,
    transform: Affine2,
    width_scale: f32,
}

impl<'a> TransformedContext<'a> {
    pub fn new(inner: &'a mut dyn DrawContext, transform: Affine2) -> Self {
        Self {
            inner,
            transform,
            width_scale: length_scale(&transform),
        }
    }
}

impl DrawContext for TransformedContext<'_> {
    fn move_to(&mut self, point: Vec2) {
        self.inner.move_to(self.transform.transform_point2(point));
    }

    fn line_to(&mut self, point: Vec2) {
        self.inner.line_to(self.transform.transform_point2(point));
    }

    fn close_path(&mut self) {
        self.inner.close_path();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.inner.set_fill_color(color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.inner.set_stroke_color(color);
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.inner.set_stroke_width(width * self.width_scale);
    }

    fn fill_and_stroke(&mut self) {
        self.inner.fill_and_stroke();
    }
}
