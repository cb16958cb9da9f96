use glam::Vec2;

use crate::math::Color;
use crate::traits::DrawContext;

/// One drawing-context call, as captured by [`RecordingContext`]
#[derive(Debug, Clone, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetStrokeWidth(f32),
    FillAndStroke,
}

/// Drawing context that records calls instead of rasterizing them
///
/// Useful for inspecting paint order and for replaying a frame into another
/// context later.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    ops: Vec<PathOp>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    /// Number of completed fill-and-stroke calls
    pub fn shape_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PathOp::FillAndStroke))
            .count()
    }

    /// Fill color in effect at each fill-and-stroke, in paint order
    pub fn fill_sequence(&self) -> Vec<Color> {
        let mut current = Color::TRANSPARENT;
        let mut fills = Vec::new();

        for op in &self.ops {
            match op {
                PathOp::SetFillColor(c) => current = *c,
                PathOp::FillAndStroke => fills.push(current),
                _ => {}
            }
        }

        fills
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Issue every recorded call against `ctx`, in order
    pub fn replay(&self, ctx: &mut dyn DrawContext) {
        for op in &self.ops {
            match *op {
                PathOp::MoveTo(p) => ctx.move_to(p),
                PathOp::LineTo(p) => ctx.line_to(p),
                PathOp::ClosePath => ctx.close_path(),
                PathOp::SetFillColor(c) => ctx.set_fill_color(c),
                PathOp::SetStrokeColor(c) => ctx.set_stroke_color(c),
                PathOp::SetStrokeWidth(w) => ctx.set_stroke_width(w),
                PathOp::FillAndStroke => ctx.fill_and_stroke(),
            }
        }
    }
}

impl DrawContext for RecordingContext {
    fn move_to(&mut self, point: Vec2) {
        self.ops.push(PathOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Vec2) {
        self.ops.push(PathOp::LineTo(point));
    }

    fn close_path(&mut self) {
        self.ops.push(PathOp::ClosePath);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(PathOp::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(PathOp::SetStrokeColor(color));
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.ops.push(PathOp::SetStrokeWidth(width));
    }

    fn fill_and_stroke(&mut self) {
        self.ops.push(PathOp::FillAndStroke);
    }
}
