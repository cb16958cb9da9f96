use serde::{Deserialize, Serialize};

use crate::math::{Bounds, Point2D, Velocity2D};

/// Point that travels by a fixed velocity each tick and bounces off bounds
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovingVertex {
    pub pos: Point2D,
    pub vel: Velocity2D,
}

impl MovingVertex {
    pub fn new(pos: Point2D, vel: Velocity2D) -> Self {
        Self { pos, vel }
    }

    /// Advance one step inside `bounds`
    ///
    /// An axis that ends up outside the bounds has its velocity negated and
    /// is stepped again by the negated velocity, so an overshoot of `k`
    /// comes back in by the full step rather than stopping at the edge.
    /// Axes bounce independently; speed magnitude never changes.
    pub fn advance(&mut self, bounds: &Bounds) {
        self.pos += self.vel;

        if self.pos.x < bounds.min.x || self.pos.x > bounds.max.x {
            self.vel.x = -self.vel.x;
            self.pos.x += self.vel.x;
        }

        if self.pos.y < bounds.min.y || self.pos.y > bounds.max.y {
            self.vel.y = -self.vel.y;
            self.pos.y += self.vel.y;
        }
    }
}
