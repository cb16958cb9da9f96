use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in scene coordinates
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle anchored at the origin with the given size
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    /// Smallest rectangle containing every point, `None` for an empty set
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;

        Some(points.fold(Self::new(first, first), |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        }))
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive containment test on both axes
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Min not greater than max on either axis
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grows the rectangle by `margin` on every side
    pub fn inflate(&self, margin: Vec2) -> Bounds {
        Bounds {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    pub fn scale_about(&self, center: Vec2, factor: f32) -> Bounds {
        let a = super::scale_about(self.min, center, factor);
        let b = super::scale_about(self.max, center, factor);
        Bounds {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Bounding rectangle of the four transformed corners
    pub fn transformed(&self, transform: &Affine2) -> Bounds {
        let corners = [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ];

        // Four corners, never empty
        Bounds::from_points(corners.map(|c| transform.transform_point2(c))).unwrap_or(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_center() {
        let bounds = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 4.0));
        assert_eq!(bounds.center(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_bounds_center_negative() {
        let bounds = Bounds::new(Vec2::new(-2.0, -4.0), Vec2::new(2.0, 4.0));
        assert_eq!(bounds.center(), Vec2::ZERO);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = Bounds::from_size(100.0, 50.0);
        assert!(bounds.contains(Vec2::new(0.0, 0.0)));
        assert!(bounds.contains(Vec2::new(100.0, 50.0)));
        assert!(bounds.contains(Vec2::new(42.0, 17.0)));
        assert!(!bounds.contains(Vec2::new(100.1, 10.0)));
        assert!(!bounds.contains(Vec2::new(10.0, -0.1)));
    }

    #[test]
    fn test_from_points() {
        let bounds = Bounds::from_points([
            Vec2::new(3.0, -1.0),
            Vec2::new(-2.0, 5.0),
            Vec2::new(1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Vec2::new(-2.0, -1.0));
        assert_eq!(bounds.max, Vec2::new(3.0, 5.0));
        assert!(Bounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_union_non_overlapping() {
        let a = Bounds::new(Vec2::ZERO, Vec2::ONE);
        let b = Bounds::new(Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0));
        let union = a.union(&b);
        assert_eq!(union.min, Vec2::ZERO);
        assert_eq!(union.max, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_scale_about_center_keeps_center() {
        let bounds = Bounds::from_size(100.0, 100.0);
        let scaled = bounds.scale_about(bounds.center(), 2.0);
        assert_eq!(scaled.center(), bounds.center());
        assert_eq!(scaled.width(), 200.0);
        assert_eq!(scaled.min, Vec2::new(-50.0, -50.0));
    }

    #[test]
    fn test_transformed_by_scale() {
        let bounds = Bounds::from_size(10.0, 20.0);
        let t = Affine2::from_scale(Vec2::splat(2.0));
        let out = bounds.transformed(&t);
        assert_eq!(out.max, Vec2::new(20.0, 40.0));
    }

    #[test]
    fn test_is_valid() {
        assert!(Bounds::from_size(1.0, 1.0).is_valid());
        assert!(!Bounds::new(Vec2::new(5.0, 0.0), Vec2::new(1.0, 1.0)).is_valid());
    }
}
