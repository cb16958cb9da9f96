use glam::{Affine2, Vec2};

/// Scales `point` away from (or towards) `center` by `factor`
pub fn scale_about(point: Vec2, center: Vec2, factor: f32) -> Vec2 {
    center + (point - center) * factor
}

/// Affine transform equivalent to [`scale_about`] for every point
pub fn scale_about_transform(center: Vec2, factor: f32) -> Affine2 {
    Affine2::from_translation(center)
        * Affine2::from_scale(Vec2::splat(factor))
        * Affine2::from_translation(-center)
}

/// Uniform scale factor a transform applies to lengths (stroke widths)
pub fn length_scale(transform: &Affine2) -> f32 {
    transform.matrix2.determinant().abs().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_about_fixed_point() {
        let center = Vec2::new(50.0, 50.0);
        assert_eq!(scale_about(center, center, 3.0), center);
    }

    #[test]
    fn test_scale_about_doubles_offset() {
        let p = scale_about(Vec2::new(60.0, 40.0), Vec2::new(50.0, 50.0), 2.0);
        assert_eq!(p, Vec2::new(70.0, 30.0));
    }

    #[test]
    fn test_transform_matches_point_helper() {
        let center = Vec2::new(400.0, 300.0);
        let t = scale_about_transform(center, 1.5);
        let p = Vec2::new(10.0, 20.0);
        let expected = scale_about(p, center, 1.5);
        assert!((t.transform_point2(p) - expected).length() < 1e-3);
    }

    #[test]
    fn test_length_scale() {
        assert!((length_scale(&scale_about_transform(Vec2::ZERO, 2.0)) - 2.0).abs() < 1e-6);
        assert_eq!(length_scale(&Affine2::IDENTITY), 1.0);
    }
}
