use glam::Vec2;
use polyscene::core::MovingVertex;
use polyscene::math::Bounds;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod vertex_motion_tests {
    use super::*;

    #[test]
    fn test_double_step_bounce_off_max_edge() {
        let bounds = Bounds::from_size(100.0, 100.0);
        let mut vertex = MovingVertex::new(Vec2::new(99.0, 50.0), Vec2::new(3.0, 0.0));

        vertex.advance(&bounds);

        // Overshoot to 102 is undone by the reversed step, not clamped to 100
        assert_eq!(vertex.pos, Vec2::new(99.0, 50.0));
        assert_eq!(vertex.vel, Vec2::new(-3.0, 0.0));

        vertex.advance(&bounds);
        assert_eq!(vertex.pos, Vec2::new(96.0, 50.0));
    }

    #[test]
    fn test_double_step_bounce_off_min_edge() {
        let bounds = Bounds::from_size(100.0, 100.0);
        let mut vertex = MovingVertex::new(Vec2::new(50.0, 1.0), Vec2::new(0.0, -2.0));

        vertex.advance(&bounds);

        assert_eq!(vertex.pos, Vec2::new(50.0, 1.0));
        assert_eq!(vertex.vel, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let bounds = Bounds::from_size(100.0, 100.0);
        let mut vertex = MovingVertex::new(Vec2::new(99.0, 99.0), Vec2::new(2.0, 2.0));

        vertex.advance(&bounds);

        assert_eq!(vertex.vel, Vec2::new(-2.0, -2.0));
        assert_eq!(vertex.pos, Vec2::new(99.0, 99.0));
    }

    #[test]
    fn test_landing_on_edge_does_not_bounce() {
        let bounds = Bounds::from_size(100.0, 100.0);
        let mut vertex = MovingVertex::new(Vec2::new(97.0, 0.0), Vec2::new(3.0, 0.0));

        vertex.advance(&bounds);

        assert_eq!(vertex.pos, Vec2::new(100.0, 0.0));
        assert_eq!(vertex.vel, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_vertices_stay_within_one_step_of_bounds() {
        let bounds = Bounds::new(Vec2::new(10.0, 20.0), Vec2::new(310.0, 220.0));
        let mut rng = StdRng::seed_from_u64(0xB0B);

        for _ in 0..50 {
            let pos = bounds.min + Vec2::new(rng.random::<f32>(), rng.random::<f32>()) * bounds.size();
            let vel = Vec2::new(rng.random::<f32>() * 5.0 - 2.0, rng.random::<f32>() * 5.0 - 2.0);
            let mut vertex = MovingVertex::new(pos, vel);
            let allowed = bounds.inflate(vel.abs());

            for _ in 0..2_000 {
                vertex.advance(&bounds);
                assert!(
                    allowed.contains(vertex.pos),
                    "{:?} escaped {:?}",
                    vertex.pos,
                    allowed
                );
                assert_eq!(vertex.vel.abs(), vel.abs());
            }
        }
    }
}
