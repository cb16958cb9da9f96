use glam::Vec2;
use polyscene::core::{MovingVertex, NodeSnapshot, PathOp, Polygon, PolygonStyle, RecordingContext};
use polyscene::math::{Bounds, Color};
use polyscene::traits::SceneNode;
use polyscene::SceneError;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(test)]
mod polygon_tests {
    use super::*;

    #[test]
    fn test_random_triangle_has_three_vertices_inside_region() {
        let region = Bounds::new(Vec2::new(50.0, 50.0), Vec2::new(150.0, 120.0));
        let mut rng = StdRng::seed_from_u64(11);

        let polygon = Polygon::random(&region, 3, &mut rng).unwrap();

        assert_eq!(polygon.edges(), 3);
        for vertex in polygon.vertices() {
            assert!(region.contains(vertex.pos));
            assert!(vertex.vel.x >= -2.0 && vertex.vel.x < 3.0);
            assert!(vertex.vel.y >= -2.0 && vertex.vel.y < 3.0);
        }
    }

    #[test]
    fn test_too_few_edges_rejected() {
        let region = Bounds::from_size(100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(11);

        assert!(matches!(
            Polygon::random(&region, 2, &mut rng),
            Err(SceneError::InvalidEdgeCount(2))
        ));
        assert!(matches!(
            Polygon::from_points([Vec2::ZERO, Vec2::ONE], PolygonStyle::default()),
            Err(SceneError::InvalidEdgeCount(2))
        ));
    }

    #[test]
    fn test_same_seed_same_polygon() {
        let region = Bounds::from_size(640.0, 480.0);
        let a = Polygon::random(&region, 6, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = Polygon::random(&region, 6, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_style_is_fixed_outline_translucent_fill() {
        let region = Bounds::from_size(100.0, 100.0);
        let polygon = Polygon::random(&region, 4, &mut StdRng::seed_from_u64(5)).unwrap();
        let style = polygon.style();

        assert_eq!(style.stroke_color, Color::rgb(0xee, 0xee, 0xee));
        assert_eq!(style.line_width, 2.0);
        assert_eq!(style.fill_color.a, 0x99);
    }

    #[test]
    fn test_paint_emits_fill_then_stroke_of_closed_path() {
        let style = PolygonStyle {
            stroke_color: Color::WHITE,
            fill_color: Color::rgb(10, 20, 30),
            line_width: 3.0,
        };
        let polygon = Polygon::from_points(
            [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(5.0, 8.0)],
            style,
        )
        .unwrap();

        let mut ctx = RecordingContext::new();
        polygon.paint(&mut ctx);

        assert_eq!(
            ctx.ops(),
            &[
                PathOp::SetFillColor(Color::rgb(10, 20, 30)),
                PathOp::SetStrokeColor(Color::WHITE),
                PathOp::SetStrokeWidth(3.0),
                PathOp::MoveTo(Vec2::new(0.0, 0.0)),
                PathOp::LineTo(Vec2::new(10.0, 0.0)),
                PathOp::LineTo(Vec2::new(5.0, 8.0)),
                PathOp::ClosePath,
                PathOp::FillAndStroke,
            ]
        );
    }

    #[test]
    fn test_advance_moves_every_vertex_with_same_bounds() {
        let bounds = Bounds::from_size(100.0, 100.0);
        let vertices = vec![
            MovingVertex::new(Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0)),
            MovingVertex::new(Vec2::new(99.0, 10.0), Vec2::new(3.0, 0.0)),
            MovingVertex::new(Vec2::new(50.0, 1.0), Vec2::new(0.0, -2.0)),
        ];
        let mut polygon = Polygon::new(vertices, PolygonStyle::default()).unwrap();

        polygon.advance(&bounds);

        let moved: Vec<_> = polygon.vertices().iter().map(|v| (v.pos, v.vel)).collect();
        assert_eq!(
            moved,
            vec![
                (Vec2::new(11.0, 10.0), Vec2::new(1.0, 0.0)),
                (Vec2::new(99.0, 10.0), Vec2::new(-3.0, 0.0)),
                (Vec2::new(50.0, 1.0), Vec2::new(0.0, 2.0)),
            ]
        );
    }

    #[test]
    fn test_serde_preserves_exact_vertex_values() {
        let region = Bounds::from_size(1920.0, 1080.0);
        let mut polygon = Polygon::random(&region, 7, &mut StdRng::seed_from_u64(2024)).unwrap();
        for _ in 0..37 {
            polygon.advance(&region);
        }

        let json = serde_json::to_string(&polygon).unwrap();
        let restored: Polygon = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.vertices(), polygon.vertices());
        assert_eq!(restored.style(), polygon.style());
    }

    #[test]
    fn test_deserialize_rejects_degenerate_polygon() {
        let json = r#"{
            "vertices": [
                { "pos": [0.0, 0.0], "vel": [1.0, 1.0] },
                { "pos": [5.0, 5.0], "vel": [1.0, 1.0] }
            ],
            "style": {
                "stroke_color": { "r": 238, "g": 238, "b": 238, "a": 255 },
                "fill_color": { "r": 0, "g": 0, "b": 0, "a": 153 },
                "line_width": 2.0
            }
        }"#;

        assert!(serde_json::from_str::<Polygon>(json).is_err());
    }

    #[test]
    fn test_snapshot_wraps_polygon() {
        let polygon = Polygon::random(&Bounds::from_size(10.0, 10.0), 3, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(polygon.snapshot(), Some(NodeSnapshot::Polygon(polygon.clone())));
    }
}
