use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use polyscene::core::{Group, NodeSnapshot, Polygon, PolygonStyle, RecordingContext, RepaintFlag, SceneSnapshot};
use polyscene::math::Bounds;
use polyscene::traits::{SceneNode, SharedBounds};
use polyscene::{Scene, SceneError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::runtime::Handle;
use tokio::time::sleep;

fn scene_with(bounds: SharedBounds, flag: &RepaintFlag) -> Scene {
    Scene::new(Handle::current(), Arc::new(bounds), Arc::new(flag.clone()))
}

fn painted(scene: &Scene) -> RecordingContext {
    let mut ctx = RecordingContext::new();
    scene.paint(&mut ctx);
    ctx
}

#[cfg(test)]
mod scene_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_driver_moves_polygons_and_requests_repaints() {
        let flag = RepaintFlag::new();
        let scene = scene_with(SharedBounds::new(Bounds::from_size(400.0, 300.0)), &flag);
        scene.populate(5, 5, &mut StdRng::seed_from_u64(8)).unwrap();
        let before = scene.snapshot();

        scene.start(Duration::from_millis(40));
        sleep(Duration::from_millis(210)).await;
        scene.stop();

        assert_eq!(scene.driver().ticks(), 5);
        assert_eq!(flag.requests(), 5);
        assert_ne!(scene.snapshot(), before);

        // Five ticks equal five manual steps from the same start
        let manual = scene_with(SharedBounds::new(Bounds::from_size(400.0, 300.0)), &RepaintFlag::new());
        manual.restore(before);
        for _ in 0..5 {
            manual.step();
        }
        assert_eq!(manual.snapshot(), scene.snapshot());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_use_bounds_at_tick_time() {
        let bounds = SharedBounds::new(Bounds::from_size(100.0, 100.0));
        let scene = scene_with(bounds.clone(), &RepaintFlag::new());
        let polygon = Polygon::new(
            vec![
                polyscene::core::MovingVertex::new(Vec2::new(50.0, 10.0), Vec2::new(3.0, 0.0)),
                polyscene::core::MovingVertex::new(Vec2::new(10.0, 10.0), Vec2::ZERO),
                polyscene::core::MovingVertex::new(Vec2::new(10.0, 50.0), Vec2::ZERO),
            ],
            PolygonStyle::default(),
        )
        .unwrap();
        scene.add(Box::new(polygon));

        // Shrink so the next step overshoots x = 52
        bounds.set(Bounds::from_size(52.0, 100.0));
        scene.start(Duration::from_millis(10));
        sleep(Duration::from_millis(15)).await;
        scene.stop();

        match &scene.snapshot().nodes[0] {
            NodeSnapshot::Polygon(p) => {
                assert_eq!(p.vertices()[0].pos, Vec2::new(50.0, 10.0));
                assert_eq!(p.vertices()[0].vel, Vec2::new(-3.0, 0.0));
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_interaction_between_ticks_is_serialized() {
        let scene = Arc::new(scene_with(SharedBounds::new(Bounds::from_size(200.0, 200.0)), &RepaintFlag::new()));
        let mut rng = StdRng::seed_from_u64(4);
        scene.start(Duration::from_millis(5));

        let mut ids = Vec::new();
        for _ in 0..20 {
            ids.push(scene.add_polygon(4, &mut rng).unwrap());
            sleep(Duration::from_millis(3)).await;
        }
        for id in ids.iter().step_by(2) {
            assert!(scene.remove(*id).is_some());
            sleep(Duration::from_millis(3)).await;
        }
        scene.stop();

        assert_eq!(scene.len(), 10);
        assert_eq!(painted(&scene).shape_count(), 10);
        assert!(scene.driver().ticks() > 0);
    }

    #[tokio::test]
    async fn test_snapshot_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");

        let scene = scene_with(SharedBounds::new(Bounds::from_size(800.0, 600.0)), &RepaintFlag::new());
        scene.populate(3, 6, &mut StdRng::seed_from_u64(77)).unwrap();
        let mut nested = Group::new();
        nested.add(Box::new(Polygon::random(&Bounds::from_size(50.0, 50.0), 3, &mut StdRng::seed_from_u64(1)).unwrap()));
        nested.scale_about(Vec2::new(25.0, 25.0), 1.5);
        scene.add(Box::new(nested));
        for _ in 0..12 {
            scene.step();
        }

        let snapshot = scene.snapshot();
        snapshot.save(&path).unwrap();
        let loaded = SceneSnapshot::load(&path).unwrap();
        assert_eq!(loaded, snapshot);

        let restored = scene_with(SharedBounds::new(Bounds::from_size(800.0, 600.0)), &RepaintFlag::new());
        let ids = restored.restore(loaded);
        assert_eq!(ids.len(), 4);
        assert_eq!(painted(&restored).ops(), painted(&scene).ops());
    }

    #[tokio::test]
    async fn test_load_rejects_polygon_with_two_vertices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{ "nodes": [ { "kind": "polygon",
                "vertices": [ { "pos": [0.0, 0.0], "vel": [1.0, 0.0] },
                              { "pos": [1.0, 1.0], "vel": [0.0, 1.0] } ],
                "style": { "stroke_color": { "r": 1, "g": 2, "b": 3, "a": 255 },
                           "fill_color": { "r": 1, "g": 2, "b": 3, "a": 153 },
                           "line_width": 2.0 } } ] }"#,
        )
        .unwrap();

        assert!(matches!(SceneSnapshot::load(&path), Err(SceneError::Snapshot(_))));
        assert!(matches!(
            SceneSnapshot::load(&dir.path().join("missing.json")),
            Err(SceneError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_zoom_rescales_about_bounds_center() {
        let scene = scene_with(SharedBounds::new(Bounds::from_size(100.0, 100.0)), &RepaintFlag::new());
        scene.add(Box::new(
            Polygon::from_points(
                [Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0)],
                PolygonStyle::default(),
            )
            .unwrap(),
        ));

        scene.zoom(0.5);
        let bounds = scene.with_root(|root| root.bounds()).unwrap();
        assert_eq!(bounds, Bounds::new(Vec2::new(25.0, 25.0), Vec2::new(75.0, 75.0)));
    }
}
