//! Integration tests for the sandbox world
//!
//! These tests drive the world the way the frame loop does:
//! 1. Spawning and deleting keeps objects and bodies paired
//! 2. Saved scene files load back into the same object list
//! 3. The black hole consumes objects that reach its capture radius
//! 4. Dynamic objects settle on the ground

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use sandbox_core::{
    load_world, save_world, BlackHole, Color, EditFields, ObjectKind, Scene, SceneLoadError, World, SPAWN_HEIGHT,
};
use sandbox_math::{Ray, Vec3};

const DT: f32 = 1.0 / 60.0;

/// A scene path no other test in any running process uses
fn temp_path(name: &str) -> PathBuf {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("sandbox_{}_{}_{}.json", name, std::process::id(), n))
}

fn sorted_records(world: &World) -> Vec<(String, String, [i32; 3], [i32; 3])> {
    let mut records: Vec<_> = Scene::from_world(world)
        .objects
        .into_iter()
        .map(|o| {
            (
                o.kind.to_string(),
                o.color.to_hex(),
                [(o.pos.x * 100.0) as i32, (o.pos.y * 100.0) as i32, (o.pos.z * 100.0) as i32],
                [(o.scale.x * 100.0) as i32, (o.scale.y * 100.0) as i32, (o.scale.z * 100.0) as i32],
            )
        })
        .collect();
    records.sort();
    records
}

// ==================== Persistence ====================

#[test]
fn test_save_then_load_reproduces_objects() {
    let mut world = World::new();
    world.spawn(ObjectKind::Cube, Color::rgb(255, 0, 0), Vec3::new(0.0, 5.0, 0.0)).unwrap();
    world
        .spawn_scaled(ObjectKind::Wall, Color::rgb(0, 255, 0), Vec3::new(40.0, 5.0, -3.0), Vec3::new(4.0, 1.0, 0.5))
        .unwrap();
    world.spawn(ObjectKind::Sphere, Color::rgb(0, 0, 255), Vec3::new(-30.0, 6.0, 12.5)).unwrap();

    let before = sorted_records(&world);
    let path = temp_path("roundtrip");
    assert_eq!(save_world(&world, &path).unwrap(), 3);

    let mut restored = World::new();
    restored.spawn(ObjectKind::Cube, Color::WHITE, Vec3::new(500.0, 5.0, 0.0)).unwrap();
    assert_eq!(load_world(&mut restored, &path).unwrap(), 3);
    let _ = std::fs::remove_file(&path);

    assert_eq!(sorted_records(&restored), before);
    assert_eq!(restored.physics().body_count(), 3);
}

#[test]
fn test_object_fallen_off_the_ground_loads_back() {
    let mut world = World::new();
    let key = world.spawn(ObjectKind::Cube, Color::rgb(9, 8, 7), Vec3::new(1200.0, SPAWN_HEIGHT, 0.0)).unwrap();
    for _ in 0..1500 {
        world.step(DT);
    }
    let fallen = world.get(key).unwrap().transform.position;
    assert!(fallen.y < -10000.0, "cube should fall past the slab, y = {}", fallen.y);

    let path = temp_path("fallen");
    save_world(&world, &path).unwrap();
    let mut restored = World::new();
    let loaded = load_world(&mut restored, &path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.unwrap(), 1);
    assert_eq!(sorted_records(&restored), sorted_records(&world));
}

#[test]
fn test_failed_load_leaves_world_untouched() {
    let mut world = World::new();
    let key = world.spawn(ObjectKind::Cube, Color::WHITE, Vec3::ZERO).unwrap();

    let path = temp_path("bad");
    std::fs::write(&path, r#"{"objects": []}"#).unwrap();
    let err = load_world(&mut world, &path).unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert!(matches!(err, SceneLoadError::Validation(_)));
    assert!(world.get(key).is_some());
    assert_eq!(world.len(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let mut world = World::new();
    let err = load_world(&mut world, temp_path("does_not_exist")).unwrap_err();
    assert!(matches!(err, SceneLoadError::Io(_)));
}

// ==================== Black hole ====================

#[test]
fn test_object_pulled_into_black_hole_is_removed() {
    let mut world = World::new().with_black_hole(BlackHole {
        enabled: true,
        position: Vec3::new(0.0, 60.0, 0.0),
        strength: 20000.0,
        capture_radius: 10.0,
    });
    let sphere = world.spawn(ObjectKind::Sphere, Color::WHITE, Vec3::new(0.0, 30.0, 0.0)).unwrap();
    let body = world.get(sphere).unwrap().body;

    // 20000 / 30 / 2 ≈ 333 up versus 40 down: it rises into the hole
    let mut consumed = Vec::new();
    for _ in 0..120 {
        consumed.extend(world.step(DT));
        if world.get(sphere).is_none() {
            break;
        }
    }

    assert_eq!(consumed, vec![ObjectKind::Sphere]);
    assert!(world.get(sphere).is_none());
    assert!(world.physics().get_body(body).is_none());
}

// ==================== Simulation ====================

#[test]
fn test_spawned_cube_settles_on_ground() {
    let mut world = World::new();
    let ray = Ray::new(Vec3::new(100.0, 100.0, 100.0), Vec3::new(-1.0, -1.0, -1.0));
    let key = world.spawn_at_ray(ObjectKind::Cube, Color::WHITE, &ray).unwrap();
    assert_eq!(world.get(key).unwrap().transform.position.y, SPAWN_HEIGHT);

    for _ in 0..120 {
        world.step(DT);
    }
    let y = world.get(key).unwrap().transform.position.y;
    assert!((y - 5.0).abs() < 0.1, "cube rests at {}", y);
}

#[test]
fn test_edited_object_holds_position_between_frames() {
    let mut world = World::new();
    let key = world.spawn(ObjectKind::Cube, Color::WHITE, Vec3::new(0.0, 5.1, 0.0)).unwrap();
    let fields = EditFields {
        position: Vec3::new(0.0, 80.0, 0.0),
        ..world.edit_fields(key).unwrap()
    };

    for _ in 0..30 {
        world.apply_edit(key, &fields);
        world.step(DT);
    }
    // One tick of gravity at most between re-applications
    let y = world.get(key).unwrap().transform.position.y;
    assert!((y - 80.0).abs() < 0.1, "edited cube drifted to {}", y);
}
