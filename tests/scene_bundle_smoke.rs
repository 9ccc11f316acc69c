use arena_physics::domain::layers::{LAYER_ALL, LAYER_ENEMY, LAYER_WALL};
use arena_physics::store::load_scene_json;
use arena_physics::{EntityStore, PhysicsError, PhysicsWorld, SceneBundle, Shape};

const ARENA: &str = r#"{
  "formatVersion": 1,
  "entities": [
    { "tag": 4, "x": 0, "y": 300, "mass": 0, "restitution": 0.5,
      "collider": { "shape": { "kind": "rect", "width": 20, "height": 600 },
                    "layer": 4, "mask": 2 } },
    { "tag": 2, "x": 5, "y": 300, "vx": -100, "restitution": 0.5,
      "collider": { "shape": { "kind": "circle", "radius": 20 },
                    "layer": 2, "mask": 6 } },
    { "tag": 1, "x": 400, "y": 100, "friction": 2.5,
      "collider": { "shape": { "kind": "circle", "radius": 8 } } }
  ]
}"#;

#[test]
fn scene_bundle_loads_and_steps() {
    let mut store = EntityStore::new();
    let ids = load_scene_json(&mut store, ARENA).expect("scene should load");
    assert_eq!(ids.len(), 3);

    let wall = store.get_by_id(ids[0]).unwrap();
    assert!(wall.is_static());
    assert_eq!((wall.collider.layer, wall.collider.mask), (LAYER_WALL, LAYER_ENEMY));

    let player = store.get_by_id(ids[2]).unwrap();
    assert_eq!(player.collider.shape, Shape::Circle { radius: 8.0 });
    assert_eq!(player.collider.layer, LAYER_ALL);
    assert_eq!(player.friction, 2.5);

    let mut world = PhysicsWorld::new();
    world.init(800.0, 600.0, 64.0).unwrap();
    world.update(&mut store, 1.0 / 60.0);

    let ball = store.get_by_id(ids[1]).unwrap();
    assert!(ball.velocity.x > 0.0);
    assert!(ball.aabb().min.x >= 10.0 - 1e-3);
}

#[test]
fn invalid_bundles_are_rejected() {
    let negative_mass = r#"{"entities":[{"mass":-1}]}"#;
    assert!(matches!(SceneBundle::from_json(negative_mass), Err(PhysicsError::InvalidScene(_))));

    let unknown_shape = r#"{"entities":[{"collider":{"shape":{"kind":"triangle"}}}]}"#;
    assert!(matches!(SceneBundle::from_json(unknown_shape), Err(PhysicsError::Json(_))));
}

#[test]
fn full_store_stops_loading() {
    let mut store = EntityStore::with_capacity(2);
    let err = load_scene_json(&mut store, ARENA).unwrap_err();
    assert!(matches!(err, PhysicsError::EntityLimitReached { capacity: 2 }));
    assert_eq!(store.active_count(), 2);
}
