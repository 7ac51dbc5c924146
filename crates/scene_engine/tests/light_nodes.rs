//! Light node behaviour through the public API

use approx::assert_relative_eq;
use scene_engine::prelude::*;

const DIRECTIONS: [(f32, f32, f32); 8] = [
    (-0.7, -1.0, 0.3),
    (0.0, -1.0, 0.0),
    (0.0, 1.0, 0.0),
    (1.0, 0.0, 0.0),
    (0.0, 0.0, 1.0),
    (0.0, 0.0, -1.0),
    (-1.0, -1.0, -1.0),
    (3.0, 0.5, -2.0),
];

#[test]
fn test_direction_round_trip() {
    let mut scene = Scene::new();
    let light = DirectionLight3D::create(&mut scene, Vec3::new(0.0, 0.0, -1.0), Color3B::WHITE);

    for (x, y, z) in DIRECTIONS {
        let direction = Vec3::new(x, y, z);
        scene.set_rotation_from_direction(light, direction).unwrap();

        let recovered = scene.direction(light).unwrap();
        assert_relative_eq!(recovered, direction.normalize(), epsilon = 1e-5);
        assert_relative_eq!(scene.node(light).unwrap().rotation3d().z, 0.0);
    }
}

#[test]
fn test_world_direction_follows_parent_rotation() {
    let mut scene = Scene::new();
    let root = scene.root();
    let rig = scene.create_node("rig");
    scene.node_mut(rig).unwrap().set_rotation3d(Vec3::new(0.0, 90.0, 0.0));
    let spot = SpotLight3D::create(
        &mut scene,
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::zeros(),
        Color3B::WHITE,
        0.2,
        0.4,
        10.0,
    );
    scene.add_child(rig, spot).unwrap();
    scene.add_child(root, rig).unwrap();

    assert_relative_eq!(scene.direction(spot).unwrap(), Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    assert_relative_eq!(
        scene.direction_in_world(spot).unwrap(),
        Vec3::new(-1.0, 0.0, 0.0),
        epsilon = 1e-6
    );
}

#[test]
fn test_reattaching_registers_once() {
    let mut scene = Scene::new();
    let root = scene.root();
    let light = PointLight3D::create(&mut scene, Vec3::new(0.0, 2.0, 0.0), Color3B::WHITE, 5.0);

    scene.add_child(root, light).unwrap();
    assert_eq!(scene.lights(), &[light]);

    scene.remove_from_parent(light).unwrap();
    assert!(scene.lights().is_empty());

    // Detaching again is a no-op
    scene.remove_from_parent(light).unwrap();
    assert!(scene.lights().is_empty());

    scene.add_child(root, light).unwrap();
    assert_eq!(scene.lights(), &[light]);
}

#[test]
fn test_light_added_under_running_group_registers() {
    let mut scene = Scene::new();
    let root = scene.root();
    let group = scene.create_node("group");
    scene.add_child(root, group).unwrap();

    let light = PointLight3D::create(&mut scene, Vec3::zeros(), Color3B::WHITE, 1.0);
    scene.add_child(group, light).unwrap();
    assert_eq!(scene.lights(), &[light]);
    assert!(scene.node(light).unwrap().is_running());
}

#[test]
fn test_exit_removes_only_that_light() {
    let mut scene = Scene::new();
    let root = scene.root();
    let first = PointLight3D::create(&mut scene, Vec3::zeros(), Color3B::WHITE, 1.0);
    let second = DirectionLight3D::create(&mut scene, Vec3::new(0.0, -1.0, 0.0), Color3B::WHITE);
    let third = PointLight3D::create(&mut scene, Vec3::zeros(), Color3B::WHITE, 1.0);
    for id in [first, second, third] {
        scene.add_child(root, id).unwrap();
    }

    scene.remove_from_parent(second).unwrap();
    assert_eq!(scene.lights(), &[first, third]);

    scene.add_child(root, second).unwrap();
    assert_eq!(scene.lights(), &[first, third, second]);
}

#[test]
fn test_detached_light_is_not_registered() {
    let mut scene = Scene::new();
    let light = DirectionLight3D::create(&mut scene, Vec3::new(1.0, -1.0, 0.0), Color3B::WHITE);
    assert!(!scene.contains_light(light));
    assert!(!scene.node(light).unwrap().is_running());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "non-negative")]
fn test_negative_intensity_fails_fast() {
    let mut scene = Scene::new();
    let light = PointLight3D::create(&mut scene, Vec3::zeros(), Color3B::WHITE, 1.0);
    scene.light_mut(light).unwrap().base_mut().set_intensity(-1.0);
}

#[test]
fn test_acceleration_conversion() {
    let backend = scene_engine::platform::LoggingSensorBackend::new();
    let mut accelerometer = Accelerometer::new(Box::new(backend));
    accelerometer.update(9.80665, 0.0, 0.0, 0);

    let sample = accelerometer.acceleration();
    assert_eq!((sample.x, sample.y, sample.z), (-1.0, 0.0, 0.0));
}
