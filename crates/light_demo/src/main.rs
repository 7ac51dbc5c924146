//! Tilt-driven lighting demo
//!
//! Builds a small scene with a sun, a lamp and a torch, then feeds synthetic
//! accelerometer samples through the shared accelerometer. Each sample tilts
//! the sun so that it keeps shining "down" relative to the device.
//!
//! Usage: `light_demo [config.toml|config.ron]`

use std::sync::mpsc;

use log::{info, warn};
use scene_engine::foundation::logging;
use scene_engine::prelude::*;

const DEFAULT_CONFIG_PATH: &str = "light_demo.toml";
const SAMPLE_COUNT: usize = 8;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] scene_engine::core::ConfigError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

struct DemoScene {
    scene: Scene,
    sun: NodeId,
    lamp: NodeId,
    torch: NodeId,
}

impl DemoScene {
    fn build(config: &LightingConfig) -> Result<Self, SceneError> {
        let mut scene = Scene::with_config(config.clone());
        let root = scene.root();

        let sun_color = Color3B::new(255, 250, 230);
        let sun = DirectionLight3D::create(&mut scene, Vec3::new(-0.2, -1.0, -0.3), sun_color);
        let lamp_color = Color3B::new(255, 230, 180);
        let lamp = PointLight3D::create(&mut scene, Vec3::new(2.0, 3.0, 2.0), lamp_color, 10.0);

        let rig = scene.create_node("torch_rig");
        scene
            .node_mut(rig)
            .ok_or(SceneError::NodeNotFound(rig))?
            .set_position(Vec3::new(0.0, 4.0, 0.0));
        let torch = SpotLight3D::create(
            &mut scene,
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::zeros(),
            Color3B::WHITE,
            15.0_f32.to_radians(),
            30.0_f32.to_radians(),
            12.0,
        );
        if let Some(light) = scene.light_mut(torch) {
            light.base_mut().set_light_flag(LightFlag::LIGHT1);
        }

        scene.add_child(root, sun)?;
        scene.add_child(root, lamp)?;
        scene.add_child(rig, torch)?;
        scene.add_child(root, rig)?;

        Ok(Self { scene, sun, lamp, torch })
    }

    /// Point the sun along the measured gravity vector
    fn apply_tilt(&mut self, acceleration: &Acceleration) -> Result<(), SceneError> {
        #[allow(clippy::cast_possible_truncation)]
        let gravity = Vec3::new(
            acceleration.x as f32,
            acceleration.y as f32,
            acceleration.z as f32,
        );
        if gravity.norm() < f32::EPSILON {
            return Ok(());
        }
        self.scene.set_rotation_from_direction(self.sun, -gravity)
    }

    fn report(&self) -> Result<(), SceneError> {
        let sun_direction = self.scene.direction_in_world(self.sun)?;
        let torch_direction = self.scene.direction_in_world(self.torch)?;
        let bound = self.scene.active_lights(LightFlag::LIGHT0 | LightFlag::LIGHT1);

        info!(
            "sun -> ({:.2}, {:.2}, {:.2}), torch -> ({:.2}, {:.2}, {:.2}), {} of {} lights bound",
            sun_direction.x, sun_direction.y, sun_direction.z,
            torch_direction.x, torch_direction.y, torch_direction.z,
            bound.len(),
            self.scene.lights().len(),
        );
        Ok(())
    }
}

/// Fake device slowly rolling around its Y axis, in m/s²
fn synthetic_sample(step: usize) -> (f32, f32, f32) {
    #[allow(clippy::cast_precision_loss)]
    let angle = step as f32 * 0.25;
    (angle.sin() * GRAVITY, 0.0, -angle.cos() * GRAVITY)
}

const GRAVITY: f32 = scene_engine::core::GRAVITY_EARTH;

fn run() -> Result<(), DemoError> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = EngineConfig::load_or_default(&config_path)?;
    config.validate().map_err(DemoError::InvalidConfig)?;

    logging::init_with_level(&config.log_level);
    info!("Starting light demo (config: {})", config_path);

    let mut demo = DemoScene::build(&config.lighting)?;
    demo.report()?;

    let (sender, receiver) = mpsc::channel();
    {
        let mut accelerometer = shared_accelerometer();
        accelerometer.configure(&config.accelerometer);
        accelerometer.add_delegate(Box::new(move |acceleration: &Acceleration| {
            if sender.send(*acceleration).is_err() {
                warn!("Demo stopped listening for accelerometer samples");
            }
        }));
    }

    for step in 0..SAMPLE_COUNT {
        let (x, y, z) = synthetic_sample(step);
        #[allow(clippy::cast_possible_wrap)]
        let timestamp = (step * 16_000_000) as i64;
        shared_accelerometer().update(x, y, z, timestamp);

        for acceleration in receiver.try_iter() {
            demo.apply_tilt(&acceleration)?;
        }
        demo.report()?;
    }

    shared_accelerometer().remove_delegate();

    // Switching the lamp off and detaching the torch changes what gets bound
    if let Some(lamp) = demo.scene.light_mut(demo.lamp) {
        lamp.base_mut().set_enabled(false);
    }
    demo.scene.remove_from_parent(demo.torch)?;
    demo.report()?;

    info!("Light demo finished");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("light_demo failed: {e}");
        std::process::exit(1);
    }
}
