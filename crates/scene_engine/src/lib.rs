//! # Scene Engine
//!
//! Scene-graph light nodes and platform accelerometer input for a 3D game
//! engine.
//!
//! ## Features
//!
//! - **Light Nodes**: Directional, point and spot lights that register with
//!   the scene while they are part of it
//! - **Scene Graph**: Arena-backed node hierarchy with local and world transforms
//! - **Accelerometer**: Process-wide sensor wrapper delivering samples in
//!   gravity units to a delegate
//! - **Configuration**: TOML/RON engine configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//!
//! let mut scene = Scene::new();
//! let sun = DirectionLight3D::create(&mut scene, Vec3::new(-0.3, -1.0, -0.5), Color3B::WHITE);
//! let root = scene.root();
//! scene.add_child(root, sun)?;
//!
//! assert_eq!(scene.lights(), &[sun]);
//! let direction = scene.direction_in_world(sun)?;
//! assert!(direction.y < 0.0);
//! # Ok::<(), scene_engine::scene::SceneError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod lights;
pub mod platform;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{AccelerometerConfig, Config, EngineConfig, LightingConfig},
        foundation::math::{Mat4, Transform, Vec3},
        lights::{
            BaseLight3D, Color3B, DirectionLight3D, Light, Light3D, LightFlag, LightType,
            PointLight3D, SpotLight3D,
        },
        platform::{shared_accelerometer, Acceleration, Accelerometer, AccelerometerDelegate},
        scene::{Node, NodeId, NodeKind, Scene, SceneError},
    };
}
