//! Directional light

use std::ops::{Deref, DerefMut};

use crate::foundation::math::Vec3;
use crate::scene::{Node, NodeId, NodeKind, Scene};
use super::base::{rotation_from_direction, BaseLight3D, Color3B};
use super::Light;

/// Light with parallel rays, like sunlight.
///
/// Carries no state beyond [`BaseLight3D`]; its direction is the owning
/// node's forward axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectionLight3D {
    base: BaseLight3D,
}

impl DirectionLight3D {
    /// Create with the given colour
    pub fn new(color: Color3B) -> Self {
        Self {
            base: BaseLight3D::with_color(color),
        }
    }

    /// Create a detached light node pointing along `direction`
    pub fn create(scene: &mut Scene, direction: Vec3, color: Color3B) -> NodeId {
        let mut light = Self::new(color);
        light.apply_default_intensity(scene.config().default_intensity);

        let kind = NodeKind::Light(Light::Directional(light));
        let mut node = Node::with_kind("DirectionLight3D", kind);
        node.set_rotation3d(rotation_from_direction(direction));
        scene.insert_node(node)
    }
}

impl Deref for DirectionLight3D {
    type Target = BaseLight3D;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for DirectionLight3D {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}
