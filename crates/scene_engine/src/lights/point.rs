//! Point light

use std::ops::{Deref, DerefMut};

use crate::foundation::math::Vec3;
use crate::scene::{Node, NodeId, NodeKind, Scene};
use super::base::{BaseLight3D, Color3B};
use super::Light;

/// Light radiating in all directions from the owning node's position
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointLight3D {
    base: BaseLight3D,
    range: f32,
}

impl PointLight3D {
    /// Create with the given colour and range
    pub fn new(color: Color3B, range: f32) -> Self {
        Self {
            base: BaseLight3D::with_color(color),
            range,
        }
    }

    /// Create a detached light node at `position`
    pub fn create(scene: &mut Scene, position: Vec3, color: Color3B, range: f32) -> NodeId {
        let mut light = Self::new(color, range);
        light.apply_default_intensity(scene.config().default_intensity);

        let mut node = Node::with_kind("PointLight3D", NodeKind::Light(Light::Point(light)));
        node.set_position(position);
        scene.insert_node(node)
    }

    /// Set the attenuation range
    pub fn set_range(&mut self, range: f32) {
        self.range = range;
    }

    /// Attenuation range
    pub fn range(&self) -> f32 {
        self.range
    }
}

impl Deref for PointLight3D {
    type Target = BaseLight3D;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for PointLight3D {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}
