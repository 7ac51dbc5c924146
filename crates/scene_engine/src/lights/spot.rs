//! Spot light

use std::ops::{Deref, DerefMut};

use crate::foundation::math::Vec3;
use crate::scene::{Node, NodeId, NodeKind, Scene};
use super::base::{rotation_from_direction, BaseLight3D, Color3B};
use super::Light;

/// Cone of light from the owning node's position along its forward axis.
///
/// Cone angles are in radians. Their cosines are cached because the
/// renderer compares against them per fragment.
///
/// Content ported from engines where setting the outer angle overwrote the
/// inner cosine should expect [`SpotLight3D::cos_outer_angle`] to track the
/// outer angle here.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight3D {
    base: BaseLight3D,
    range: f32,
    inner_angle: f32,
    outer_angle: f32,
    cos_inner_angle: f32,
    cos_outer_angle: f32,
}

impl Default for SpotLight3D {
    fn default() -> Self {
        Self::new(Color3B::WHITE, 0.0, 0.0, 0.0)
    }
}

impl SpotLight3D {
    /// Create with the given colour, cone angles and range
    pub fn new(color: Color3B, inner_angle: f32, outer_angle: f32, range: f32) -> Self {
        let mut light = Self {
            base: BaseLight3D::with_color(color),
            range,
            inner_angle: 0.0,
            outer_angle: 0.0,
            cos_inner_angle: 1.0,
            cos_outer_angle: 1.0,
        };
        light.set_inner_angle(inner_angle);
        light.set_outer_angle(outer_angle);
        light
    }

    /// Create a detached light node at `position` pointing along `direction`
    pub fn create(
        scene: &mut Scene,
        direction: Vec3,
        position: Vec3,
        color: Color3B,
        inner_angle: f32,
        outer_angle: f32,
        range: f32,
    ) -> NodeId {
        let mut light = Self::new(color, inner_angle, outer_angle, range);
        light.apply_default_intensity(scene.config().default_intensity);

        let mut node = Node::with_kind("SpotLight3D", NodeKind::Light(Light::Spot(light)));
        node.set_rotation3d(rotation_from_direction(direction));
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

    /// Set the inner cone angle and its cosine
    pub fn set_inner_angle(&mut self, angle: f32) {
        self.inner_angle = angle;
        self.cos_inner_angle = angle.cos();
    }

    /// Inner cone angle in radians
    pub fn inner_angle(&self) -> f32 {
        self.inner_angle
    }

    /// Cosine of the inner cone angle
    pub fn cos_inner_angle(&self) -> f32 {
        self.cos_inner_angle
    }

    /// Set the outer cone angle and its cosine
    pub fn set_outer_angle(&mut self, angle: f32) {
        self.outer_angle = angle;
        self.cos_outer_angle = angle.cos();
    }

    /// Outer cone angle in radians
    pub fn outer_angle(&self) -> f32 {
        self.outer_angle
    }

    /// Cosine of the outer cone angle
    pub fn cos_outer_angle(&self) -> f32 {
        self.cos_outer_angle
    }
}

impl Deref for SpotLight3D {
    type Target = BaseLight3D;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for SpotLight3D {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}
