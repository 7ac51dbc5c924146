//! Unified light node kept for older content
//!
//! [`Light3D`] predates the per-variant light types and tags its variant with
//! a [`LightType`] instead. It is never registered in a scene's light list:
//! entering or leaving a scene has no effect on it, so the renderer does not
//! see these lights. New code should use the types in [`crate::lights`].

use crate::foundation::math::Vec3;
use crate::lights::base::{rotation_from_direction, Color3B, LightType};
use crate::scene::{Node, NodeId, NodeKind, Scene};

/// Light node with a runtime type tag
#[derive(Debug, Clone, PartialEq)]
pub struct Light3D {
    light_type: LightType,
    color: Color3B,
    is_enabled: bool,
    range: f32,
    inner_angle: f32,
    outer_angle: f32,
}

impl Default for Light3D {
    fn default() -> Self {
        Self {
            light_type: LightType::Directional,
            color: Color3B::WHITE,
            is_enabled: true,
            range: 0.0,
            inner_angle: 0.0,
            outer_angle: 0.0,
        }
    }
}

impl Light3D {
    /// Create a detached directional light node pointing along `direction`
    pub fn create_directional_light(scene: &mut Scene, direction: Vec3, color: Color3B) -> NodeId {
        let light = Self {
            light_type: LightType::Directional,
            color,
            ..Default::default()
        };
        let mut node = Node::with_kind("Light3D", NodeKind::LegacyLight(light));
        node.set_rotation3d(rotation_from_direction(direction));
        scene.insert_node(node)
    }

    /// Create a detached point light node at `position`
    pub fn create_point_light(
        scene: &mut Scene,
        position: Vec3,
        color: Color3B,
        range: f32,
    ) -> NodeId {
        let light = Self {
            light_type: LightType::Point,
            color,
            range,
            ..Default::default()
        };
        let mut node = Node::with_kind("Light3D", NodeKind::LegacyLight(light));
        node.set_position(position);
        scene.insert_node(node)
    }

    /// Create a detached spot light node
    pub fn create_spot_light(
        scene: &mut Scene,
        direction: Vec3,
        position: Vec3,
        color: Color3B,
        inner_angle: f32,
        outer_angle: f32,
        range: f32,
    ) -> NodeId {
        let light = Self {
            light_type: LightType::Spot,
            color,
            range,
            inner_angle,
            outer_angle,
            ..Default::default()
        };
        let mut node = Node::with_kind("Light3D", NodeKind::LegacyLight(light));
        node.set_rotation3d(rotation_from_direction(direction));
        node.set_position(position);
        scene.insert_node(node)
    }

    /// Retag the light
    pub fn set_light_type(&mut self, light_type: LightType) {
        self.light_type = light_type;
    }

    /// Light variant tag
    pub fn light_type(&self) -> LightType {
        self.light_type
    }

    /// Set the colour
    pub fn set_color(&mut self, color: Color3B) {
        self.color = color;
    }

    /// Colour
    pub fn color(&self) -> Color3B {
        self.color
    }

    /// Set the range
    pub fn set_range(&mut self, range: f32) {
        self.range = range;
    }

    /// Range (point and spot)
    pub fn range(&self) -> f32 {
        self.range
    }

    /// Set the inner cone angle in radians
    pub fn set_inner_angle(&mut self, angle: f32) {
        self.inner_angle = angle;
    }

    /// Inner cone angle in radians
    pub fn inner_angle(&self) -> f32 {
        self.inner_angle
    }

    /// Set the outer cone angle in radians
    pub fn set_outer_angle(&mut self, angle: f32) {
        self.outer_angle = angle;
    }

    /// Outer cone angle in radians
    pub fn outer_angle(&self) -> f32 {
        self.outer_angle
    }

    /// Enable or disable the light
    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    /// Whether the light is enabled
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factories_tag_the_variant() {
        let mut scene = Scene::new();
        let down = Vec3::new(0.0, -1.0, 0.0);
        let dir = Light3D::create_directional_light(&mut scene, down, Color3B::WHITE);
        let position = Vec3::new(1.0, 2.0, 3.0);
        let point = Light3D::create_point_light(&mut scene, position, Color3B::BLACK, 7.0);
        let spot = Light3D::create_spot_light(
            &mut scene,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::zeros(),
            Color3B::WHITE,
            0.1,
            0.3,
            12.0,
        );

        assert_eq!(scene.legacy_light(dir).unwrap().light_type(), LightType::Directional);

        let point_light = scene.legacy_light(point).unwrap();
        assert_eq!(point_light.light_type(), LightType::Point);
        assert_relative_eq!(point_light.range(), 7.0);
        assert_relative_eq!(scene.node(point).unwrap().position(), Vec3::new(1.0, 2.0, 3.0));

        let spot_light = scene.legacy_light(spot).unwrap();
        assert_eq!(spot_light.light_type(), LightType::Spot);
        assert_relative_eq!(spot_light.inner_angle(), 0.1);
        assert_relative_eq!(spot_light.outer_angle(), 0.3);
    }

    #[test]
    fn test_setters_round_trip() {
        let mut light = Light3D::default();
        light.set_light_type(LightType::Spot);
        light.set_range(4.0);
        light.set_inner_angle(0.25);
        light.set_outer_angle(0.5);
        light.set_enabled(false);

        assert_eq!(light.light_type(), LightType::Spot);
        assert_relative_eq!(light.range(), 4.0);
        assert_relative_eq!(light.inner_angle(), 0.25);
        assert_relative_eq!(light.outer_angle(), 0.5);
        assert!(!light.is_enabled());
    }

    #[test]
    fn test_entering_scene_does_not_register() {
        let mut scene = Scene::new();
        let light = Light3D::create_point_light(&mut scene, Vec3::zeros(), Color3B::WHITE, 1.0);
        let root = scene.root();

        scene.add_child(root, light).unwrap();

        assert!(scene.node(light).unwrap().is_running());
        assert!(scene.lights().is_empty());
    }

    #[test]
    fn test_direction_round_trip() {
        let mut scene = Scene::new();
        let direction = Vec3::new(1.0, -1.0, 0.0);
        let light = Light3D::create_directional_light(&mut scene, direction, Color3B::WHITE);

        let direction = scene.direction(light).unwrap();
        assert_relative_eq!(direction, Vec3::new(1.0, -1.0, 0.0).normalize(), epsilon = 1e-5);
    }
}
