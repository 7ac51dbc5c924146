//! Light nodes
//!
//! Lights are node payloads: a light's position and direction come from the
//! node that carries it, never from the light itself. Setting a direction
//! rotates the node ([`Scene::set_rotation_from_direction`]); reading it back
//! takes the node's forward axis ([`Scene::direction`],
//! [`Scene::direction_in_world`]).
//!
//! While a light node is part of the running scene it is listed in
//! [`Scene::lights`] for the renderer.
//!
//! [`Scene::set_rotation_from_direction`]: crate::scene::Scene::set_rotation_from_direction
//! [`Scene::direction`]: crate::scene::Scene::direction
//! [`Scene::direction_in_world`]: crate::scene::Scene::direction_in_world
//! [`Scene::lights`]: crate::scene::Scene::lights

mod base;
mod directional;
pub mod legacy;
mod point;
mod spot;

pub use base::{rotation_from_direction, BaseLight3D, Color3B, LightError, LightFlag, LightType};
pub use directional::DirectionLight3D;
pub use legacy::Light3D;
pub use point::PointLight3D;
pub use spot::SpotLight3D;

/// Any of the registered light variants
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Parallel rays along the node's forward axis
    Directional(DirectionLight3D),
    /// Omnidirectional from the node's position
    Point(PointLight3D),
    /// Cone from the node's position along its forward axis
    Spot(SpotLight3D),
}

impl Light {
    /// Variant tag
    pub fn light_type(&self) -> LightType {
        match self {
            Self::Directional(_) => LightType::Directional,
            Self::Point(_) => LightType::Point,
            Self::Spot(_) => LightType::Spot,
        }
    }

    /// Shared light state
    pub fn base(&self) -> &BaseLight3D {
        match self {
            Self::Directional(light) => &**light,
            Self::Point(light) => &**light,
            Self::Spot(light) => &**light,
        }
    }

    /// Mutable shared light state
    pub fn base_mut(&mut self) -> &mut BaseLight3D {
        match self {
            Self::Directional(light) => &mut **light,
            Self::Point(light) => &mut **light,
            Self::Spot(light) => &mut **light,
        }
    }

    /// Intensity
    pub fn intensity(&self) -> f32 {
        self.base().intensity()
    }

    /// Whether the light is enabled
    pub fn is_enabled(&self) -> bool {
        self.base().is_enabled()
    }

    /// Light group
    pub fn light_flag(&self) -> LightFlag {
        self.base().light_flag()
    }

    /// Attenuation range, for point and spot lights
    pub fn range(&self) -> Option<f32> {
        match self {
            Self::Directional(_) => None,
            Self::Point(light) => Some(light.range()),
            Self::Spot(light) => Some(light.range()),
        }
    }

    /// Directional payload
    pub fn as_directional(&self) -> Option<&DirectionLight3D> {
        match self {
            Self::Directional(light) => Some(light),
            _ => None,
        }
    }

    /// Point payload
    pub fn as_point(&self) -> Option<&PointLight3D> {
        match self {
            Self::Point(light) => Some(light),
            _ => None,
        }
    }

    /// Mutable point payload
    pub fn as_point_mut(&mut self) -> Option<&mut PointLight3D> {
        match self {
            Self::Point(light) => Some(light),
            _ => None,
        }
    }

    /// Spot payload
    pub fn as_spot(&self) -> Option<&SpotLight3D> {
        match self {
            Self::Spot(light) => Some(light),
            _ => None,
        }
    }

    /// Mutable spot payload
    pub fn as_spot_mut(&mut self) -> Option<&mut SpotLight3D> {
        match self {
            Self::Spot(light) => Some(light),
            _ => None,
        }
    }
}
