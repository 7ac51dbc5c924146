//! State shared by every light variant

use bitflags::bitflags;

use crate::foundation::math::{utils, Vec3};

/// Types of lights supported by the lighting system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightType {
    /// Directional light (like sunlight) with parallel rays
    Directional,
    /// Point light that radiates in all directions from a position
    Point,
    /// Spot light that creates a cone of light from a position
    Spot,
}

bitflags! {
    /// Light group a light belongs to.
    ///
    /// Meshes and cameras carry a mask of these flags; a light only affects
    /// what its flag intersects.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LightFlag: u32 {
        /// Group 0, the default
        const LIGHT0 = 1;
        /// Group 1
        const LIGHT1 = 1 << 1;
        /// Group 2
        const LIGHT2 = 1 << 2;
        /// Group 3
        const LIGHT3 = 1 << 3;
        /// Group 4
        const LIGHT4 = 1 << 4;
        /// Group 5
        const LIGHT5 = 1 << 5;
        /// Group 6
        const LIGHT6 = 1 << 6;
        /// Group 7
        const LIGHT7 = 1 << 7;
        /// Group 8
        const LIGHT8 = 1 << 8;
        /// Group 9
        const LIGHT9 = 1 << 9;
        /// Group 10
        const LIGHT10 = 1 << 10;
        /// Group 11
        const LIGHT11 = 1 << 11;
        /// Group 12
        const LIGHT12 = 1 << 12;
        /// Group 13
        const LIGHT13 = 1 << 13;
        /// Group 14
        const LIGHT14 = 1 << 14;
        /// Group 15
        const LIGHT15 = 1 << 15;
    }
}

impl Default for LightFlag {
    fn default() -> Self {
        Self::LIGHT0
    }
}

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color3B {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Color3B {
    /// Opaque white
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Black
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to the 0.0..=1.0 range the renderer expects
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl Default for Color3B {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Light errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LightError {
    /// Intensity below zero
    #[error("Light intensity must be non-negative, got {0}")]
    NegativeIntensity(f32),
}

/// Intensity, enable state, group flag and colour common to all lights
#[derive(Debug, Clone, PartialEq)]
pub struct BaseLight3D {
    intensity: f32,
    enabled: bool,
    light_flag: LightFlag,
    color: Color3B,
}

impl Default for BaseLight3D {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            enabled: true,
            light_flag: LightFlag::LIGHT0,
            color: Color3B::WHITE,
        }
    }
}

impl BaseLight3D {
    /// Create with default state and the given colour
    pub fn with_color(color: Color3B) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the intensity.
    ///
    /// # Panics
    /// In debug builds, if `intensity` is negative.
    pub fn set_intensity(&mut self, intensity: f32) {
        debug_assert!(intensity >= 0.0, "light intensity must be non-negative, got {intensity}");
        self.intensity = intensity;
    }

    /// Set the intensity, rejecting negative values in every build
    pub fn try_set_intensity(&mut self, intensity: f32) -> Result<(), LightError> {
        if !(intensity >= 0.0) {
            return Err(LightError::NegativeIntensity(intensity));
        }
        self.intensity = intensity;
        Ok(())
    }

    /// Apply a configured default intensity, keeping the current one if the
    /// configured value is negative or NaN.
    pub(crate) fn apply_default_intensity(&mut self, intensity: f32) {
        if let Err(err) = self.try_set_intensity(intensity) {
            log::warn!("Ignoring configured default intensity: {}", err);
        }
    }

    /// Current intensity
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Enable or disable the light
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the light contributes to rendering
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the light group
    pub fn set_light_flag(&mut self, flag: LightFlag) {
        self.light_flag = flag;
    }

    /// Light group
    pub fn light_flag(&self) -> LightFlag {
        self.light_flag
    }

    /// Set the colour
    pub fn set_color(&mut self, color: Color3B) {
        self.color = color;
    }

    /// Colour
    pub fn color(&self) -> Color3B {
        self.color
    }
}

/// Yaw/pitch rotation (degrees, no roll) that points a node's -Z axis along
/// `direction`.
pub fn rotation_from_direction(direction: Vec3) -> Vec3 {
    let proj_len = (direction.x * direction.x + direction.z * direction.z).sqrt();
    let rot_y = utils::rad_to_deg((-direction.x).atan2(-direction.z));
    let rot_x = -utils::rad_to_deg((-direction.y).atan2(proj_len));
    Vec3::new(rot_x, rot_y, 0.0)
}
