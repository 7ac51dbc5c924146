//! Accelerometer input
//!
//! Raw samples arrive in m/s² from the platform sensor callback. They are
//! converted to gravity units with the sign flipped, so a device lying flat
//! and face up reports roughly `z = -1.0`, and handed to the registered
//! delegate.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::core::{AccelerometerConfig, GRAVITY_EARTH};
use super::sensor::{create_backend, SensorBackend};

/// Acceleration in gravity units plus the sensor timestamp
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Acceleration {
    /// X axis
    pub x: f64,
    /// Y axis
    pub y: f64,
    /// Z axis
    pub z: f64,
    /// Sensor timestamp as reported by the platform
    pub timestamp: f64,
}

/// Receiver of accelerometer samples
pub trait AccelerometerDelegate: Send {
    /// Called once per sample
    fn did_accelerate(&mut self, acceleration: &Acceleration);
}

impl<F> AccelerometerDelegate for F
where
    F: FnMut(&Acceleration) + Send,
{
    fn did_accelerate(&mut self, acceleration: &Acceleration) {
        self(acceleration);
    }
}

/// Sensor wrapper holding one delegate and the latest sample.
///
/// Each update overwrites the stored sample; no history is kept.
pub struct Accelerometer {
    backend: Box<dyn SensorBackend>,
    delegate: Option<Box<dyn AccelerometerDelegate>>,
    acceleration: Acceleration,
    standard_gravity: f32,
}

impl std::fmt::Debug for Accelerometer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accelerometer")
            .field("enabled", &self.backend.is_enabled())
            .field("has_delegate", &self.delegate.is_some())
            .field("acceleration", &self.acceleration)
            .field("standard_gravity", &self.standard_gravity)
            .finish()
    }
}

impl Accelerometer {
    /// Create with the given backend and standard gravity
    pub fn new(backend: Box<dyn SensorBackend>) -> Self {
        Self {
            backend,
            delegate: None,
            acceleration: Acceleration::default(),
            standard_gravity: GRAVITY_EARTH,
        }
    }

    /// Apply configuration
    pub fn configure(&mut self, config: &AccelerometerConfig) {
        self.standard_gravity = config.standard_gravity;
    }

    /// Replace the sensor backend, carrying over the enabled state
    pub fn set_backend(&mut self, mut backend: Box<dyn SensorBackend>) {
        if self.backend.is_enabled() {
            self.backend.disable();
            backend.enable();
        }
        self.backend = backend;
    }

    /// Register the delegate and switch the sensor on.
    ///
    /// Only one delegate is held; a previous one is replaced and returned.
    pub fn add_delegate(
        &mut self,
        delegate: Box<dyn AccelerometerDelegate>,
    ) -> Option<Box<dyn AccelerometerDelegate>> {
        let previous = self.delegate.replace(delegate);
        self.backend.enable();
        previous
    }

    /// Switch the sensor off and release the delegate, whichever it is
    pub fn remove_delegate(&mut self) -> Option<Box<dyn AccelerometerDelegate>> {
        self.backend.disable();
        self.delegate.take()
    }

    /// Whether a delegate is registered
    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Whether the sensor is switched on
    pub fn is_enabled(&self) -> bool {
        self.backend.is_enabled()
    }

    /// Latest converted sample
    pub fn acceleration(&self) -> Acceleration {
        self.acceleration
    }

    /// Convert a raw sample (m/s² per axis) and notify the delegate
    #[allow(clippy::cast_precision_loss)]
    pub fn update(&mut self, x: f32, y: f32, z: f32, sensor_timestamp: i64) {
        let gravity = f64::from(self.standard_gravity);
        self.acceleration = Acceleration {
            x: -(f64::from(x) / gravity),
            y: -(f64::from(y) / gravity),
            z: -(f64::from(z) / gravity),
            timestamp: sensor_timestamp as f64,
        };

        match self.delegate.as_mut() {
            Some(delegate) => delegate.did_accelerate(&self.acceleration),
            None => log::trace!("Accelerometer sample at {} with no delegate", sensor_timestamp),
        }
    }
}

static SHARED_ACCELEROMETER: Lazy<Mutex<Accelerometer>> = Lazy::new(|| {
    log::debug!("Creating shared accelerometer");
    Mutex::new(Accelerometer::new(create_backend()))
});

/// Process-wide accelerometer, created on first use.
///
/// The guard must not be held across a call that locks it again; delegates
/// run while it is held.
pub fn shared_accelerometer() -> MutexGuard<'static, Accelerometer> {
    SHARED_ACCELEROMETER.lock().unwrap_or_else(PoisonError::into_inner)
}
