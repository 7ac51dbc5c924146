//! Platform input
//!
//! Device sensors reach the engine through a [`SensorBackend`]; the
//! [`Accelerometer`] converts raw samples and forwards them to a delegate.

pub mod accelerometer;
pub mod sensor;

pub use accelerometer::{shared_accelerometer, Acceleration, Accelerometer, AccelerometerDelegate};
pub use sensor::{create_backend, LoggingSensorBackend, SensorBackend};
