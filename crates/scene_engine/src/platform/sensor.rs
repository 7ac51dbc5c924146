//! Sensor backend implementations
//!
//! Platform-independent switch for turning a hardware sensor on and off.
//! Samples themselves flow the other way, from the platform callback into
//! [`Accelerometer::update`](super::Accelerometer::update).

/// Sensor backend trait for platform abstraction
///
/// The platform bridge reports no errors for enable/disable, so neither
/// does the trait.
pub trait SensorBackend: Send {
    /// Start delivering samples
    fn enable(&mut self);

    /// Stop delivering samples
    fn disable(&mut self);

    /// Whether the sensor was last enabled
    fn is_enabled(&self) -> bool;
}

/// Backend for platforms without a sensor bridge: records the state and logs
#[derive(Debug, Default)]
pub struct LoggingSensorBackend {
    enabled: bool,
}

impl LoggingSensorBackend {
    /// Create a disabled backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl SensorBackend for LoggingSensorBackend {
    fn enable(&mut self) {
        self.enabled = true;
        log::debug!("Accelerometer enabled (no platform sensor bridge)");
    }

    fn disable(&mut self) {
        self.enabled = false;
        log::debug!("Accelerometer disabled (no platform sensor bridge)");
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Android backend forwarding to the host application's JNI glue.
///
/// The glue library must export `enableAccelerometerJNI` and
/// `disableAccelerometerJNI`, and call
/// [`scene_engine_accelerometer_update`](android::scene_engine_accelerometer_update)
/// from its sensor listener.
#[cfg(feature = "android-jni")]
pub mod android {
    use super::SensorBackend;
    use crate::platform::accelerometer::shared_accelerometer;

    #[allow(unsafe_code, non_snake_case)]
    extern "C" {
        fn enableAccelerometerJNI();
        fn disableAccelerometerJNI();
    }

    /// Backend calling into the JNI sensor bridge
    #[derive(Debug, Default)]
    pub struct JniSensorBackend {
        enabled: bool,
    }

    #[allow(unsafe_code)]
    impl SensorBackend for JniSensorBackend {
        fn enable(&mut self) {
            // SAFETY: the host glue exports this symbol; it takes no arguments.
            unsafe {
                enableAccelerometerJNI();
            }
            self.enabled = true;
            log::debug!("Accelerometer enabled via JNI");
        }

        fn disable(&mut self) {
            // SAFETY: as above.
            unsafe {
                disableAccelerometerJNI();
            }
            self.enabled = false;
            log::debug!("Accelerometer disabled via JNI");
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    /// Native sensor callback: raw m/s² per axis and the sensor timestamp
    #[allow(unsafe_code)]
    #[no_mangle]
    pub extern "C" fn scene_engine_accelerometer_update(x: f32, y: f32, z: f32, timestamp: i64) {
        shared_accelerometer().update(x, y, z, timestamp);
    }
}

/// Create the default sensor backend for the platform
pub fn create_backend() -> Box<dyn SensorBackend> {
    #[cfg(feature = "android-jni")]
    let backend = android::JniSensorBackend::default();
    #[cfg(not(feature = "android-jni"))]
    let backend = LoggingSensorBackend::new();
    Box::new(backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_backend_tracks_state() {
        let mut backend = LoggingSensorBackend::new();
        assert!(!backend.is_enabled());

        backend.enable();
        assert!(backend.is_enabled());

        backend.disable();
        assert!(!backend.is_enabled());
    }

    #[test]
    fn test_default_backend_starts_disabled() {
        assert!(!create_backend().is_enabled());
    }
}
