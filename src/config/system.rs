//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::motor::MotorConfig;
use super::tread::TreadConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Named motor channel configurations.
    pub motors: FnvIndexMap<String<32>, MotorConfig, 8>,

    /// Named tread pairs.
    #[serde(default)]
    pub treads: FnvIndexMap<String<32>, TreadConfig, 4>,
}

impl SystemConfig {
    /// Get a motor configuration by name.
    pub fn motor(&self, name: &str) -> Option<&MotorConfig> {
        self.motors
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a tread configuration by name.
    pub fn tread(&self, name: &str) -> Option<&TreadConfig> {
        self.treads
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Find the motor driving an axis.
    pub fn motor_for_axis(&self, axis: u32) -> Option<(&str, &MotorConfig)> {
        self.motors
            .iter()
            .find(|(_, v)| v.axis == axis)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// List all motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.keys().map(|s| s.as_str())
    }

    /// List all tread names.
    pub fn tread_names(&self) -> impl Iterator<Item = &str> {
        self.treads.keys().map(|s| s.as_str())
    }
}
