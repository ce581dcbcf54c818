//! Tread pair configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// A skid-steer pair: two configured motors driven together.
#[derive(Debug, Clone, Deserialize)]
pub struct TreadConfig {
    /// Motor name for the left side.
    pub left: String<32>,

    /// Motor name for the right side.
    pub right: String<32>,
}

impl TreadConfig {
    /// Whether both sides reference the same motor.
    pub fn is_degenerate(&self) -> bool {
        self.left == self.right
    }
}
