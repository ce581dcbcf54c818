//! Motor state type-state markers.
//!
//! Uses Rust's type system so that a channel can only be driven after its
//! outputs have been put in a known state.

/// Pins are owned but have not been driven yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uninitialized;

/// Outputs are configured and the motor accepts commands.
#[derive(Debug, Clone, Copy)]
pub struct Ready;

/// Trait for motor states.
pub trait MotorState: private::Sealed {}

impl MotorState for Uninitialized {}
impl MotorState for Ready {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Uninitialized {}
    impl Sealed for super::Ready {}
}

/// State name for display/debugging.
pub trait StateName {
    /// Get the state name as a static string.
    fn name() -> &'static str;
}

impl StateName for Uninitialized {
    fn name() -> &'static str {
        "Uninitialized"
    }
}

impl StateName for Ready {
    fn name() -> &'static str {
        "Ready"
    }
}
