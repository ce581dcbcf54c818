//! Unit test harness for tread-motor.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod properties;
