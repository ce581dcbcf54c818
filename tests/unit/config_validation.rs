//! Unit tests for configuration validation.

use tread_motor::config::{validate_config, SystemConfig};
use tread_motor::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
axis = 0

[motors.right]
name = "Right Tread"
axis = 1

[treads.base]
left = "left"
right = "right"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a tread referencing a non-existent motor.
#[test]
fn test_tread_invalid_motor_reference() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
axis = 0

[treads.base]
left = "left"
right = "nonexistent"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);

    match result {
        Err(Error::Config(ConfigError::MotorNotFound(name))) => {
            assert_eq!(name.as_str(), "nonexistent");
        }
        other => panic!("Expected MotorNotFound, got {:?}", other),
    }
}

/// Test validation fails when a tread uses one motor for both sides.
#[test]
fn test_tread_same_motor_rejected() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
axis = 0

[treads.base]
left = "left"
right = "left"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::TreadUsesSameMotor(_)))
    ));
}

/// Test validation fails for two motors on one axis.
#[test]
fn test_duplicate_axis_rejected() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
axis = 4

[motors.right]
name = "Right Tread"
axis = 4
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    match validate_config(&config) {
        Err(Error::Config(ConfigError::DuplicateAxis { axis, motor })) => {
            assert_eq!(axis, 4);
            assert_eq!(motor.as_str(), "right");
        }
        other => panic!("Expected DuplicateAxis, got {:?}", other),
    }
}

/// Test validation fails for inverted speed limits.
#[test]
fn test_inverted_speed_limits_rejected() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
axis = 0

[motors.left.speed]
min = 200
max = 100
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSpeedLimits { min: 200, max: 100 }))
    ));
}

/// Test validation fails for a zero-interval ramp.
#[test]
fn test_zero_interval_ramp_rejected() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
axis = 0

[motors.left.ramp]
step = 10
interval_ms = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidRamp { interval_ms: 0, .. }))
    ));
}
