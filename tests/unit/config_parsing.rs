//! Unit tests for TOML configuration parsing.

use tread_motor::config::{LimitPolicy, SystemConfig};

/// Test parsing a valid motor configuration from TOML.
#[test]
fn test_parse_motor_config() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
axis = 2
invert_direction = true
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("left").expect("Motor not found");

    assert_eq!(motor.name.as_str(), "Left Tread");
    assert_eq!(motor.axis, 2);
    assert!(motor.invert_direction);
    assert!(motor.ramp.is_none());
}

/// Test parsing speed limits with defaults filled in.
#[test]
fn test_parse_speed_limits() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
axis = 0

[motors.left.speed]
min = 45
policy = "reject"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let speed = config.motor("left").expect("Motor not found").speed;

    assert_eq!(speed.min.0, 45);
    assert_eq!(speed.max.0, 255);
    assert_eq!(speed.policy, LimitPolicy::Reject);
}

/// Test parsing a ramp.
#[test]
fn test_parse_ramp() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
axis = 0

[motors.left.ramp]
step = 8
interval_ms = 20
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let ramp = config.motor("left").unwrap().ramp.expect("Ramp not found");

    assert_eq!(ramp.step, 8);
    assert_eq!(ramp.interval_ms, 20);
}

/// Test parsing a tread pair.
#[test]
fn test_parse_tread() {
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
    let tread = config.tread("base").expect("Tread not found");

    assert_eq!(tread.left.as_str(), "left");
    assert_eq!(tread.right.as_str(), "right");
    assert_eq!(config.tread_names().count(), 1);
}

/// Duty values beyond 8 bits cannot be represented.
#[test]
fn test_speed_above_full_scale_rejected() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
axis = 0

[motors.left.speed]
max = 300
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject duty values above 255");
}

/// The axis field is mandatory.
#[test]
fn test_missing_axis_rejected() {
    let toml_str = r#"
[motors.left]
name = "Left Tread"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}
