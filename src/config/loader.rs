//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use tread_motor::load_config;
///
/// let config = load_config("treads.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(truncate(&e.to_string(), 128)).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(truncate(e.message(), 128)).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LimitPolicy;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motors.left]
name = "Left Tread"
axis = 0
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("left").unwrap();
        assert_eq!(motor.axis, 0);
        assert_eq!(motor.speed.max.0, 255);
        assert_eq!(motor.speed.policy, LimitPolicy::Clamp);
    }

    #[test]
    fn test_parse_with_tread() {
        let toml = r#"
[motors.left]
name = "Left Tread"
axis = 0

[motors.right]
name = "Right Tread"
axis = 1
invert_direction = true

[treads.base]
left = "left"
right = "right"
"#;

        let config = parse_config(toml).unwrap();
        assert!(config.tread("base").is_some());
        assert!(config.motor("right").unwrap().invert_direction);
    }

    #[test]
    fn test_parse_rejects_unknown_tread_motor() {
        let toml = r#"
[motors.left]
name = "Left Tread"
axis = 0

[treads.base]
left = "left"
right = "missing"
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MotorNotFound(_)))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = parse_config("[motors.left]\naxis = \"zero\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/treads.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }
}
