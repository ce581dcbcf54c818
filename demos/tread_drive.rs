//! Tread drive example.
//!
//! Loads a two-tread configuration, brings both channels up and runs a short
//! drive sequence, printing what each channel writes.
//!
//! This example uses in-process mock pins so it runs without real hardware.

use tread_motor::{motor::MotorSystem, SignedSpeed, TreadDrive};

/// Mock PWM channel for demonstration.
struct MockPwm {
    duty: u16,
}

impl embedded_hal::pwm::ErrorType for MockPwm {
    type Error = core::convert::Infallible;
}

impl embedded_hal::pwm::SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        // 8-bit timer period
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

/// Mock output pin for demonstration.
struct MockPin {
    state: bool,
}

impl MockPin {
    fn new() -> Self {
        Self { state: false }
    }

    fn level(&self) -> u8 {
        self.state as u8
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

const CONFIG: &str = r#"
[motors.left]
name = "Left Tread"
axis = 0

[motors.left.speed]
min = 40

[motors.right]
name = "Right Tread"
axis = 1
invert_direction = true

[motors.right.speed]
min = 40

[treads.base]
left = "left"
right = "right"
"#;

fn main() -> Result<(), tread_motor::Error> {
    println!("=== Tread Drive Example ===\n");

    let config = tread_motor::parse_config(CONFIG)?;
    let mut system = MotorSystem::from_config(config);
    let tread = system.tread_config("base")?.clone();

    let left = system
        .register_motor(
            tread.left.as_str(),
            MockPwm { duty: 0 },
            MockPin::new(),
            MockPin::new(),
        )?
        .init()?;
    let right = system
        .register_motor(
            tread.right.as_str(),
            MockPwm { duty: 0 },
            MockPin::new(),
            MockPin::new(),
        )?
        .init()?;

    println!("Left:  {} on axis {} ({})", left.name(), left.axis(), left.state_name());
    println!("Right: {} on axis {} ({})", right.name(), right.axis(), right.state_name());

    let mut drive = TreadDrive::new(left, right);

    let commands = [
        ("forward", SignedSpeed::from_fraction(0.6), SignedSpeed::ZERO),
        ("veer right", SignedSpeed::from_fraction(0.6), SignedSpeed::from_fraction(0.3)),
        ("full turn", SignedSpeed::FULL_FORWARD, SignedSpeed::FULL_FORWARD),
        ("creep back", SignedSpeed::new(-10), SignedSpeed::ZERO),
    ];

    for (label, throttle, turn) in commands {
        drive.arcade(throttle, turn)?;
        let (l, r) = drive.descriptors();
        println!(
            "{:>10}: left duty {:>3} in=({}, {})  right duty {:>3} in=({}, {})",
            label, l.enable_pin, l.pin_1 as u8, l.pin_2 as u8, r.enable_pin, r.pin_1 as u8, r.pin_2 as u8
        );
    }

    drive.brake()?;
    drive.coast()?;

    let (left, right) = drive.release();
    let (left_pwm, left_1, left_2) = left.release();
    let (right_pwm, right_1, right_2) = right.release();
    println!(
        "\nFinal: left duty {} in=({}, {})  right duty {} in=({}, {})",
        left_pwm.duty,
        left_1.level(),
        left_2.level(),
        right_pwm.duty,
        right_1.level(),
        right_2.level()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
