//! Hardware adapter — bridges the motor drivers to the domain port.
//!
//! Owns the per-motor [`MotorDriver`]s and exposes them through
//! [`ActuatorPort`]. This is the only module in the output path that
//! touches actual hardware. On non-espidf targets, the underlying
//! drivers use cfg-gated simulation stubs.

use crate::app::ports::ActuatorPort;
use crate::config::NUM_MOTORS;
use crate::drivers::motor::MotorDriver;

/// Concrete adapter that puts all vibration motors behind [`ActuatorPort`].
pub struct HardwareAdapter {
    motors: [MotorDriver; NUM_MOTORS],
}

impl HardwareAdapter {
    pub fn new() -> Self {
        Self {
            motors: core::array::from_fn(|i| MotorDriver::new(i as u8)),
        }
    }

    /// Duty currently applied to one motor (diagnostics).
    pub fn motor_duty(&self, id: u8) -> Option<u8> {
        self.motors.get(usize::from(id)).map(MotorDriver::current_duty)
    }
}

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for HardwareAdapter {
    fn set_motor(&mut self, id: u8, duty: u8) {
        if let Some(motor) = self.motors.get_mut(usize::from(id)) {
            motor.set(duty);
        }
    }

    fn all_off(&mut self) {
        for motor in &mut self.motors {
            motor.stop();
        }
    }
}
