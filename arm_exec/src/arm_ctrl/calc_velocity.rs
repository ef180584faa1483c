//! Velocity control calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace};

// Internal
use super::ArmCtrl;
use comms_if::eqpt::motor::Motor;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<R, E> ArmCtrl<R, E>
where
    R: Motor,
    E: Motor,
{
    /// Rotate the arm with a set velocity.
    ///
    /// Positive directions rotate the arm up, negative rotate it down, and
    /// zero stops the motor. The direction is scaled by the rotation power.
    ///
    /// If the arm is currently outside of its rotation bounds the motor is
    /// stopped instead, whatever the requested direction.
    pub fn rotate(&mut self, direction: f64) {
        let position = self.rotation_motor.get_position();

        if !self.rotation_cal.bounds().contains(position) {
            debug!(
                "Rotation at {} ticks is outside of {:?}, stopping",
                position,
                self.rotation_cal.bounds()
            );
            self.rotation_motor.set_power(0.0);
            return;
        }

        let power = direction * self.rotation_power;
        trace!("Rotation power demand: {}", power);
        self.rotation_motor.set_power(power);
    }

    /// Extend or retract the arm with a set velocity.
    ///
    /// Only the sign of the direction is used: positive extends the arm at the
    /// extension power, negative retracts it, and zero stops the motor.
    ///
    /// If the arm is currently outside of its extension bounds the motor is
    /// stopped instead.
    pub fn extend(&mut self, direction: f64) {
        let position = self.extension_motor.get_position();

        if !self.extension_cal.bounds().contains(position) {
            debug!(
                "Extension at {} ticks is outside of {:?}, stopping",
                position,
                self.extension_cal.bounds()
            );
            self.extension_motor.set_power(0.0);
            return;
        }

        let power = util::maths::sign(direction) * self.extension_power;
        trace!("Extension power demand: {}", power);
        self.extension_motor.set_power(power);
    }
}
