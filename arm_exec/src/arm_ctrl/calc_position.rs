//! Position control calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace};

// Internal
use super::ArmCtrl;
use comms_if::eqpt::motor::{Motor, RunMode};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<R, E> ArmCtrl<R, E>
where
    R: Motor,
    E: Motor,
{
    /// Rotate the arm to an angle, relative to its starting position.
    ///
    /// The target is limited to the rotation bounds. The extension motor is
    /// sent to the negated rotation target at the compensation power, which
    /// keeps the reach of the arm constant as it swings.
    ///
    /// The compensation target is not limited to the extension bounds. It is
    /// the saturating negation of the rotation target, so a target of
    /// `i32::MIN` ticks is compensated with `i32::MAX`.
    pub fn rotate_to_position(&mut self, degrees: f64) {
        let unclamped = super::deg_to_ticks(degrees, self.rotation_cal.ticks_per_degree());
        let target = self.rotation_cal.bounds().clamp(unclamped);

        if target != unclamped {
            debug!(
                "Rotation target of {} deg ({} ticks) limited to {} ticks",
                degrees, unclamped, target
            );
        }

        let direction = direction_to(target, self.rotation_motor.get_position());

        self.rotation_motor.set_target_position(target);
        self.rotation_motor.set_power(direction * self.rotation_power);
        self.rotation_motor.set_mode(RunMode::RunToPosition);

        // Keep the arm length constant. Saturates at i32::MAX for a target of
        // i32::MIN.
        let compensation_target = target.saturating_neg();

        if !self.extension_cal.bounds().contains(compensation_target) {
            debug!(
                "Extension compensation target {} ticks is outside of {:?}",
                compensation_target,
                self.extension_cal.bounds()
            );
        }

        self.extension_motor.set_target_position(compensation_target);
        self.extension_motor.set_power(self.compensation_power);
        self.extension_motor.set_mode(RunMode::RunToPosition);

        trace!(
            "Rotation target {} ticks (direction {}), extension compensation target {} ticks",
            target,
            direction,
            compensation_target
        );
    }

    /// Extend the arm to a position.
    ///
    /// The target is trusted and sent to the motor as is, it is not limited to
    /// the extension bounds.
    pub fn extend_to_position(&mut self, target: i32) {
        let direction = direction_to(target, self.extension_motor.get_position());

        self.extension_motor.set_target_position(target);
        self.extension_motor.set_power(direction * self.extension_power);
        self.extension_motor.set_mode(RunMode::RunToPosition);

        trace!("Extension target {} ticks (direction {})", target, direction);
    }
}

/// The direction to travel from `current` to reach `target`, as -1, 0 or +1.
fn direction_to(target: i32, current: i32) -> f64 {
    // Widened so the difference of two extreme positions can't overflow
    (target as i64 - current as i64).signum() as f64
}
