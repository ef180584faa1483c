//! Simulated motor
//!
//! A first order model of an encoder-equipped DC motor, used by the executable
//! when no hardware is attached and by the arm control tests. The last demands
//! sent to the motor can be read back.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use comms_if::eqpt::motor::{Motor, RunMode};
use log::trace;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A simulated motor.
#[derive(Debug, Clone)]
pub struct SimMotor {
    /// Speed of the motor at full power.
    ///
    /// Units: encoder ticks/second
    max_rate_ticks_s: f64,

    /// Position kept as a float so that slow speeds still accumulate.
    ///
    /// Units: encoder ticks
    position_ticks: f64,

    power: f64,

    target_position: i32,

    mode: RunMode,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimMotor {
    /// Create a new stationary motor at position zero in free run mode.
    pub fn new(max_rate_ticks_s: f64) -> Self {
        Self {
            max_rate_ticks_s,
            position_ticks: 0.0,
            power: 0.0,
            target_position: 0,
            mode: RunMode::FreeRun,
        }
    }

    /// Override the position reported by the motor.
    pub fn set_position(&mut self, ticks: i32) {
        self.position_ticks = ticks as f64;
    }

    /// The last demanded power.
    pub fn power(&self) -> f64 {
        self.power
    }

    /// The last demanded target position.
    pub fn target_position(&self) -> i32 {
        self.target_position
    }

    /// The last demanded run mode.
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Advance the simulation by `dt_s` seconds.
    ///
    /// Power is saturated to [-1, 1]. In run to position mode the motor moves
    /// towards the target at `|power|` of its maximum rate and stops on it.
    pub fn step(&mut self, dt_s: f64) {
        let power = util::maths::clamp(self.power, -1.0, 1.0);

        match self.mode {
            RunMode::FreeRun => {
                self.position_ticks += power * self.max_rate_ticks_s * dt_s;
            }
            RunMode::RunToPosition => {
                let max_step_ticks = power.abs() * self.max_rate_ticks_s * dt_s;
                let error_ticks = self.target_position as f64 - self.position_ticks;

                if error_ticks.abs() <= max_step_ticks {
                    self.position_ticks = self.target_position as f64;
                } else {
                    self.position_ticks += max_step_ticks * util::maths::sign(error_ticks);
                }
            }
        }

        trace!(
            "SimMotor {:?}: pos {:.1} ticks, power {:.3}",
            self.mode,
            self.position_ticks,
            power
        );
    }
}

impl Motor for SimMotor {
    fn get_position(&self) -> i32 {
        self.position_ticks.round() as i32
    }

    fn set_power(&mut self, power: f64) {
        self.power = power;
    }

    fn set_target_position(&mut self, ticks: i32) {
        self.target_position = ticks;
    }

    fn set_mode(&mut self, mode: RunMode) {
        self.mode = mode;
    }
}
