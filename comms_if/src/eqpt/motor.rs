//! # Motor Equipment Interface
//!
//! The arm's motors are driven through encoder-equipped DC motor controllers. The controller
//! firmware can either apply the demanded power directly or close a position loop around a
//! target, using the demanded power as a speed cap.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A handle to a single encoder-equipped motor.
///
/// Reads and writes are treated as independent register accesses on the hardware, there is no
/// atomicity between them. Implementations are expected to be used from a single control thread.
pub trait Motor {
    /// Current position of the motor.
    ///
    /// Units: encoder ticks
    fn get_position(&self) -> i32;

    /// Set the power demand of the motor.
    ///
    /// Values are normally in [-1, 1]. Behaviour outside of this range is up to the underlying
    /// driver and is not checked here.
    fn set_power(&mut self, power: f64);

    /// Set the position the motor will seek to while in [`RunMode::RunToPosition`].
    ///
    /// Units: encoder ticks
    fn set_target_position(&mut self, ticks: i32);

    /// Set the run mode of the motor.
    fn set_mode(&mut self, mode: RunMode);
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Operating mode of a motor.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Power is applied directly with no position loop.
    FreeRun,

    /// The motor firmware seeks the last set target position, with the demanded power used as the
    /// velocity cap.
    RunToPosition,
}

/// The type of motor fitted to an axis.
///
/// Carried as a tag only, it has no effect on the control calculations.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorType {
    TetrixTorquenado,
    RevHdHex,
    RevCoreHex,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for MotorType {
    fn default() -> Self {
        MotorType::TetrixTorquenado
    }
}

/// Lending a motor to a controller is the same as giving it the motor.
impl<M> Motor for &mut M
where
    M: Motor + ?Sized,
{
    fn get_position(&self) -> i32 {
        (**self).get_position()
    }

    fn set_power(&mut self, power: f64) {
        (**self).set_power(power)
    }

    fn set_target_position(&mut self, ticks: i32) {
        (**self).set_target_position(ticks)
    }

    fn set_mode(&mut self, mode: RunMode) {
        (**self).set_mode(mode)
    }
}
