//! # Arm control telecommands

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use structopt::StructOpt;

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// A command that can be completed by arm control.
///
/// Commands are expected to be re-issued every control cycle for as long as they should apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, StructOpt)]
pub enum ArmCmd {
    /// Rotate the arm with a given velocity.
    #[structopt(name = "rot")]
    Rotate {
        /// Direction and magnitude of rotation.
        ///
        /// Positive rotates the arm up, negative rotates it down, zero stops it.
        #[structopt(allow_hyphen_values = true)]
        direction: f64,
    },

    /// Rotate the arm to an absolute angle, compensating the extension to keep
    /// the reach constant.
    #[structopt(name = "rot-to")]
    RotateTo {
        /// Angle to rotate to. The arm's starting position is 0 degrees.
        ///
        /// Units: degrees
        #[structopt(allow_hyphen_values = true)]
        degrees: f64,
    },

    /// Extend or retract the arm at the configured extension power.
    #[structopt(name = "ext")]
    Extend {
        /// Only the sign is used, positive extends the arm and negative
        /// retracts it.
        #[structopt(allow_hyphen_values = true)]
        direction: f64,
    },

    /// Extend the arm to an absolute position.
    #[structopt(name = "ext-to")]
    ExtendTo {
        /// Units: encoder ticks
        #[structopt(allow_hyphen_values = true)]
        ticks: i32,
    },

    /// Remove power from both arm motors.
    #[structopt(name = "stop")]
    Stop,
}
