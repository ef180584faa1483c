//! Arm control module
//!
//! Converts operator intents for the extendable arm into power, target
//! position and run mode demands on the rotation and extension motors.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod arm_config;
mod calc_position;
mod calc_velocity;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
pub use arm_config::*;
pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Power scale applied to operator driven moves unless configured otherwise.
pub const DEFAULT_POWER: f64 = 1.0;

/// Power used by the extension motor when it is compensating for a rotation
/// position command.
pub const DEFAULT_COMPENSATION_POWER: f64 = 0.4;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The two axes of the arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    Rotation,
    Extension,
}

/// Possible errors that can occur while configuring ArmCtrl.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ArmCtrlError {
    #[error("Invalid {axis:?} bounds, the minimum ({min}) is greater than the maximum ({max})")]
    InvalidBounds { axis: Axis, min: i32, max: i32 },

    #[error("Ticks per degree must be positive and finite, found {0}")]
    InvalidTicksPerDegree(f64),
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Convert an angle into encoder ticks.
///
/// Halves round towards positive infinity. Results outside the `i32` range
/// saturate, and a NaN angle converts to zero ticks.
pub fn deg_to_ticks(degrees: f64, ticks_per_degree: f64) -> i32 {
    util::maths::round_half_up(degrees * ticks_per_degree) as i32
}

/// Convert encoder ticks into an angle.
pub fn ticks_to_deg(ticks: i32, ticks_per_degree: f64) -> f64 {
    ticks as f64 / ticks_per_degree
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deg_to_ticks() {
        // (degrees, ticks per degree, expected ticks)
        let table: [(f64, f64, i32); 10] = [
            (45.0, 10.0, 450),
            (0.0, 10.0, 0),
            (-30.0, 10.0, -300),
            (0.25, 10.0, 3),
            (-0.25, 10.0, -2),
            (2.25, 2.0, 5),
            (1.5, 1.0, 2),
            (-1.5, 1.0, -1),
            (90.0, 7.5, 675),
            (12.3, 4.0, 49),
        ];

        for (degrees, tpd, ticks) in table.iter() {
            assert_eq!(
                deg_to_ticks(*degrees, *tpd),
                *ticks,
                "{} deg at {} ticks/deg",
                degrees,
                tpd
            );
        }
    }

    #[test]
    fn test_deg_to_ticks_saturates() {
        assert_eq!(deg_to_ticks(1e12, 10.0), i32::MAX);
        assert_eq!(deg_to_ticks(-1e12, 10.0), i32::MIN);
        assert_eq!(deg_to_ticks(std::f64::NAN, 10.0), 0);
    }

    #[test]
    fn test_ticks_to_deg() {
        assert_eq!(ticks_to_deg(450, 10.0), 45.0);
        assert_eq!(ticks_to_deg(-300, 10.0), -30.0);
    }
}
