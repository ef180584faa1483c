//! # Arm Executable Parameters
//!
//! This module provides parameters for the arm executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ArmExecParams {

    /// Speed of the simulated motors at full power.
    ///
    /// Units: encoder ticks/second
    pub sim_max_rate_ticks_s: f64,

    /// Number of cycles to run the command for, unless overriden on the command line.
    pub num_cycles: u64
}
