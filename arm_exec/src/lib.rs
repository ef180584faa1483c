//! # Arm library.
//!
//! This library allows other crates in the workspace to access items defined inside the arm
//! crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Arm control module - converts arm commands into rotation and extension motor demands
pub mod arm_ctrl;

/// Simulated motor - stands in for the arm motors when no hardware is attached
pub mod sim_motor;
