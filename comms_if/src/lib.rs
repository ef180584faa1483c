//! # Communications interface crate.
//!
//! Provides the interfaces shared between the arm controller, the equipment
//! it drives, and whatever issues commands to it.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Telecommand definitions
pub mod tc;

/// Interface definitions for equipment (like motors)
pub mod eqpt;
