//! # Telecommand module
//!
//! Commands which can be sent to the arm by an operator or a script.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod arm_ctrl;
