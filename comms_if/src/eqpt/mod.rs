//! # Equipment Interface
//!
//! This module defines the interfaces through which controllers talk to equipment.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

pub mod motor;
