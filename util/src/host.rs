//! Host platform utility functions

use std::{env, path::PathBuf};

/// Name of the environment variable pointing at the root of the arm software
/// checkout. Parameter files and sessions are resolved relative to it.
pub const SW_ROOT_ENV_VAR: &str = "ARM_SW_ROOT";

/// Get the software root directory from the environment.
pub fn get_arm_sw_root() -> Result<PathBuf, env::VarError> {
    env::var(SW_ROOT_ENV_VAR).map(PathBuf::from)
}
