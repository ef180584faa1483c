//! Parameters structure for ArmCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::{
    ArmCtrlError, ExtensionCalibration, RotationCalibration, DEFAULT_COMPENSATION_POWER,
    DEFAULT_POWER,
};
use comms_if::eqpt::motor::MotorType;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for Arm control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// The type of motor fitted to both axes.
    #[serde(default)]
    pub motor_type: MotorType,

    // ---- POWERS ----
    /// Power scale used when rotating the arm.
    #[serde(default = "default_power")]
    pub rotation_power: f64,

    /// Power scale used when extending the arm.
    #[serde(default = "default_power")]
    pub extension_power: f64,

    /// Power used by the extension motor while compensating for a rotation.
    #[serde(default = "default_compensation_power")]
    pub compensation_power: f64,

    // ---- CAPABILITIES ----
    pub rotation: RotationParams,

    pub extension: ExtensionParams,
}

/// Rotation axis calibration parameters.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct RotationParams {
    /// Minimum rotation of the arm.
    ///
    /// Units: encoder ticks
    pub min_ticks: i32,

    /// Maximum rotation of the arm.
    ///
    /// Units: encoder ticks
    pub max_ticks: i32,

    /// Units: encoder ticks/degree
    pub ticks_per_degree: f64,
}

/// Extension axis calibration parameters.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct ExtensionParams {
    /// Units: encoder ticks
    pub min_ticks: i32,

    /// Units: encoder ticks
    pub max_ticks: i32,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    /// Default powers with empty calibration. The calibration has no
    /// sensible default so it must still be filled in before use.
    fn default() -> Self {
        Params {
            motor_type: MotorType::default(),
            rotation_power: DEFAULT_POWER,
            extension_power: DEFAULT_POWER,
            compensation_power: DEFAULT_COMPENSATION_POWER,
            rotation: RotationParams::default(),
            extension: ExtensionParams::default(),
        }
    }
}

impl Params {
    pub fn rotation_calibration(&self) -> Result<RotationCalibration, ArmCtrlError> {
        RotationCalibration::new(
            self.rotation.min_ticks,
            self.rotation.max_ticks,
            self.rotation.ticks_per_degree,
        )
    }

    pub fn extension_calibration(&self) -> Result<ExtensionCalibration, ArmCtrlError> {
        ExtensionCalibration::new(self.extension.min_ticks, self.extension.max_ticks)
    }
}

fn default_power() -> f64 {
    DEFAULT_POWER
}

fn default_compensation_power() -> f64 {
    DEFAULT_COMPENSATION_POWER
}
