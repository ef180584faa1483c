//! Arm configuration structures

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::{ArmCtrlError, Axis};
use comms_if::eqpt::motor::MotorType;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The motors driving the arm.
pub struct MotorConfig<R, E> {
    /// The motor that rotates the arm up and down.
    pub(crate) rotation_motor: R,

    /// The motor that extends and retracts the arm.
    pub(crate) extension_motor: E,

    /// The type of motor used by the arm.
    pub(crate) motor_type: MotorType,
}

/// Inclusive travel limits of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisBounds {
    /// Units: encoder ticks
    min_ticks: i32,

    /// Units: encoder ticks
    max_ticks: i32,
}

/// Calibration of the rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RotationCalibration {
    bounds: AxisBounds,

    /// How many ticks it takes to rotate the arm by one degree.
    ticks_per_degree: f64,
}

/// Calibration of the extension axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtensionCalibration {
    bounds: AxisBounds,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<R, E> MotorConfig<R, E> {
    /// Group the arm motors, assuming Tetrix Torquenado motors.
    pub fn new(rotation_motor: R, extension_motor: E) -> Self {
        Self::with_motor_type(rotation_motor, extension_motor, MotorType::default())
    }

    pub fn with_motor_type(rotation_motor: R, extension_motor: E, motor_type: MotorType) -> Self {
        Self {
            rotation_motor,
            extension_motor,
            motor_type,
        }
    }

    pub fn motor_type(&self) -> MotorType {
        self.motor_type
    }

    pub fn rotation_motor(&self) -> &R {
        &self.rotation_motor
    }

    pub fn extension_motor(&self) -> &E {
        &self.extension_motor
    }

    /// Split the configuration into the rotation motor, extension motor and
    /// motor type.
    pub fn into_parts(self) -> (R, E, MotorType) {
        (self.rotation_motor, self.extension_motor, self.motor_type)
    }
}

impl AxisBounds {
    /// Create a new set of bounds for the given axis.
    ///
    /// Errors if `min_ticks > max_ticks`.
    pub fn new(axis: Axis, min_ticks: i32, max_ticks: i32) -> Result<Self, ArmCtrlError> {
        if min_ticks > max_ticks {
            return Err(ArmCtrlError::InvalidBounds {
                axis,
                min: min_ticks,
                max: max_ticks,
            });
        }

        Ok(Self {
            min_ticks,
            max_ticks,
        })
    }

    pub fn min_ticks(&self) -> i32 {
        self.min_ticks
    }

    pub fn max_ticks(&self) -> i32 {
        self.max_ticks
    }

    /// Returns true if the position lies within the bounds (inclusive).
    pub fn contains(&self, position_ticks: i32) -> bool {
        position_ticks >= self.min_ticks && position_ticks <= self.max_ticks
    }

    /// Limit a position to lie within the bounds.
    pub fn clamp(&self, position_ticks: i32) -> i32 {
        util::maths::clamp(position_ticks, self.min_ticks, self.max_ticks)
    }
}

impl RotationCalibration {
    /// Create a new rotation calibration.
    ///
    /// `ticks_per_degree` must be positive and finite, and `min_ticks` must
    /// not exceed `max_ticks`.
    pub fn new(
        min_ticks: i32,
        max_ticks: i32,
        ticks_per_degree: f64,
    ) -> Result<Self, ArmCtrlError> {
        let bounds = AxisBounds::new(Axis::Rotation, min_ticks, max_ticks)?;

        if !(ticks_per_degree.is_finite() && ticks_per_degree > 0.0) {
            return Err(ArmCtrlError::InvalidTicksPerDegree(ticks_per_degree));
        }

        Ok(Self {
            bounds,
            ticks_per_degree,
        })
    }

    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    pub fn ticks_per_degree(&self) -> f64 {
        self.ticks_per_degree
    }
}

impl ExtensionCalibration {
    /// Create a new extension calibration.
    pub fn new(min_ticks: i32, max_ticks: i32) -> Result<Self, ArmCtrlError> {
        Ok(Self {
            bounds: AxisBounds::new(Axis::Extension, min_ticks, max_ticks)?,
        })
    }

    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rotation_calibration() {
        let cal = RotationCalibration::new(-300, 300, 10.0).unwrap();
        assert_eq!(cal.bounds().min_ticks(), -300);
        assert_eq!(cal.bounds().max_ticks(), 300);
        assert_eq!(cal.ticks_per_degree(), 10.0);

        // A single allowed position is still a valid range
        assert!(RotationCalibration::new(5, 5, 1.0).is_ok());

        assert_eq!(
            RotationCalibration::new(300, -300, 10.0),
            Err(ArmCtrlError::InvalidBounds {
                axis: Axis::Rotation,
                min: 300,
                max: -300
            })
        );
        assert_eq!(
            RotationCalibration::new(-300, 300, 0.0),
            Err(ArmCtrlError::InvalidTicksPerDegree(0.0))
        );
        assert_eq!(
            RotationCalibration::new(-300, 300, -2.0),
            Err(ArmCtrlError::InvalidTicksPerDegree(-2.0))
        );
        assert!(RotationCalibration::new(-300, 300, std::f64::INFINITY).is_err());
        assert!(RotationCalibration::new(-300, 300, std::f64::NAN).is_err());
    }

    #[test]
    fn test_extension_calibration() {
        let cal = ExtensionCalibration::new(0, 500).unwrap();
        assert_eq!(cal.bounds().min_ticks(), 0);
        assert_eq!(cal.bounds().max_ticks(), 500);

        assert_eq!(
            ExtensionCalibration::new(1, 0),
            Err(ArmCtrlError::InvalidBounds {
                axis: Axis::Extension,
                min: 1,
                max: 0
            })
        );
    }

    #[test]
    fn test_bounds() {
        let bounds = AxisBounds::new(Axis::Rotation, -300, 300).unwrap();

        assert!(bounds.contains(-300));
        assert!(bounds.contains(300));
        assert!(bounds.contains(0));
        assert!(!bounds.contains(301));
        assert!(!bounds.contains(-301));

        // Clamping is idempotent
        for x in [i32::MIN, -1000, -301, -300, 0, 299, 300, 450, i32::MAX].iter() {
            let once = bounds.clamp(*x);
            assert!(bounds.contains(once));
            assert_eq!(bounds.clamp(once), once);
        }
        assert_eq!(bounds.clamp(450), 300);
        assert_eq!(bounds.clamp(-450), -300);
        assert_eq!(bounds.clamp(12), 12);
    }

    #[test]
    fn test_motor_config() {
        let cfg = MotorConfig::new((), ());
        assert_eq!(cfg.motor_type(), MotorType::TetrixTorquenado);

        let cfg = MotorConfig::with_motor_type(1u8, 2u16, MotorType::RevHdHex);
        assert_eq!(cfg.motor_type(), MotorType::RevHdHex);
        assert_eq!(*cfg.rotation_motor(), 1);
        assert_eq!(*cfg.extension_motor(), 2);

        let (rot, ext, motor_type) = cfg.into_parts();
        assert_eq!((rot, ext, motor_type), (1, 2, MotorType::RevHdHex));
    }
}
