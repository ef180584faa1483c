//! Implementations for the ArmCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info};

// Internal
use super::{
    ArmCtrlError, Axis, ExtensionCalibration, MotorConfig, Params, RotationCalibration,
    DEFAULT_COMPENSATION_POWER, DEFAULT_POWER,
};
use comms_if::{
    eqpt::motor::{Motor, MotorType, RunMode},
    tc::arm_ctrl::ArmCmd,
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Arm control module state.
///
/// Controls an arm with a rotation axis and a telescoping extension axis. The
/// only state held between calls are the power settings, everything else is
/// derived from the positions reported by the motors on each call.
pub struct ArmCtrl<R, E> {
    pub(crate) rotation_motor: R,

    pub(crate) extension_motor: E,

    pub(crate) motor_type: MotorType,

    pub(crate) rotation_cal: RotationCalibration,

    pub(crate) extension_cal: ExtensionCalibration,

    /// The motor power that the arm uses when rotating.
    pub(crate) rotation_power: f64,

    /// The motor power that the arm uses when extending.
    pub(crate) extension_power: f64,

    /// The motor power the extension uses while compensating for a rotation.
    pub(crate) compensation_power: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<R, E> ArmCtrl<R, E>
where
    R: Motor,
    E: Motor,
{
    /// Create a new arm controller with default powers.
    pub fn new(
        motors: MotorConfig<R, E>,
        rotation_cal: RotationCalibration,
        extension_cal: ExtensionCalibration,
    ) -> Self {
        Self {
            rotation_motor: motors.rotation_motor,
            extension_motor: motors.extension_motor,
            motor_type: motors.motor_type,
            rotation_cal,
            extension_cal,
            rotation_power: DEFAULT_POWER,
            extension_power: DEFAULT_POWER,
            compensation_power: DEFAULT_COMPENSATION_POWER,
        }
    }

    /// Create a new arm controller from a loaded parameter file.
    ///
    /// The motor type recorded in the parameters replaces the one in
    /// `motors`.
    pub fn from_params(motors: MotorConfig<R, E>, params: &Params) -> Result<Self, ArmCtrlError> {
        let mut arm = Self::new(
            MotorConfig::with_motor_type(
                motors.rotation_motor,
                motors.extension_motor,
                params.motor_type,
            ),
            params.rotation_calibration()?,
            params.extension_calibration()?,
        );

        arm.rotation_power = params.rotation_power;
        arm.extension_power = params.extension_power;
        arm.compensation_power = params.compensation_power;

        info!(
            "ArmCtrl initialised: {:?} motors, rotation {:?}, extension {:?}",
            arm.motor_type, arm.rotation_cal, arm.extension_cal
        );

        Ok(arm)
    }

    /// Execute a telecommand.
    ///
    /// Velocity commands first put their own axis into free run so that a
    /// target from an earlier position command no longer applies.
    pub fn execute(&mut self, cmd: &ArmCmd) {
        debug!("ArmCtrl executing ArmCmd::{:?}", cmd);

        match *cmd {
            ArmCmd::Rotate { direction } => {
                self.set_free_run(Axis::Rotation);
                self.rotate(direction);
            }
            ArmCmd::RotateTo { degrees } => self.rotate_to_position(degrees),
            ArmCmd::Extend { direction } => {
                self.set_free_run(Axis::Extension);
                self.extend(direction);
            }
            ArmCmd::ExtendTo { ticks } => self.extend_to_position(ticks),
            ArmCmd::Stop => self.make_safe(),
        }
    }

    /// Function called when entering safe mode.
    ///
    /// Removes power from both motors. Must result in no motion of the arm.
    pub fn make_safe(&mut self) {
        self.rotation_motor.set_power(0.0);
        self.extension_motor.set_power(0.0);
    }

    /// Put an axis's motor into free run mode.
    pub fn set_free_run(&mut self, axis: Axis) {
        match axis {
            Axis::Rotation => self.rotation_motor.set_mode(RunMode::FreeRun),
            Axis::Extension => self.extension_motor.set_mode(RunMode::FreeRun),
        }
    }

    /// Current rotation of the arm.
    ///
    /// Units: degrees
    pub fn rotation_deg(&self) -> f64 {
        super::ticks_to_deg(
            self.rotation_motor.get_position(),
            self.rotation_cal.ticks_per_degree(),
        )
    }
}

impl<R, E> ArmCtrl<R, E> {
    pub fn rotation_power(&self) -> f64 {
        self.rotation_power
    }

    /// Set the rotation power. The value is not validated.
    pub fn set_rotation_power(&mut self, rotation_power: f64) {
        self.rotation_power = rotation_power;
    }

    pub fn extension_power(&self) -> f64 {
        self.extension_power
    }

    /// Set the extension power. The value is not validated.
    pub fn set_extension_power(&mut self, extension_power: f64) {
        self.extension_power = extension_power;
    }

    pub fn compensation_power(&self) -> f64 {
        self.compensation_power
    }

    /// Set the compensation power. The value is not validated.
    pub fn set_compensation_power(&mut self, compensation_power: f64) {
        self.compensation_power = compensation_power;
    }

    pub fn motor_type(&self) -> MotorType {
        self.motor_type
    }

    pub fn rotation_calibration(&self) -> RotationCalibration {
        self.rotation_cal
    }

    pub fn extension_calibration(&self) -> ExtensionCalibration {
        self.extension_cal
    }

    pub fn rotation_motor(&self) -> &R {
        &self.rotation_motor
    }

    pub fn extension_motor(&self) -> &E {
        &self.extension_motor
    }

    /// Mutable access to the rotation motor, for commands outside of arm
    /// control (for example stepping a simulation).
    pub fn rotation_motor_mut(&mut self) -> &mut R {
        &mut self.rotation_motor
    }

    pub fn extension_motor_mut(&mut self) -> &mut E {
        &mut self.extension_motor
    }

    /// Release the motors, consuming the controller.
    pub fn into_motors(self) -> MotorConfig<R, E> {
        MotorConfig::with_motor_type(self.rotation_motor, self.extension_motor, self.motor_type)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::sim_motor::SimMotor;

    /// Build an arm with the rotation bounds [-300, 300] at 10 ticks/degree
    /// and extension bounds [0, 500].
    pub(crate) fn test_arm() -> ArmCtrl<SimMotor, SimMotor> {
        ArmCtrl::new(
            MotorConfig::new(SimMotor::new(1000.0), SimMotor::new(1000.0)),
            RotationCalibration::new(-300, 300, 10.0).unwrap(),
            ExtensionCalibration::new(0, 500).unwrap(),
        )
    }

    #[test]
    fn test_defaults() {
        let arm = test_arm();

        assert_eq!(arm.rotation_power(), 1.0);
        assert_eq!(arm.extension_power(), 1.0);
        assert_eq!(arm.compensation_power(), 0.4);
        assert_eq!(arm.motor_type(), MotorType::TetrixTorquenado);
    }

    #[test]
    fn test_power_accessors() {
        let mut arm = test_arm();

        // Setters don't validate
        arm.set_rotation_power(0.3);
        arm.set_extension_power(1.7);
        arm.set_compensation_power(-0.2);

        assert_eq!(arm.rotation_power(), 0.3);
        assert_eq!(arm.extension_power(), 1.7);
        assert_eq!(arm.compensation_power(), -0.2);
    }

    #[test]
    fn test_from_params() {
        let params: Params = util::params::parse(
            r#"
            motor_type = "RevHdHex"
            rotation_power = 0.6
            extension_power = 0.7

            [rotation]
            min_ticks = 0
            max_ticks = 1200
            ticks_per_degree = 8.0

            [extension]
            min_ticks = -1500
            max_ticks = 0
            "#,
        )
        .unwrap();

        let arm = ArmCtrl::from_params(
            MotorConfig::new(SimMotor::new(1000.0), SimMotor::new(1000.0)),
            &params,
        )
        .unwrap();

        assert_eq!(arm.motor_type(), MotorType::RevHdHex);
        assert_eq!(arm.rotation_power(), 0.6);
        assert_eq!(arm.extension_power(), 0.7);
        assert_eq!(arm.compensation_power(), 0.4);
        assert_eq!(arm.rotation_calibration().bounds().max_ticks(), 1200);
        assert_eq!(arm.extension_calibration().bounds().min_ticks(), -1500);
    }

    #[test]
    fn test_from_params_invalid() {
        let mut params = Params::default();
        params.rotation.min_ticks = 10;
        params.rotation.max_ticks = -10;
        params.rotation.ticks_per_degree = 1.0;

        let res = ArmCtrl::from_params(
            MotorConfig::new(SimMotor::new(1000.0), SimMotor::new(1000.0)),
            &params,
        );

        match res {
            Err(ArmCtrlError::InvalidBounds { axis: Axis::Rotation, .. }) => (),
            Err(e) => panic!("Unexpected error {}", e),
            Ok(_) => panic!("Expected inverted bounds to be rejected"),
        }
    }

    #[test]
    fn test_make_safe() {
        let mut arm = test_arm();
        arm.rotate_to_position(20.0);
        assert!(arm.rotation_motor().power() != 0.0);
        assert!(arm.extension_motor().power() != 0.0);

        arm.make_safe();
        assert_eq!(arm.rotation_motor().power(), 0.0);
        assert_eq!(arm.extension_motor().power(), 0.0);
    }

    #[test]
    fn test_execute() {
        let mut arm = test_arm();

        arm.execute(&ArmCmd::RotateTo { degrees: 45.0 });
        assert_eq!(arm.rotation_motor().target_position(), 300);
        assert_eq!(arm.rotation_motor().mode(), RunMode::RunToPosition);
        assert_eq!(arm.extension_motor().target_position(), -300);
        assert_eq!(arm.extension_motor().mode(), RunMode::RunToPosition);

        // Rotating by velocity leaves the extension compensation in place
        arm.execute(&ArmCmd::Rotate { direction: -0.5 });
        assert_eq!(arm.rotation_motor().mode(), RunMode::FreeRun);
        assert_eq!(arm.rotation_motor().power(), -0.5);
        assert_eq!(arm.extension_motor().mode(), RunMode::RunToPosition);
        assert_eq!(arm.extension_motor().power(), 0.4);

        arm.execute(&ArmCmd::Extend { direction: 0.2 });
        assert_eq!(arm.extension_motor().mode(), RunMode::FreeRun);
        assert_eq!(arm.extension_motor().power(), 1.0);

        arm.execute(&ArmCmd::ExtendTo { ticks: 250 });
        assert_eq!(arm.extension_motor().target_position(), 250);
        assert_eq!(arm.extension_motor().mode(), RunMode::RunToPosition);

        arm.execute(&ArmCmd::Stop);
        assert_eq!(arm.rotation_motor().power(), 0.0);
        assert_eq!(arm.extension_motor().power(), 0.0);
    }

    #[test]
    fn test_borrowed_motors() {
        let mut rot = SimMotor::new(1000.0);
        let mut ext = SimMotor::new(1000.0);
        rot.set_position(100);

        {
            let mut arm = ArmCtrl::new(
                MotorConfig::new(&mut rot, &mut ext),
                RotationCalibration::new(-300, 300, 10.0).unwrap(),
                ExtensionCalibration::new(0, 500).unwrap(),
            );
            arm.rotate_to_position(45.0);
            assert_eq!(arm.rotation_deg(), 10.0);
        }

        assert_eq!(rot.target_position(), 300);
        assert_eq!(rot.power(), 1.0);
        assert_eq!(ext.target_position(), -300);
    }

    #[test]
    fn test_into_motors() {
        let mut arm = test_arm();
        arm.extend_to_position(42);

        let (rot, ext, motor_type) = arm.into_motors().into_parts();
        assert_eq!(ext.target_position(), 42);
        assert_eq!(rot.mode(), RunMode::FreeRun);
        assert_eq!(motor_type, MotorType::TetrixTorquenado);
    }
}
