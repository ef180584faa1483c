//! Arm executable entry point.
//!
//! # Architecture
//!
//! The executable drives the arm with simulated motors:
//!
//!     - Initialise the session, logging and parameters
//!     - Build the arm controller around a pair of simulated motors
//!     - Main loop, for the requested number of cycles:
//!         - Arm control processing of the command given on the command line
//!         - Simulated motor step
//!     - Make the arm safe

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use comms_if::{eqpt::motor::Motor, tc::arm_ctrl::ArmCmd};
use log::{debug, info, warn};
use std::thread;
use std::time::{Duration, Instant};
use structopt::StructOpt;

// Internal
use arm_lib::{
    arm_ctrl::{self, ArmCtrl, MotorConfig},
    sim_motor::SimMotor,
};
use params::ArmExecParams;
use util::{
    logger::{logger_init, verbosity_to_level},
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Target period of one cycle.
const CYCLE_PERIOD_S: f64 = 0.02;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Drive the extendable arm with simulated motors.
#[derive(Debug, StructOpt)]
#[structopt(name = "arm_exec")]
struct Opts {
    /// Increase the log verbosity, once for debug and twice for trace.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u64,

    /// Number of cycles to run for, overriding the parameter file.
    #[structopt(short, long)]
    cycles: Option<u64>,

    /// The command to execute on every cycle.
    #[structopt(subcommand)]
    cmd: ArmCmd,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("arm_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(verbosity_to_level(opts.verbose), &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Extendable Arm Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    debug!("CLI arguments: {:?}", opts);

    // ---- LOAD PARAMETERS ----

    let exec_params: ArmExecParams =
        util::params::load("arm_exec.toml").wrap_err("Could not load exec params")?;
    let arm_params: arm_ctrl::Params =
        util::params::load("arm_ctrl.toml").wrap_err("Could not load arm control params")?;

    info!("Parameters loaded");

    // ---- INITIALISE MODULES ----

    let motors = MotorConfig::new(
        SimMotor::new(exec_params.sim_max_rate_ticks_s),
        SimMotor::new(exec_params.sim_max_rate_ticks_s),
    );
    let mut arm = ArmCtrl::from_params(motors, &arm_params)
        .wrap_err("Failed to initialise ArmCtrl")?;

    info!("ArmCtrl init complete\n");

    // ---- MAIN LOOP ----

    let num_cycles = opts.cycles.unwrap_or(exec_params.num_cycles);

    info!("Executing {:?} for {} cycles", opts.cmd, num_cycles);

    for cycle in 0..num_cycles {
        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // ---- ARM CONTROL PROCESSING ----

        arm.execute(&opts.cmd);

        // ---- SIMULATION ----

        arm.rotation_motor_mut().step(CYCLE_PERIOD_S);
        arm.extension_motor_mut().step(CYCLE_PERIOD_S);

        debug!(
            "Cycle {}: rotation {} ticks ({:.2} deg), extension {} ticks",
            cycle,
            arm.rotation_motor().get_position(),
            arm.rotation_deg(),
            arm.extension_motor().get_position()
        );

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match Duration::from_secs_f64(CYCLE_PERIOD_S).checked_sub(cycle_dur) {
            Some(d) => thread::sleep(d),
            None => warn!(
                "Cycle overran by {:.06} s",
                cycle_dur.as_secs_f64() - CYCLE_PERIOD_S
            ),
        }
    }

    // ---- SHUTDOWN ----

    arm.make_safe();

    info!(
        "Arm made safe at rotation {} ticks ({:.2} deg), extension {} ticks",
        arm.rotation_motor().get_position(),
        arm.rotation_deg(),
        arm.extension_motor().get_position()
    );

    info!("End of execution");

    Ok(())
}
