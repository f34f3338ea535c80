//! A quadcopter takeoff task built on top of an external physics simulator.
//!
//! [`TakeoffTask`] sits between an agent loop and a [`Simulator`]. Each call
//! of [`Env::step`] advances the simulator `action_repeat` times with the same
//! [`RotorSpeeds`], sums the reward of every sub-step and returns the poses of
//! those sub-steps stacked into a single [`TakeoffObs`].
//!
//! ## Reward
//!
//! The reward of a sub-step is `tanh(-0.2 * d)`, where `d` is the sum of the
//! absolute per-axis differences between the current position and the target
//! position (see [`takeoff_reward`]).
//!
//! ## Termination
//!
//! Termination is owned by the simulator. Only the flag of the last sub-step
//! is reported in [`Step::is_terminated`]; sub-steps after an earlier
//! termination are still executed and still contribute to reward and
//! observation. [`TakeoffInfo::first_done_sub_step`] tells when the simulator
//! first reported the end of the episode within the step. The task does not
//! refuse to step a finished episode; resetting is up to the caller.
//!
//! [`Env::step`]: rotor_core::Env::step
//! [`Step::is_terminated`]: rotor_core::Step::is_terminated
mod act;
mod base;
mod config;
mod history;
mod obs;
mod reward;
mod simulator;
pub use act::RotorSpeeds;
pub use base::{TakeoffInfo, TakeoffTask};
pub use config::TakeoffTaskConfig;
pub use history::PoseHistory;
pub use obs::TakeoffObs;
pub use reward::takeoff_reward;
pub use simulator::{InitialConditions, Pose, Simulator};

/// Number of elements of a [`Pose`].
pub const POSE_SIZE: usize = 6;

/// Number of rotors, i.e., the number of elements of [`RotorSpeeds`].
pub const ACTION_SIZE: usize = 4;

/// Lower bound of a rotor speed.
pub const ACTION_LOW: f64 = 0.0;

/// Upper bound of a rotor speed.
pub const ACTION_HIGH: f64 = 900.0;

/// Default number of simulator sub-steps per agent step.
pub const DEFAULT_ACTION_REPEAT: usize = 3;

/// Default episode time limit in seconds.
pub const DEFAULT_RUNTIME: f64 = 5.0;

/// Default target position, right above the origin.
pub const DEFAULT_TARGET_POS: [f64; 3] = [0.0, 0.0, 10.0];
