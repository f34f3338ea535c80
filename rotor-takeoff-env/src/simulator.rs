//! Interface of the physics simulator driven by [`TakeoffTask`](crate::TakeoffTask).
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Position `(x, y, z)` followed by Euler angles `(roll, pitch, yaw)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose(pub [f64; 6]);

impl Pose {
    /// Constructs a pose from a position and Euler angles.
    pub fn new(position: [f64; 3], angles: [f64; 3]) -> Self {
        let [x, y, z] = position;
        let [roll, pitch, yaw] = angles;
        Self([x, y, z, roll, pitch, yaw])
    }

    /// Position `(x, y, z)`.
    pub fn position(&self) -> [f64; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Euler angles `(roll, pitch, yaw)`.
    pub fn angles(&self) -> [f64; 3] {
        [self.0[3], self.0[4], self.0[5]]
    }

    /// Elements of the pose.
    pub fn as_array(&self) -> &[f64; 6] {
        &self.0
    }
}

impl From<[f64; 6]> for Pose {
    fn from(v: [f64; 6]) -> Self {
        Self(v)
    }
}

/// Initial condition of the simulated vehicle.
///
/// Unset values are left to the simulator's own defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Initial pose.
    pub init_pose: Option<Pose>,

    /// Initial linear velocity in `(x, y, z)`.
    pub init_velocities: Option<[f64; 3]>,

    /// Initial angular velocity, in radians per second, of each Euler angle.
    pub init_angle_velocities: Option<[f64; 3]>,

    /// Time limit of an episode in seconds.
    pub runtime: f64,
}

/// Rigid-body simulator of a quadcopter.
///
/// Implementations own the dynamics, the timestep and the termination rule
/// (time limit, leaving the bounds, hitting the ground). Commands are passed
/// through without any validation.
pub trait Simulator {
    /// Builds a simulator starting from the given initial condition.
    fn build(init: &InitialConditions) -> Result<Self>
    where
        Self: Sized;

    /// Advances the state by one timestep with the given rotor speeds.
    ///
    /// Returns `true` when the episode has terminated.
    fn next_timestep(&mut self, rotor_speeds: &[f64; 4]) -> Result<bool>;

    /// Current pose.
    fn pose(&self) -> Pose;

    /// Puts the simulator back to its initial condition.
    fn reset(&mut self) -> Result<()>;
}
