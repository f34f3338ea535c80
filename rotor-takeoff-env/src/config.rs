//! Configuration of [`TakeoffTask`](crate::TakeoffTask).
use crate::{InitialConditions, Pose, DEFAULT_ACTION_REPEAT, DEFAULT_RUNTIME, DEFAULT_TARGET_POS};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

fn default_action_repeat() -> usize {
    DEFAULT_ACTION_REPEAT
}

/// Configuration of [`TakeoffTask`](crate::TakeoffTask).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffTaskConfig {
    /// Initial position and Euler angles of the quadcopter.
    pub init_pose: Option<[f64; 6]>,

    /// Initial velocity in `(x, y, z)`.
    pub init_velocities: Option<[f64; 3]>,

    /// Initial radians per second of each Euler angle.
    pub init_angle_velocities: Option<[f64; 3]>,

    /// Time limit of each episode in seconds.
    pub runtime: f64,

    /// Target position `(x, y, z)`.
    pub target_pos: [f64; 3],

    /// Number of simulator sub-steps per agent step.
    #[serde(default = "default_action_repeat")]
    pub action_repeat: usize,
}

impl Default for TakeoffTaskConfig {
    fn default() -> Self {
        Self {
            init_pose: None,
            init_velocities: None,
            init_angle_velocities: None,
            runtime: DEFAULT_RUNTIME,
            target_pos: DEFAULT_TARGET_POS,
            action_repeat: DEFAULT_ACTION_REPEAT,
        }
    }
}

impl TakeoffTaskConfig {
    /// Sets the initial pose.
    pub fn init_pose(mut self, v: [f64; 6]) -> Self {
        self.init_pose = Some(v);
        self
    }

    /// Sets the initial linear velocity.
    pub fn init_velocities(mut self, v: [f64; 3]) -> Self {
        self.init_velocities = Some(v);
        self
    }

    /// Sets the initial angular velocity.
    pub fn init_angle_velocities(mut self, v: [f64; 3]) -> Self {
        self.init_angle_velocities = Some(v);
        self
    }

    /// Sets the time limit of an episode.
    pub fn runtime(mut self, v: f64) -> Self {
        self.runtime = v;
        self
    }

    /// Sets the target position.
    pub fn target_pos(mut self, v: [f64; 3]) -> Self {
        self.target_pos = v;
        self
    }

    /// Sets the number of simulator sub-steps per agent step.
    pub fn action_repeat(mut self, v: usize) -> Self {
        self.action_repeat = v;
        self
    }

    /// Length of the observation, `action_repeat` stacked poses.
    pub fn state_size(&self) -> usize {
        self.action_repeat * crate::POSE_SIZE
    }

    /// Initial condition handed to [`Simulator::build`](crate::Simulator::build).
    pub fn initial_conditions(&self) -> InitialConditions {
        InitialConditions {
            init_pose: self.init_pose.map(Pose),
            init_velocities: self.init_velocities,
            init_angle_velocities: self.init_angle_velocities,
            runtime: self.runtime,
        }
    }

    /// Constructs [`TakeoffTaskConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TakeoffTaskConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_defaults() {
        let config = TakeoffTaskConfig::default();
        assert_eq!(config.target_pos, [0.0, 0.0, 10.0]);
        assert_eq!(config.runtime, 5.0);
        assert_eq!(config.action_repeat, 3);
        assert_eq!(config.state_size(), 18);
        assert_eq!(config.initial_conditions(), InitialConditions {
            runtime: 5.0,
            ..Default::default()
        });
    }

    #[test]
    fn test_serde_takeoff_task_config() -> Result<()> {
        let config = TakeoffTaskConfig::default()
            .init_pose([0.0, 0.0, 1.0, 0.0, 0.0, 0.0])
            .init_velocities([0.0, 0.0, 0.5])
            .runtime(3.0)
            .target_pos([1.0, 2.0, 20.0]);

        let dir = TempDir::new("takeoff_task_config")?;
        let path = dir.path().join("takeoff_task_config.yaml");
        config.save(&path)?;
        let config_ = TakeoffTaskConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_action_repeat_defaults_when_missing() -> Result<()> {
        let yaml = "init_pose: ~\n\
                    init_velocities: ~\n\
                    init_angle_velocities: ~\n\
                    runtime: 5.0\n\
                    target_pos: [0.0, 0.0, 10.0]\n";
        let config: TakeoffTaskConfig = serde_yaml::from_str(yaml)?;
        assert_eq!(config, TakeoffTaskConfig::default());
        Ok(())
    }
}
