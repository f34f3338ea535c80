//! The takeoff task.
use crate::{
    takeoff_reward, PoseHistory, RotorSpeeds, Simulator, TakeoffObs, TakeoffTaskConfig,
    ACTION_HIGH, ACTION_LOW, ACTION_SIZE, POSE_SIZE,
};
use anyhow::{ensure, Result};
use log::{debug, info, trace};
use rotor_core::{
    record::{Record, RecordValue},
    Env, Info, Step,
};

/// Information given at every step of the interaction with the task.
#[derive(Clone, Debug, PartialEq)]
pub struct TakeoffInfo {
    /// Number of simulator sub-steps executed.
    pub sub_steps: usize,

    /// Index of the first sub-step at which the simulator reported termination.
    ///
    /// A value smaller than `sub_steps - 1` means the step kept driving the
    /// simulator after the episode had ended.
    pub first_done_sub_step: Option<usize>,
}

impl Info for TakeoffInfo {}

/// Task that rewards a quadcopter for reaching a target position.
pub struct TakeoffTask<S: Simulator> {
    sim: S,
    target_pos: [f64; 3],
    action_repeat: usize,
    history: PoseHistory,
}

impl<S: Simulator> TakeoffTask<S> {
    /// Wraps an already built simulator.
    pub fn from_simulator(sim: S, config: &TakeoffTaskConfig) -> Result<Self> {
        ensure!(
            config.action_repeat > 0,
            "action_repeat must be positive, got {}",
            config.action_repeat
        );
        let mut history = PoseHistory::new(config.action_repeat);
        history.fill(&sim.pose());

        Ok(Self {
            sim,
            target_pos: config.target_pos,
            action_repeat: config.action_repeat,
            history,
        })
    }

    /// Reward for the current pose of the simulator.
    pub fn reward(&self) -> f64 {
        takeoff_reward(&self.sim.pose().position(), &self.target_pos)
    }

    /// Target position.
    pub fn target_pos(&self) -> [f64; 3] {
        self.target_pos
    }

    /// Number of simulator sub-steps per step.
    pub fn action_repeat(&self) -> usize {
        self.action_repeat
    }

    /// Length of the observation.
    pub fn state_size(&self) -> usize {
        self.action_repeat * POSE_SIZE
    }

    /// Number of elements of an action.
    pub fn action_size(&self) -> usize {
        ACTION_SIZE
    }

    /// Lower bound of a rotor speed.
    pub fn action_low(&self) -> f64 {
        ACTION_LOW
    }

    /// Upper bound of a rotor speed.
    pub fn action_high(&self) -> f64 {
        ACTION_HIGH
    }

    /// The owned simulator.
    pub fn sim(&self) -> &S {
        &self.sim
    }

    fn distance_to_target(&self) -> f64 {
        self.sim
            .pose()
            .position()
            .iter()
            .zip(self.target_pos.iter())
            .map(|(p, t)| (p - t).abs())
            .sum()
    }
}

impl<S: Simulator> Env for TakeoffTask<S> {
    type Config = TakeoffTaskConfig;
    type Obs = TakeoffObs;
    type Act = RotorSpeeds;
    type Info = TakeoffInfo;

    /// Builds the simulator from the initial condition in `config`.
    ///
    /// `seed` is not used, the initial condition of the simulator fully
    /// determines an episode.
    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        info!("Initialize TakeoffTask");
        info!("target_pos = {:?}", config.target_pos);
        debug!("seed {} is ignored", seed);
        let sim = S::build(&config.initial_conditions())?;
        Self::from_simulator(sim, config)
    }

    /// Advances the simulator `action_repeat` times with the same rotor speeds.
    ///
    /// All sub-steps are executed even if the simulator reports termination
    /// before the last one; only the flag of the last sub-step is returned.
    fn step(&mut self, a: &RotorSpeeds) -> Result<(Step<Self>, Record)> {
        trace!("TakeoffTask::step()");

        let mut reward = 0f64;
        let mut done = false;
        let mut first_done_sub_step = None;

        for i in 0..self.action_repeat {
            done = self.sim.next_timestep(a.speeds())?;
            reward += self.reward();
            self.history.push(&self.sim.pose());
            if done && first_done_sub_step.is_none() {
                first_done_sub_step = Some(i);
            }
        }

        if let Some(i) = first_done_sub_step {
            if i + 1 < self.action_repeat {
                debug!(
                    "simulator terminated at sub-step {} of {}, stepping on",
                    i, self.action_repeat
                );
            }
        }

        let obs = TakeoffObs::from(self.history.flatten());
        let pose = self.sim.pose();
        let mut record = Record::empty();
        record.insert(
            "distance_to_target",
            RecordValue::Scalar(self.distance_to_target() as f32),
        );
        record.insert("z", RecordValue::Scalar(pose.0[2] as f32));
        record.insert("obs", RecordValue::Array1(obs.to_f32_vec()));
        record.insert(
            "pose",
            RecordValue::Array1(pose.0.iter().map(|v| *v as f32).collect()),
        );

        let info = TakeoffInfo {
            sub_steps: self.action_repeat,
            first_done_sub_step,
        };
        let step = Step::new(obs, *a, reward as f32, done, false, info);

        Ok((step, record))
    }

    /// Resets the simulator and returns its pose stacked `action_repeat` times.
    ///
    /// `is_done` is expected to be `None` or to have a single element; an
    /// empty vector resets like `None`.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<TakeoffObs> {
        trace!("TakeoffTask::reset()");

        let reset = match is_done {
            None => true,
            Some(v) => v.first().map_or(true, |d| *d != 0),
        };

        if reset {
            self.sim.reset()?;
            self.history.fill(&self.sim.pose());
        }

        Ok(TakeoffObs::from(self.history.flatten()))
    }

    /// Same as `reset(None)`: every episode starts from the
    /// configured initial condition.
    fn reset_with_index(&mut self, _ix: usize) -> Result<TakeoffObs> {
        self.reset(None)
    }
}
