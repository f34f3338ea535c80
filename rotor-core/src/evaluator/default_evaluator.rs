//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{
    record::{Record, RecordValue},
    Env, Policy,
};
use anyhow::Result;

/// Runs a fixed number of episodes and reports the average return.
///
/// The `i`-th episode starts from [`Env::reset_with_index`] with index `i`.
pub struct DefaultEvaluator<E: Env> {
    n_episodes: usize,

    /// Safety net for environments that never report the end of an episode.
    max_steps: Option<usize>,

    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    /// Writes `Episode return` (average over episodes) and `Episode length`
    /// (average number of steps) into the returned record.
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let mut r_total = 0f32;
        let mut n_steps = 0usize;

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset_with_index(ix)?;
            let mut count = 0;

            loop {
                let act = policy.sample(&prev_obs);
                let (step, _) = self.env.step(&act)?;
                r_total += step.reward;
                count += 1;
                if step.is_done() || self.max_steps.map_or(false, |m| count >= m) {
                    break;
                }
                prev_obs = step.obs;
            }
            n_steps += count;
        }

        let n = self.n_episodes.max(1) as f32;
        Ok(Record::from_slice(&[
            ("Episode return", RecordValue::Scalar(r_total / n)),
            ("Episode length", RecordValue::Scalar(n_steps as f32 / n)),
        ]))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`], building its own environment.
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            max_steps: None,
            env: E::build(config, seed)?,
        })
    }

    /// Caps the number of steps of each evaluation episode.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = Some(v);
        self
    }
}
