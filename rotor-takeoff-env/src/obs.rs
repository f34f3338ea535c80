//! Observation of [`TakeoffTask`](crate::TakeoffTask).
use crate::POSE_SIZE;
use ndarray::{s, Array1, ArrayView1};
use rotor_core::Obs;

/// Stacked poses of the last `action_repeat` simulator sub-steps.
#[derive(Clone, Debug, PartialEq)]
pub struct TakeoffObs(pub Array1<f64>);

impl TakeoffObs {
    /// Number of stacked poses.
    pub fn n_poses(&self) -> usize {
        self.0.len() / POSE_SIZE
    }

    /// The `i`-th stacked pose, `0` being the oldest.
    pub fn pose_block(&self, i: usize) -> ArrayView1<f64> {
        self.0.slice(s![i * POSE_SIZE..(i + 1) * POSE_SIZE])
    }

    /// Observation as a vector of `f32`, the element type of records.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.0.iter().map(|v| *v as f32).collect()
    }
}

impl Obs for TakeoffObs {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Array1<f64>> for TakeoffObs {
    fn from(obs: Array1<f64>) -> Self {
        Self(obs)
    }
}
