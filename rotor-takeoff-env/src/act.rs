//! Action of [`TakeoffTask`](crate::TakeoffTask).
use crate::{ACTION_HIGH, ACTION_LOW, ACTION_SIZE};
use rotor_core::Act;

/// Speeds of the four rotors.
///
/// The nominal range of each speed is `[ACTION_LOW, ACTION_HIGH]`, but the
/// task passes the values to the simulator as they are. Use
/// [`RotorSpeeds::clipped`] in a policy to stay within the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotorSpeeds(pub [f64; 4]);

impl RotorSpeeds {
    /// Constructs an action.
    pub fn new(speeds: [f64; 4]) -> Self {
        Self(speeds)
    }

    /// The same speed for all rotors.
    pub fn uniform(speed: f64) -> Self {
        Self([speed; ACTION_SIZE])
    }

    /// Rotor speeds handed to the simulator.
    pub fn speeds(&self) -> &[f64; 4] {
        &self.0
    }

    /// Returns a copy with every speed clamped into `[ACTION_LOW, ACTION_HIGH]`.
    pub fn clipped(&self) -> Self {
        let mut speeds = self.0;
        speeds
            .iter_mut()
            .for_each(|v| *v = v.clamp(ACTION_LOW, ACTION_HIGH));
        Self(speeds)
    }
}

impl Act for RotorSpeeds {
    fn len(&self) -> usize {
        ACTION_SIZE
    }
}

impl From<[f64; 4]> for RotorSpeeds {
    fn from(speeds: [f64; 4]) -> Self {
        Self(speeds)
    }
}
