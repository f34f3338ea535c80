//! Core functionalities.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::Policy;
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Vectorized environments are not supported, so an object of this trait
/// holds exactly one observation.
pub trait Obs: Clone + Debug {
    /// Returns the number of elements in the flattened observation.
    fn len(&self) -> usize;

    /// Returns `true` if the observation has no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An action of the environment.
pub trait Act: Clone + Debug {
    /// Returns the number of elements in the action.
    fn len(&self) -> usize;

    /// Returns `true` if the action has no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
