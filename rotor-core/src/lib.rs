#![warn(missing_docs)]
//! Core abstractions for the rotor takeoff task.
//!
//! An environment ([`Env`]) emits [`Step`] objects when it is driven by a
//! [`Policy`]. Diagnostics produced along the way are collected in
//! [`record::Record`]s and handed to a [`record::Recorder`].
pub mod error;
pub mod evaluator;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Env, Info, Obs, Policy, Step};
pub use evaluator::{DefaultEvaluator, Evaluator};
