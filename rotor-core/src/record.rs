//! Records of diagnostics produced while running environments and reports.
//!
//! A [`Record`] is a bag of named [`RecordValue`]s. Environments return one
//! from every step and reporting helpers build one per report; both are handed
//! to a [`Recorder`], which decides where the values end up (memory, a plot
//! backend, nowhere).
//!
//! ```rust
//! use rotor_core::record::{BufferedRecorder, Record, RecordValue, Recorder};
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(1.0));
//! record.insert("obs", RecordValue::Array1(vec![0.0, 0.0, 10.0]));
//!
//! let mut recorder = BufferedRecorder::new();
//! recorder.write(record);
//! assert_eq!(recorder.len(), 1);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::{AggregateRecorder, Recorder};
