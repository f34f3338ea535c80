//! Reports on the predictions of binary classifiers.
//!
//! * [`plot_roc_auc`] computes the ROC curve and the area under it, hands the
//!   curve to a [`Recorder`] for plotting and prints the score.
//! * [`confusion_matrix_report`] binarizes predicted probabilities with a
//!   threshold, then prints the confusion matrix and a per-class
//!   precision/recall/F1 report.
//!
//! The building blocks ([`roc_curve`], [`auc`], [`binarize`],
//! [`confusion_matrix`], [`classification_report`]) are public as well.
//!
//! ```rust
//! use rotor_metrics::{binarize, confusion_matrix};
//!
//! let y_true = [0, 1, 1, 0];
//! let y_pred = binarize(&[0.2, 0.8, 0.4, 0.3], 0.5);
//! let cm = confusion_matrix(&y_true, &y_pred).unwrap();
//! assert_eq!(cm.to_string(), "[[2 0]\n [1 1]]");
//! ```
//!
//! [`Recorder`]: rotor_core::record::Recorder
mod confusion;
mod config;
mod error;
mod report;
mod roc;
pub use config::ReportConfig;
pub use confusion::{binarize, confusion_matrix, ConfusionMatrix};
pub use error::MetricsError;
pub use report::{
    classification_report, confusion_matrix_report, confusion_matrix_report_with_config,
    ClassMetrics, ClassificationReport, ConfusionReport,
};
pub use roc::{auc, plot_roc_auc, roc_curve, RocCurve};
