//! Classification report and the confusion-matrix reporter.
use crate::{
    binarize, confusion_matrix,
    roc::{check_finite, check_lengths},
    ConfusionMatrix, MetricsError, ReportConfig,
};
use anyhow::Result;
use log::warn;
use rotor_core::record::{Record, RecordValue};
use std::fmt;

const HEADERS: [&str; 4] = ["precision", "recall", "f1-score", "support"];
const MACRO_AVG: &str = "macro avg";
const WEIGHTED_AVG: &str = "weighted avg";

/// Precision, recall, F1 score and support of a class or of an average.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassMetrics {
    /// Class name or name of the average.
    pub name: String,

    /// Precision.
    pub precision: f64,

    /// Recall.
    pub recall: f64,

    /// Harmonic mean of precision and recall.
    pub f1_score: f64,

    /// Number of samples whose true label is the class.
    pub support: usize,
}

/// Per-class precision, recall and F1 score with their averages.
///
/// Formatting the report with `{}` gives the usual tabular layout:
///
/// ```text
///               precision    recall  f1-score   support
///
///      class 0       0.67      1.00      0.80         2
///      class 1       1.00      0.50      0.67         2
///
///     accuracy                           0.75         4
///    macro avg       0.83      0.75      0.73         4
/// weighted avg       0.83      0.75      0.73         4
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationReport {
    /// Metrics of each class, in label order.
    pub classes: Vec<ClassMetrics>,

    /// Fraction of correctly classified samples.
    pub accuracy: f64,

    /// Unweighted mean over classes.
    pub macro_avg: ClassMetrics,

    /// Mean over classes weighted by support.
    pub weighted_avg: ClassMetrics,

    digits: usize,
}

impl ClassificationReport {
    /// Sets the number of digits used when formatting.
    pub fn digits(mut self, v: usize) -> Self {
        self.digits = v;
        self
    }

    /// Total number of samples.
    pub fn support(&self) -> usize {
        self.weighted_avg.support
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        m: &ClassMetrics,
        width: usize,
    ) -> fmt::Result {
        let d = self.digits;
        write!(f, "{:>w$} ", m.name, w = width)?;
        for v in [m.precision, m.recall, m.f1_score] {
            write!(f, " {:>9.d$}", v, d = d)?;
        }
        writeln!(f, " {:>9}", m.support)
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(|c| c.name.len())
            .chain([WEIGHTED_AVG.len(), self.digits])
            .max()
            .unwrap_or_default();

        write!(f, "{:>w$} ", "", w = width)?;
        for h in HEADERS {
            write!(f, " {:>9}", h)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        for m in self.classes.iter() {
            self.write_row(f, m, width)?;
        }
        writeln!(f)?;

        write!(f, "{:>w$} ", "accuracy", w = width)?;
        write!(f, " {:>9} {:>9}", "", "")?;
        writeln!(
            f,
            " {:>9.d$} {:>9}",
            self.accuracy,
            self.support(),
            d = self.digits
        )?;
        self.write_row(f, &self.macro_avg, width)?;
        self.write_row(f, &self.weighted_avg, width)
    }
}

fn ratio(num: usize, den: usize, what: &str) -> f64 {
    if den == 0 {
        warn!(
            "{} is ill-defined and being set to 0.0 in labels with no {} samples",
            what,
            if what == "Precision" { "predicted" } else { "true" }
        );
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Builds the classification report of predictions against true labels.
///
/// `class_names` names the sorted labels found in `y_true` and `y_pred`.
/// Undefined precision or recall (no predicted or no true sample) is reported
/// as `0.0` with a warning.
pub fn classification_report<S: AsRef<str>>(
    y_true: &[usize],
    y_pred: &[usize],
    class_names: &[S],
) -> Result<ClassificationReport, MetricsError> {
    let cm = confusion_matrix(y_true, y_pred)?;
    let n_classes = cm.labels().len();
    if class_names.len() != n_classes {
        return Err(MetricsError::ClassNameMismatch(n_classes, class_names.len()));
    }

    let counts = cm.counts();
    let classes: Vec<ClassMetrics> = class_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let tp = counts[[i, i]];
            let precision = ratio(tp, counts.column(i).sum(), "Precision");
            let recall = ratio(tp, counts.row(i).sum(), "Recall");
            let f1_score = if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };
            ClassMetrics {
                name: name.as_ref().to_string(),
                precision,
                recall,
                f1_score,
                support: counts.row(i).sum(),
            }
        })
        .collect();

    let total = cm.total();
    let n = n_classes as f64;
    let macro_avg = ClassMetrics {
        name: MACRO_AVG.to_string(),
        precision: classes.iter().map(|c| c.precision).sum::<f64>() / n,
        recall: classes.iter().map(|c| c.recall).sum::<f64>() / n,
        f1_score: classes.iter().map(|c| c.f1_score).sum::<f64>() / n,
        support: total,
    };
    let weighted = |g: fn(&ClassMetrics) -> f64| {
        classes
            .iter()
            .map(|c| g(c) * c.support as f64)
            .sum::<f64>()
            / total as f64
    };
    let weighted_avg = ClassMetrics {
        name: WEIGHTED_AVG.to_string(),
        precision: weighted(|c| c.precision),
        recall: weighted(|c| c.recall),
        f1_score: weighted(|c| c.f1_score),
        support: total,
    };

    Ok(ClassificationReport {
        accuracy: cm.correct() as f64 / total as f64,
        classes,
        macro_avg,
        weighted_avg,
        digits: 2,
    })
}

/// Output of the confusion-matrix reporter.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionReport {
    /// Decision threshold applied to the probabilities.
    pub threshold: f64,

    /// Binarized predictions.
    pub y_pred: Vec<usize>,

    /// Unnormalized confusion matrix.
    pub matrix: ConfusionMatrix,

    /// Per-class report.
    pub report: ClassificationReport,
}

impl ConfusionReport {
    /// Values of the report as a [`Record`].
    ///
    /// Holds `threshold`, `accuracy`, `confusion_matrix` and
    /// `f1-score/<class name>` for every class.
    pub fn to_record(&self) -> Record {
        let counts = self.matrix.counts();
        let mut record = Record::empty();
        record.insert("threshold", RecordValue::Scalar(self.threshold as f32));
        record.insert("accuracy", RecordValue::Scalar(self.report.accuracy as f32));
        record.insert(
            "confusion_matrix",
            RecordValue::Array2(
                counts.iter().map(|v| *v as f32).collect(),
                [counts.nrows(), counts.ncols()],
            ),
        );
        for c in self.report.classes.iter() {
            record.insert(
                format!("f1-score/{}", c.name),
                RecordValue::Scalar(c.f1_score as f32),
            );
        }
        record
    }
}

/// Binarizes `y_prob` with `threshold`, then prints the confusion matrix and
/// the classification report.
pub fn confusion_matrix_report<S: AsRef<str>>(
    y_true: &[usize],
    y_prob: &[f64],
    threshold: f64,
    class_names: &[S],
) -> Result<ConfusionReport> {
    let config = ReportConfig::default()
        .threshold(threshold)
        .class_names(class_names);
    confusion_matrix_report_with_config(y_true, y_prob, &config)
}

/// Same as [`confusion_matrix_report`], with the parameters in a [`ReportConfig`].
pub fn confusion_matrix_report_with_config(
    y_true: &[usize],
    y_prob: &[f64],
    config: &ReportConfig,
) -> Result<ConfusionReport> {
    check_lengths(y_true.len(), y_prob.len())?;
    check_finite(y_prob)?;

    let y_pred = binarize(y_prob, config.threshold);
    let matrix = confusion_matrix(y_true, &y_pred)?;
    println!("Confusion matrix:\n {} \n", matrix);

    let report = classification_report(y_true, &y_pred, config.class_names.as_slice())?
        .digits(config.digits);
    println!("{}", report);

    Ok(ConfusionReport {
        threshold: config.threshold,
        y_pred,
        matrix,
        report,
    })
}
