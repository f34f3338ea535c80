//! Receiver operating characteristic.
#![allow(clippy::float_cmp)]
use crate::MetricsError;
use anyhow::Result;
use chrono::Local;
use rotor_core::record::{Record, RecordValue, Recorder};

/// Points of a ROC curve.
///
/// `thresholds[i]` is the decision threshold giving `(fpr[i], tpr[i])`; the
/// first threshold is `+inf`, where nothing is predicted positive.
#[derive(Clone, Debug, PartialEq)]
pub struct RocCurve {
    /// False positive rates, increasing.
    pub fpr: Vec<f64>,

    /// True positive rates, increasing.
    pub tpr: Vec<f64>,

    /// Decreasing thresholds on the score.
    pub thresholds: Vec<f64>,
}

impl RocCurve {
    /// Area under the curve.
    pub fn auc(&self) -> f64 {
        trapezoid(&self.fpr, &self.tpr)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    /// Returns `true` if the curve has no point.
    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }
}

pub(crate) fn check_lengths(a: usize, b: usize) -> Result<(), MetricsError> {
    if a != b {
        return Err(MetricsError::LengthMismatch(a, b));
    }
    if a == 0 {
        return Err(MetricsError::EmptyInput);
    }
    Ok(())
}

pub(crate) fn check_finite(values: &[f64]) -> Result<(), MetricsError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(MetricsError::NonFiniteScore(i)),
        None => Ok(()),
    }
}

/// Computes the ROC curve of binary labels (`1` is positive) against scores.
///
/// Points lying on a straight line between their neighbours are dropped,
/// since they do not change the shape of the curve.
pub fn roc_curve(y_true: &[usize], y_score: &[f64]) -> Result<RocCurve, MetricsError> {
    check_lengths(y_true.len(), y_score.len())?;
    if let Some(&label) = y_true.iter().find(|&&v| v > 1) {
        return Err(MetricsError::NonBinaryLabel(label));
    }
    check_finite(y_score)?;

    // Descending scores, ties kept in input order
    let mut order: Vec<usize> = (0..y_score.len()).collect();
    order.sort_by(|&a, &b| y_score[b].total_cmp(&y_score[a]));

    // Cumulative counts at the last sample of each distinct score
    let (mut tps, mut fps, mut thresholds) = (vec![], vec![], vec![]);
    let (mut tp, mut fp) = (0usize, 0usize);
    for (k, &i) in order.iter().enumerate() {
        if y_true[i] == 1 {
            tp += 1;
        } else {
            fp += 1;
        }
        let last_of_tie = k + 1 == order.len() || y_score[order[k + 1]] != y_score[i];
        if last_of_tie {
            tps.push(tp as f64);
            fps.push(fp as f64);
            thresholds.push(y_score[i]);
        }
    }

    if tps.len() > 2 {
        let keep: Vec<usize> = (0..tps.len())
            .filter(|&i| {
                i == 0
                    || i + 1 == tps.len()
                    || fps[i + 1] - 2.0 * fps[i] + fps[i - 1] != 0.0
                    || tps[i + 1] - 2.0 * tps[i] + tps[i - 1] != 0.0
            })
            .collect();
        tps = keep.iter().map(|&i| tps[i]).collect();
        fps = keep.iter().map(|&i| fps[i]).collect();
        thresholds = keep.iter().map(|&i| thresholds[i]).collect();
    }

    // The curve starts at (0, 0)
    tps.insert(0, 0.0);
    fps.insert(0, 0.0);
    thresholds.insert(0, f64::INFINITY);

    let n_pos = tps[tps.len() - 1];
    let n_neg = fps[fps.len() - 1];
    if n_neg == 0.0 {
        return Err(MetricsError::UndefinedRate("False positive rate", "negative"));
    }
    if n_pos == 0.0 {
        return Err(MetricsError::UndefinedRate("True positive rate", "positive"));
    }

    Ok(RocCurve {
        fpr: fps.iter().map(|v| v / n_neg).collect(),
        tpr: tps.iter().map(|v| v / n_pos).collect(),
        thresholds,
    })
}

fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(x, y)| (x[1] - x[0]) * (y[1] + y[0]) / 2.0)
        .sum()
}

/// Area under a curve with the trapezoidal rule.
///
/// `x` must be monotonic; for decreasing `x` the area is still positive.
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64, MetricsError> {
    if x.len() != y.len() {
        return Err(MetricsError::LengthMismatch(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(MetricsError::EmptyInput);
    }

    let increasing = x.windows(2).all(|w| w[1] >= w[0]);
    let decreasing = x.windows(2).all(|w| w[1] <= w[0]);
    match (increasing, decreasing) {
        (true, _) => Ok(trapezoid(x, y)),
        (false, true) => Ok(-trapezoid(x, y)),
        _ => Err(MetricsError::NotMonotonic),
    }
}

/// Computes the ROC curve and its area, sends them to `recorder` and prints the score.
///
/// The record written to `recorder` holds
///
/// * `roc_curve` - `[n_points, 2]` array of `(fpr, tpr)`,
/// * `roc_reference` - the diagonal from `(0, 0)` to `(1, 1)`,
/// * `roc_auc` - the area under the curve,
/// * `roc_label` - a legend label such as `ROC curve(area = 0.75)`,
/// * `timestamp`.
///
/// Drawing the curve is the recorder's business.
pub fn plot_roc_auc<R: Recorder>(
    y_true: &[usize],
    y_pred: &[f64],
    recorder: &mut R,
) -> Result<RocCurve> {
    let curve = roc_curve(y_true, y_pred)?;
    let roc_auc = curve.auc();

    let points = curve
        .fpr
        .iter()
        .zip(curve.tpr.iter())
        .flat_map(|(x, y)| [*x as f32, *y as f32])
        .collect::<Vec<_>>();
    let mut record = Record::empty();
    record.insert("roc_curve", RecordValue::Array2(points, [curve.len(), 2]));
    record.insert(
        "roc_reference",
        RecordValue::Array2(vec![0.0, 0.0, 1.0, 1.0], [2, 2]),
    );
    record.insert("roc_auc", RecordValue::Scalar(roc_auc as f32));
    record.insert(
        "roc_label",
        RecordValue::String(format!("ROC curve(area = {:.2})", roc_auc)),
    );
    record.insert("timestamp", RecordValue::DateTime(Local::now()));
    recorder.write(record);

    println!("Score: {:.3}", roc_auc);
    Ok(curve)
}
