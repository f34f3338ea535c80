//! Confusion matrix.
use crate::{roc::check_lengths, MetricsError};
use ndarray::Array2;
use std::{collections::BTreeSet, fmt};

/// Turns probabilities into class predictions, `1` when `p >= threshold`.
pub fn binarize(y_prob: &[f64], threshold: f64) -> Vec<usize> {
    y_prob.iter().map(|&p| (p >= threshold) as usize).collect()
}

/// Unnormalized confusion matrix.
///
/// Row `i` counts the samples whose true label is `labels[i]`, column `j`
/// those predicted as `labels[j]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionMatrix {
    labels: Vec<usize>,
    counts: Array2<usize>,
}

impl ConfusionMatrix {
    /// Sorted labels indexing rows and columns.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// The counts.
    pub fn counts(&self) -> &Array2<usize> {
        &self.counts
    }

    /// Number of samples with true label `labels[i]` predicted as `labels[j]`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.counts[[i, j]]
    }

    /// Counts as nested vectors, row by row.
    pub fn to_vec(&self) -> Vec<Vec<usize>> {
        self.counts.rows().into_iter().map(|r| r.to_vec()).collect()
    }

    /// Number of samples.
    pub fn total(&self) -> usize {
        self.counts.sum()
    }

    /// Number of correctly classified samples.
    pub fn correct(&self) -> usize {
        self.counts.diag().sum()
    }
}

// Same layout as numpy prints integer matrices.
impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .counts
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        write!(f, "[")?;
        for (i, row) in self.counts.rows().into_iter().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            let cells = row
                .iter()
                .map(|v| format!("{:>width$}", v, width = width))
                .collect::<Vec<_>>();
            write!(f, "[{}]", cells.join(" "))?;
        }
        write!(f, "]")
    }
}

/// Computes the confusion matrix of predictions against true labels.
///
/// The labels are the sorted union of the values in `y_true` and `y_pred`.
pub fn confusion_matrix(
    y_true: &[usize],
    y_pred: &[usize],
) -> Result<ConfusionMatrix, MetricsError> {
    check_lengths(y_true.len(), y_pred.len())?;

    let labels: Vec<usize> = y_true
        .iter()
        .chain(y_pred.iter())
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let index = |v: &usize| labels.binary_search(v).unwrap_or_default();

    let mut counts = Array2::zeros((labels.len(), labels.len()));
    for (t, p) in y_true.iter().zip(y_pred.iter()) {
        counts[[index(t), index(p)]] += 1;
    }

    Ok(ConfusionMatrix { labels, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize_threshold_is_inclusive() {
        assert_eq!(binarize(&[0.2, 0.8, 0.4, 0.3], 0.5), vec![0, 1, 0, 0]);
        assert_eq!(binarize(&[0.5, 0.49], 0.5), vec![1, 0]);
    }

    #[test]
    fn test_confusion_matrix() {
        let y_pred = binarize(&[0.2, 0.8, 0.4, 0.3], 0.5);
        let cm = confusion_matrix(&[0, 1, 1, 0], &y_pred).unwrap();
        assert_eq!(cm.labels(), &[0, 1]);
        assert_eq!(cm.to_vec(), vec![vec![2, 0], vec![1, 1]]);
        assert_eq!(cm.total(), 4);
        assert_eq!(cm.correct(), 3);
        assert_eq!(cm.to_string(), "[[2 0]\n [1 1]]");
    }

    #[test]
    fn test_confusion_matrix_single_class() {
        let cm = confusion_matrix(&[0, 0, 0], &[0, 0, 0]).unwrap();
        assert_eq!(cm.to_vec(), vec![vec![3]]);
    }

    #[test]
    fn test_display_pads_columns() {
        let y_true = vec![0; 12].into_iter().chain(vec![1]).collect::<Vec<_>>();
        let y_pred = vec![0; 13];
        let cm = confusion_matrix(&y_true, &y_pred).unwrap();
        assert_eq!(cm.to_string(), "[[12  0]\n [ 1  0]]");
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            confusion_matrix(&[0, 1], &[0]),
            Err(MetricsError::LengthMismatch(2, 1))
        );
    }
}
