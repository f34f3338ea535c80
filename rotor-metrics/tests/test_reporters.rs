use anyhow::Result;
use rotor_core::record::{BufferedRecorder, NullRecorder, RecordValue};
use rotor_metrics::{
    classification_report, confusion_matrix_report, confusion_matrix_report_with_config,
    plot_roc_auc, MetricsError, ReportConfig,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_plot_roc_auc_writes_curve() -> Result<()> {
    let mut recorder = BufferedRecorder::new();
    let curve = plot_roc_auc(&[0, 0, 1, 1], &[0.1, 0.4, 0.35, 0.8], &mut recorder)?;

    assert!(close(curve.auc(), 0.75));
    assert_eq!(recorder.len(), 1);

    let record = recorder.iter().next().unwrap();
    assert_eq!(record.get_scalar("roc_auc")?, 0.75);
    assert_eq!(record.get_string("roc_label")?, "ROC curve(area = 0.75)");

    let (points, shape) = record.get_array2("roc_curve")?;
    assert_eq!(shape, [5, 2]);
    assert_eq!(
        points,
        vec![0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0]
    );
    assert_eq!(
        record.get("roc_reference"),
        Some(&RecordValue::Array2(vec![0.0, 0.0, 1.0, 1.0], [2, 2]))
    );
    assert!(matches!(
        record.get("timestamp"),
        Some(RecordValue::DateTime(_))
    ));
    Ok(())
}

#[test]
fn test_plot_roc_auc_single_class_fails() {
    let err = plot_roc_auc(&[1, 1, 1], &[0.2, 0.5, 0.9], &mut NullRecorder::new())
        .expect_err("no negative sample");
    assert!(matches!(
        err.downcast_ref::<MetricsError>(),
        Some(MetricsError::UndefinedRate(_, "negative"))
    ));
}

#[test]
fn test_confusion_matrix_report() -> Result<()> {
    let out = confusion_matrix_report(
        &[0, 1, 1, 0],
        &[0.2, 0.8, 0.4, 0.3],
        0.5,
        &["class 0", "class 1"],
    )?;

    assert_eq!(out.y_pred, vec![0, 1, 0, 0]);
    assert_eq!(out.matrix.to_vec(), vec![vec![2, 0], vec![1, 1]]);

    let report = &out.report;
    assert!(close(report.accuracy, 0.75));
    assert!(close(report.classes[0].precision, 2.0 / 3.0));
    assert!(close(report.classes[0].recall, 1.0));
    assert!(close(report.classes[0].f1_score, 0.8));
    assert!(close(report.classes[1].precision, 1.0));
    assert!(close(report.classes[1].recall, 0.5));
    assert!(close(report.macro_avg.f1_score, (0.8 + 2.0 / 3.0) / 2.0));
    assert_eq!(report.weighted_avg.support, 4);

    let record = out.to_record();
    assert_eq!(record.get_scalar("threshold")?, 0.5);
    assert_eq!(record.get_scalar("accuracy")?, 0.75);
    assert_eq!(
        record.get_array2("confusion_matrix")?,
        (vec![2.0, 0.0, 1.0, 1.0], [2, 2])
    );
    assert_eq!(record.get_scalar("f1-score/class 0")?, 0.8);
    Ok(())
}

#[test]
fn test_lower_threshold_changes_predictions() -> Result<()> {
    let config = ReportConfig::default().threshold(0.35);
    let out = confusion_matrix_report_with_config(&[0, 1, 1, 0], &[0.2, 0.8, 0.4, 0.3], &config)?;
    assert_eq!(out.y_pred, vec![0, 1, 1, 0]);
    assert_eq!(out.matrix.to_vec(), vec![vec![2, 0], vec![0, 2]]);
    assert!(close(out.report.accuracy, 1.0));
    Ok(())
}

#[test]
fn test_report_layout() -> Result<()> {
    let report = classification_report(&[0, 1, 1, 0], &[0, 1, 0, 0], &["class 0", "class 1"])?;
    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[0],
        "              precision    recall  f1-score   support"
    );
    assert_eq!(lines[1], "");
    assert_eq!(
        lines[2],
        "     class 0       0.67      1.00      0.80         2"
    );
    assert_eq!(
        lines[3],
        "     class 1       1.00      0.50      0.67         2"
    );
    assert_eq!(lines[4], "");
    assert_eq!(
        lines[5].split_whitespace().collect::<Vec<_>>(),
        vec!["accuracy", "0.75", "4"]
    );
    assert_eq!(
        lines[6],
        "   macro avg       0.83      0.75      0.73         4"
    );
    assert_eq!(
        lines[7],
        "weighted avg       0.83      0.75      0.73         4"
    );

    // the accuracy value is aligned with the f1-score column
    assert_eq!(lines[5].find("0.75"), lines[2].find("0.80"));
    Ok(())
}

#[test]
fn test_report_digits() -> Result<()> {
    let report =
        classification_report(&[0, 1, 1, 0], &[0, 1, 0, 0], &["neg", "pos"])?.digits(3);
    let text = report.to_string();
    assert!(text.contains("0.667"));
    assert!(text.contains("0.833"));
    Ok(())
}

#[test]
fn test_report_zero_division() -> Result<()> {
    let report = classification_report(&[0, 0, 1, 1], &[0, 0, 0, 0], &["class 0", "class 1"])?;
    assert_eq!(report.classes[1].precision, 0.0);
    assert_eq!(report.classes[1].recall, 0.0);
    assert_eq!(report.classes[1].f1_score, 0.0);
    assert!(close(report.classes[0].precision, 0.5));
    assert!(close(report.accuracy, 0.5));
    Ok(())
}

#[test]
fn test_report_class_name_mismatch() {
    assert_eq!(
        classification_report(&[0, 0], &[0, 0], &["class 0", "class 1"]),
        Err(MetricsError::ClassNameMismatch(1, 2))
    );
    let err = confusion_matrix_report(&[0, 1], &[0.1], 0.5, &["a", "b"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<MetricsError>(),
        Some(&MetricsError::LengthMismatch(2, 1))
    );
}

#[test]
fn test_confusion_matrix_report_rejects_nan_probability() {
    let err = confusion_matrix_report(&[0, 1, 1], &[0.2, f64::NAN, 0.7], 0.5, &["a", "b"])
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<MetricsError>(),
        Some(&MetricsError::NonFiniteScore(1))
    );
}
