//! Configuration of the confusion-matrix report.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`confusion_matrix_report_with_config`](crate::confusion_matrix_report_with_config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Probabilities at or above the threshold are predicted as class `1`.
    pub threshold: f64,

    /// Human-readable names of the classes, in label order.
    pub class_names: Vec<String>,

    /// Number of digits of the values in the classification report.
    pub digits: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            class_names: vec!["class 0".to_string(), "class 1".to_string()],
            digits: 2,
        }
    }
}

impl ReportConfig {
    /// Sets the decision threshold.
    pub fn threshold(mut self, v: f64) -> Self {
        self.threshold = v;
        self
    }

    /// Sets the class names.
    pub fn class_names<S: AsRef<str>>(mut self, v: &[S]) -> Self {
        self.class_names = v.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Sets the number of digits in the report.
    pub fn digits(mut self, v: usize) -> Self {
        self.digits = v;
        self
    }

    /// Constructs [`ReportConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`ReportConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
