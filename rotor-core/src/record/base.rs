//! Base implementation of records.
use crate::error::RotorError;
use chrono::prelude::{DateTime, Local};
use std::collections::{hash_map::Iter, HashMap};

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, typically a reward or a score.
    Scalar(f32),

    /// A timestamp with local timezone.
    DateTime(DateTime<Local>),

    /// A 1-dimensional array, e.g. a flattened observation.
    Array1(Vec<f32>),

    /// A row-major 2-dimensional array with its shape, e.g. points of a curve.
    Array2(Vec<f32>, [usize; 2]),

    /// A text value.
    String(String),
}

/// A container for storing key-value pairs of various data types.
///
/// ```rust
/// use rotor_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("reward", -0.5);
/// record.insert("label", RecordValue::String("takeoff".to_string()));
///
/// assert_eq!(record.get_scalar("reward").unwrap(), -0.5);
/// assert_eq!(record.get_string("label").unwrap(), "takeoff");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the key-value pairs in the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges two records, consuming both.
    ///
    /// Values of `record` overwrite values of `self` with the same key.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Merges another record into this one in place.
    pub fn merge_inplace(&mut self, record: Record) {
        self.0.extend(record.0);
    }

    /// Gets a scalar value from the record.
    pub fn get_scalar(&self, k: &str) -> Result<f32, RotorError> {
        match self.lookup(k)? {
            RecordValue::Scalar(v) => Ok(*v),
            _ => Err(RotorError::RecordValueTypeError("Scalar".to_string())),
        }
    }

    /// Gets a 1-dimensional array from the record.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, RotorError> {
        match self.lookup(k)? {
            RecordValue::Array1(v) => Ok(v.clone()),
            _ => Err(RotorError::RecordValueTypeError("Array1".to_string())),
        }
    }

    /// Gets a 2-dimensional array and its shape from the record.
    pub fn get_array2(&self, k: &str) -> Result<(Vec<f32>, [usize; 2]), RotorError> {
        match self.lookup(k)? {
            RecordValue::Array2(v, s) => Ok((v.clone(), *s)),
            _ => Err(RotorError::RecordValueTypeError("Array2".to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, RotorError> {
        match self.lookup(k)? {
            RecordValue::String(s) => Ok(s.clone()),
            _ => Err(RotorError::RecordValueTypeError("String".to_string())),
        }
    }

    /// Returns `true` if the record contains no key-value pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of key-value pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn lookup(&self, k: &str) -> Result<&RecordValue, RotorError> {
        self.0
            .get(k)
            .ok_or_else(|| RotorError::RecordKeyError(k.to_string()))
    }
}
