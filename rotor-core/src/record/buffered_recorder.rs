use super::{AggregateRecorder, Record, Recorder};

/// Buffered recorder.
///
/// This is used for keeping sequences of observations, rewards and report
/// values in memory, e.g. during evaluation runs and in tests.
#[derive(Debug, Default)]
pub struct BufferedRecorder {
    buf: Vec<Record>,
    stored: Vec<Record>,
}

impl BufferedRecorder {
    /// Construct the recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over the written records.
    pub fn iter(&self) -> std::slice::Iter<Record> {
        self.buf.iter()
    }

    /// Returns the number of written records.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no record has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Recorder for BufferedRecorder {
    /// Write a [`Record`] to the buffer.
    fn write(&mut self, record: Record) {
        self.buf.push(record);
    }
}

impl AggregateRecorder for BufferedRecorder {
    fn store(&mut self, record: Record) {
        self.stored.push(record);
    }

    /// Merges the stored records, later values winning, and writes the result.
    fn flush(&mut self) {
        if self.stored.is_empty() {
            return;
        }
        let merged = self
            .stored
            .drain(..)
            .fold(Record::empty(), |acc, r| acc.merge(r));
        self.write(merged);
    }
}
