use crate::domain::validation::FieldError;
use crate::error::{FormsError, Result};
use std::io::Read;

/// Reads field errors from a CSV source of `field,code` records.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<FieldError>`,
/// trimming whitespace and tolerating flexible record lengths.
pub struct FieldErrorReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> FieldErrorReader<R> {
    /// Creates a new `FieldErrorReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes field errors.
    pub fn field_errors(self) -> impl Iterator<Item = Result<FieldError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FormsError::from))
    }
}
