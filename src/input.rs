/*!
 * Input Validation
 * Parses and validates the seed values handed to the controller
 */

use crate::core::limits::{MAX_WORKERS, MIN_WORKERS, VALUE_MAX, VALUE_MIN};
use log::debug;
use thiserror::Error;

/// Input validation errors
///
/// All detected before any process or region is created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid amount of arguments: got {0}, expected 1 to 7")]
    BadCount(usize),

    #[error("Non-numeric argument found: {0:?}")]
    NonNumeric(String),

    #[error("Argument out of range found: {0}, expected 0 to 9")]
    OutOfRange(i32),

    #[error("Non-unique argument found: {0}")]
    Duplicate(i32),
}

pub type InputResult<T> = Result<T, InputError>;

/// An ordered sequence of unique seed values, one per worker
///
/// Count is bounded to [`MIN_WORKERS`]..=[`MAX_WORKERS`] and every value
/// lies in [`VALUE_MIN`]..=[`VALUE_MAX`]. Consumed once to seed the
/// shared region; the controller never receives unvalidated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    values: Vec<i32>,
}

impl ValidatedInput {
    /// Parse command-line arguments (without the program path)
    pub fn parse<I, S>(args: I) -> InputResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = Vec::with_capacity(MAX_WORKERS);
        for arg in args {
            let arg = arg.as_ref();
            let parsed: i32 = arg
                .parse()
                .map_err(|_| InputError::NonNumeric(arg.to_string()))?;
            values.push(parsed);
        }
        Self::from_values(values)
    }

    /// Validate an already-parsed sequence of seed values
    pub fn from_values(values: Vec<i32>) -> InputResult<Self> {
        if values.len() < MIN_WORKERS || values.len() > MAX_WORKERS {
            return Err(InputError::BadCount(values.len()));
        }
        for (index, &value) in values.iter().enumerate() {
            if value < VALUE_MIN || value > VALUE_MAX {
                return Err(InputError::OutOfRange(value));
            }
            if values[..index].contains(&value) {
                return Err(InputError::Duplicate(value));
            }
        }
        debug!("Validated {} seed values", values.len());
        Ok(Self { values })
    }

    /// Number of workers this input will fan out to
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Seed values in argument order
    pub fn values(&self) -> &[i32] {
        &self.values
    }
}
