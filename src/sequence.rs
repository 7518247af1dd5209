//! Numeric Sequences

use std::ops::Deref;

use crate::error::Error;
use crate::Numeric;

/// A non-empty, ordered sequence of numeric values
///
/// Sequences are immutable once built. The only way to obtain one is
/// through [`NumericSequence::new`] (or the `TryFrom` impls), which rejects
/// empty input, so every sequence has at least one element to recycle.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSequence<T: Numeric> {
    values: Vec<T>,
}
impl<T: Numeric> NumericSequence<T> {
    /// Build a sequence from a vector of values.
    ///
    /// ```rust
    /// use vecop::NumericSequence;
    ///
    /// let seq = NumericSequence::new(vec![1.0, 2.0]).unwrap();
    /// assert_eq!(seq.len(), 2);
    /// assert!(NumericSequence::<f64>::new(vec![]).is_err());
    /// ```
    pub fn new(values: Vec<T>) -> Result<Self, Error> {
        Self::named("x", values)
    }

    /// Build a sequence, naming the operand in any error.
    pub fn named<S: Into<String>>(operand: S, values: Vec<T>) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::EmptySequence {
                operand: operand.into(),
            });
        }
        Ok(Self { values })
    }

    /// A length-1 sequence
    pub fn scalar(value: T) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// Get the value at `idx`, wrapping around cyclically.
    pub fn recycled(&self, idx: usize) -> T {
        self.values[idx % self.values.len()]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Numeric> Deref for NumericSequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.values
    }
}

impl<T: Numeric> std::convert::TryFrom<Vec<T>> for NumericSequence<T> {
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<Self, Error> {
        Self::new(values)
    }
}

impl<T: Numeric> std::convert::TryFrom<&[T]> for NumericSequence<T> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self, Error> {
        Self::new(values.to_vec())
    }
}

impl<T: Numeric> From<NumericSequence<T>> for Vec<T> {
    fn from(seq: NumericSequence<T>) -> Self {
        seq.into_vec()
    }
}
