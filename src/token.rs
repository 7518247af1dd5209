//! Operation Tokens
//!
//! A token is the container of names a caller passes to pick an operation.
//! It has to hold exactly one recognized name before anything is computed.

use crate::error::Error;
use crate::op::Operation;

/// The name used when no operation is given
pub const DEFAULT_OPERATION: &str = "add";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationToken {
    names: Vec<String>,
}
impl OperationToken {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Validate the token and resolve it to an operation.
    ///
    /// The arity check always runs first, so `["what", "add"]` is an arity
    /// error rather than an unknown operation.
    ///
    /// ```rust
    /// use vecop::{Error, Operation, OperationToken};
    ///
    /// let op = OperationToken::from("minus").resolve().unwrap();
    /// assert_eq!(op, Operation::Minus);
    ///
    /// let res = OperationToken::new(vec!["add", "minus"]).resolve();
    /// assert!(matches!(res, Err(Error::InvalidArity { actual: 2 })));
    /// ```
    pub fn resolve(&self) -> Result<Operation, Error> {
        match self.names.as_slice() {
            [name] => Operation::from_name(name),
            names => Err(Error::InvalidArity {
                actual: names.len(),
            }),
        }
    }
}

impl Default for OperationToken {
    fn default() -> Self {
        Self::from(DEFAULT_OPERATION)
    }
}

impl From<&str> for OperationToken {
    fn from(name: &str) -> Self {
        Self::new(vec![name])
    }
}

impl From<String> for OperationToken {
    fn from(name: String) -> Self {
        Self::new(vec![name])
    }
}

impl From<Vec<String>> for OperationToken {
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl From<&[&str]> for OperationToken {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().copied())
    }
}

impl From<Operation> for OperationToken {
    fn from(op: Operation) -> Self {
        Self::from(op.name())
    }
}
