//! Recycling of operands with different lengths
//!
//! The shorter operand is reused cyclically until it matches the longer
//! one. Lengths that are not a whole multiple of each other still recycle,
//! but raise a [`Warning`] (or an error under [`Recycling::Strict`]).

use std::fmt;

use crate::error::Error;
use crate::sequence::NumericSequence;
use crate::Numeric;

/// What to do when neither operand length divides the other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recycling {
    /// Recycle anyway and report a warning
    Warn,
    /// Refuse to compute
    Strict,
}
impl Default for Recycling {
    fn default() -> Self {
        Self::Warn
    }
}

/// Non-fatal diagnostics raised during an evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    BroadcastMismatch { longer: usize, shorter: usize },
}
impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BroadcastMismatch { longer, shorter } => write!(
                f,
                "longer object length {} is not a multiple of shorter object length {}",
                longer, shorter
            ),
        }
    }
}

/// The agreed shape of a binary element-wise computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Broadcast {
    pub len: usize,
    pub warning: Option<Warning>,
}

/// Work out the output length for two operand lengths.
///
/// Both lengths are at least one, since sequences cannot be empty.
pub fn broadcast(lhs: usize, rhs: usize, recycling: Recycling) -> Result<Broadcast, Error> {
    let (longer, shorter) = if lhs >= rhs { (lhs, rhs) } else { (rhs, lhs) };
    if longer % shorter == 0 {
        return Ok(Broadcast {
            len: longer,
            warning: None,
        });
    }
    match recycling {
        Recycling::Strict => Err(Error::BroadcastMismatch { longer, shorter }),
        Recycling::Warn => Ok(Broadcast {
            len: longer,
            warning: Some(Warning::BroadcastMismatch { longer, shorter }),
        }),
    }
}

/// Iterate over `len` pairs, reusing each operand cyclically.
pub fn recycled_pairs<'a, T: Numeric>(
    lhs: &'a NumericSequence<T>,
    rhs: &'a NumericSequence<T>,
    len: usize,
) -> impl Iterator<Item = (T, T)> + 'a {
    (0..len).map(move |idx| (lhs.recycled(idx), rhs.recycled(idx)))
}

#[cfg(test)]
mod test_broadcast {
    use super::*;

    #[test]
    fn test_equal_lengths() {
        let shape = broadcast(3, 3, Recycling::Strict).unwrap();
        assert_eq!(shape.len, 3);
        assert_eq!(shape.warning, None);
    }

    #[test]
    fn test_multiple_lengths_either_side() {
        assert_eq!(broadcast(1, 4, Recycling::Strict).unwrap().len, 4);
        assert_eq!(broadcast(6, 2, Recycling::Strict).unwrap().len, 6);
        assert_eq!(broadcast(6, 2, Recycling::Warn).unwrap().warning, None);
    }

    #[test]
    fn test_mismatch_warns() {
        let shape = broadcast(2, 3, Recycling::Warn).unwrap();
        assert_eq!(shape.len, 3);
        assert_eq!(
            shape.warning,
            Some(Warning::BroadcastMismatch {
                longer: 3,
                shorter: 2
            })
        );
    }

    #[test]
    fn test_mismatch_strict() {
        match broadcast(5, 3, Recycling::Strict) {
            Err(Error::BroadcastMismatch { longer, shorter }) => {
                assert_eq!((longer, shorter), (5, 3))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_recycled_pairs() {
        let lhs = NumericSequence::new(vec![1.0, 2.0, 3.0]).unwrap();
        let rhs = NumericSequence::new(vec![10.0, 20.0]).unwrap();
        let pairs: Vec<(f64, f64)> = recycled_pairs(&lhs, &rhs, 3).collect();
        assert_eq!(pairs, vec![(1.0, 10.0), (2.0, 20.0), (3.0, 10.0)]);
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::BroadcastMismatch {
            longer: 3,
            shorter: 2,
        };
        assert_eq!(
            warning.to_string(),
            "longer object length 3 is not a multiple of shorter object length 2"
        );
    }
}
