//! Operators
//!
//! This module contains the global operator map, which defines the available
//! element-wise operations and the names they are selected by.

use phf::phf_map;
use std::fmt;

use crate::error::Error;
use crate::Numeric;

pub static OPERATOR_MAP: phf::Map<&'static str, Operator> = phf_map! {
    "add" => Operator {
        name: "add",
        symbol: "+",
        operation: Operation::Add,
    },
    "minus" => Operator {
        name: "minus",
        symbol: "-",
        operation: Operation::Minus,
    },
    "multiply" => Operator {
        name: "multiply",
        symbol: "*",
        operation: Operation::Multiply,
    },
    "divide" => Operator {
        name: "divide",
        symbol: "/",
        operation: Operation::Divide,
    },
};

/// A resolved element-wise operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Minus,
    Multiply,
    Divide,
}
impl Operation {
    /// Look up an operation by the name it is selected with
    ///
    /// ```rust
    /// use vecop::Operation;
    ///
    /// assert_eq!(Operation::from_name("divide").unwrap(), Operation::Divide);
    /// assert!(Operation::from_name("what").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, Error> {
        OPERATOR_MAP
            .get(name)
            .map(|op| op.operation)
            .ok_or_else(|| Error::UnknownOperation { key: name.into() })
    }

    /// Apply the operation to a single pair of values.
    ///
    /// Division by zero is not an error: it yields infinity or NaN.
    pub fn apply<T: Numeric>(self, lhs: T, rhs: T) -> T {
        match self {
            Self::Add => lhs + rhs,
            Self::Minus => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    fn operator(self) -> &'static Operator {
        match self {
            Self::Add => &OPERATOR_MAP["add"],
            Self::Minus => &OPERATOR_MAP["minus"],
            Self::Multiply => &OPERATOR_MAP["multiply"],
            Self::Divide => &OPERATOR_MAP["divide"],
        }
    }

    pub fn name(self) -> &'static str {
        self.operator().name
    }

    pub fn symbol(self) -> &'static str {
        self.operator().symbol
    }
}
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct Operator {
    name: &'static str,
    symbol: &'static str,
    operation: Operation,
}
impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .finish()
    }
}

#[cfg(test)]
mod test_operators {
    use super::*;

    /// All operator names must match their keys
    #[test]
    fn test_operator_map_names() {
        OPERATOR_MAP
            .into_iter()
            .for_each(|(k, op)| assert_eq!(*k, op.name))
    }

    /// Every operation resolves back to its own table entry
    #[test]
    fn test_operation_round_trips_through_map() {
        OPERATOR_MAP.into_iter().for_each(|(k, op)| {
            let resolved = Operation::from_name(k).unwrap();
            assert_eq!(resolved, op.operation);
            assert_eq!(resolved.name(), *k);
            assert_eq!(resolved.symbol(), op.symbol);
        })
    }

    #[test]
    fn test_unknown_name() {
        match Operation::from_name("what") {
            Err(Error::UnknownOperation { key }) => assert_eq!(key, "what"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(Operation::from_name("Add").is_err());
        assert!(Operation::from_name(" add").is_err());
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Minus.apply(2.0, 3.0), -1.0);
        assert_eq!(Operation::Multiply.apply(2.0_f32, 3.0), 6.0);
        assert_eq!(Operation::Divide.apply(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        assert_eq!(Operation::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::Divide.apply(0.0_f64, 0.0).is_nan());
    }
}
