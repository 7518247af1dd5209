//! Element-wise arithmetic on numeric sequences, selected by name.
//!
//! ```rust
//! use vecop::{evaluate, NumericSequence, OperationToken};
//!
//! let x = NumericSequence::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let y = NumericSequence::new(vec![10.0]).unwrap();
//! let res = evaluate(&x, &y, &OperationToken::from("add")).unwrap();
//! assert_eq!(res.values(), &[11.0, 12.0, 13.0, 14.0]);
//! ```
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, warn};

mod broadcast;
mod error;
mod op;
mod sequence;
mod token;
pub mod value;

pub use broadcast::{Recycling, Warning};
pub use error::Error;
pub use op::Operation;
pub use sequence::NumericSequence;
pub use token::{OperationToken, DEFAULT_OPERATION};

/// Element types that sequences may hold
///
/// Floats only, so division by zero yields infinity or NaN.
pub trait Numeric: num_traits::Float + Debug + 'static {}
impl Numeric for f32 {}
impl Numeric for f64 {}

/// Evaluation settings
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub recycling: Recycling,
}
impl Options {
    pub fn strict() -> Self {
        Self {
            recycling: Recycling::Strict,
        }
    }
}

/// The outcome of a successful evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<T: Numeric> {
    values: NumericSequence<T>,
    warnings: Vec<Warning>,
}
impl<T: Numeric> Evaluation<T> {
    pub fn values(&self) -> &[T] {
        self.values.as_slice()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_sequence(self) -> NumericSequence<T> {
        self.values
    }
}

/// Apply the operation named by `token` element-wise across `x` and `y`.
///
/// The shorter operand is recycled; see [`Recycling`].
pub fn evaluate<T: Numeric>(
    x: &NumericSequence<T>,
    y: &NumericSequence<T>,
    token: &OperationToken,
) -> Result<Evaluation<T>, Error> {
    evaluate_with(x, y, token, &Options::default())
}

pub fn evaluate_with<T: Numeric>(
    x: &NumericSequence<T>,
    y: &NumericSequence<T>,
    token: &OperationToken,
    options: &Options,
) -> Result<Evaluation<T>, Error> {
    let op = token.resolve()?;
    let shape = broadcast::broadcast(x.len(), y.len(), options.recycling)?;

    let warnings: Vec<Warning> = shape.warning.into_iter().collect();
    warnings
        .iter()
        .for_each(|w| warn!(operation = op.name(), "{}", w));

    let values = broadcast::recycled_pairs(x, y, shape.len)
        .map(|(lhs, rhs)| op.apply(lhs, rhs))
        .collect::<Vec<T>>();
    debug!(
        operation = op.name(),
        symbol = op.symbol(),
        lhs_len = x.len(),
        rhs_len = y.len(),
        len = values.len(),
        "evaluated"
    );

    Ok(Evaluation {
        values: NumericSequence::new(values)?,
        warnings,
    })
}

/// Run an evaluation on JSON operands.
///
/// `x` and `y` are numbers or arrays of numbers. `op` is a string, an array
/// holding a single string, or `null` for the default operation. The token
/// is validated before the operands are looked at.
///
/// ```rust
/// use serde_json::json;
///
/// let res = vecop::apply(&json!([2, 5]), &json!([3, 6]), &json!("multiply")).unwrap();
/// assert_eq!(res, json!([6.0, 30.0]));
/// ```
pub fn apply(x: &Value, y: &Value, op: &Value) -> Result<Value, Error> {
    apply_with(x, y, op, &Options::default())
}

pub fn apply_with(x: &Value, y: &Value, op: &Value, options: &Options) -> Result<Value, Error> {
    let token = value::to_token(op)?;
    token.resolve()?;
    let x = value::to_sequence("x", x)?;
    let y = value::to_sequence("y", y)?;
    evaluate_with(&x, &y, &token, options).map(|res| value::from_sequence(res.values()))
}
