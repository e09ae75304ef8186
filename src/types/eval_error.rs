use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvalError {
    /// Unbalanced parentheses, a lone non-literal token, a missing operand,
    /// or a range with no top-level operator.
    MalformedExpression,
    /// The operator is recognized but has no arithmetic meaning.
    UnsupportedOperator,
    DivisionByZero,
    /// A literal or an intermediate result does not fit in a word.
    NumericOverflow,
    DepthExceeded { limit: usize },
}

pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    pub fn type_string(&self) -> &'static str {
        use EvalError::*;

        match self {
            MalformedExpression => "MALFORMED",
            UnsupportedOperator => "UNSUPPORTED",
            DivisionByZero => "DIV_BY_ZERO",
            NumericOverflow => "OVERFLOW",
            DepthExceeded { .. } => "DEPTH",
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EvalError::*;

        match self {
            MalformedExpression => write!(f, "malformed expression"),
            UnsupportedOperator => write!(f, "unsupported operator"),
            DivisionByZero => write!(f, "division by zero"),
            NumericOverflow => write!(f, "numeric overflow"),
            DepthExceeded { limit } => write!(f, "expression nested deeper than {}", limit),
        }
    }
}

impl std::error::Error for EvalError {}
