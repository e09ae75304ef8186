use serde::{Deserialize, Serialize};
use std::fmt;

use super::EvalError;
use crate::compiler::syntax_error::LexError;

/// Any failure of a full `evaluate` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExprError {
    Lex(LexError),
    Eval(EvalError),
}

pub type ExprResult<T> = Result<T, ExprError>;

impl ExprError {
    pub fn type_string(&self) -> &'static str {
        match self {
            ExprError::Lex(_) => "LEX",
            ExprError::Eval(err) => err.type_string(),
        }
    }

    /// Human readable report; lexing errors point at the failing column.
    pub fn render(&self, source: &str) -> String {
        match self {
            ExprError::Lex(err) => err.render(source),
            ExprError::Eval(err) => err.to_string(),
        }
    }
}

impl From<LexError> for ExprError {
    fn from(err: LexError) -> ExprError {
        ExprError::Lex(err)
    }
}

impl From<EvalError> for ExprError {
    fn from(err: EvalError) -> ExprError {
        ExprError::Eval(err)
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Lex(err) => write!(f, "{}", err),
            ExprError::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExprError::Lex(err) => Some(err),
            ExprError::Eval(err) => Some(err),
        }
    }
}
