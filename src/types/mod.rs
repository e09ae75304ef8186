pub mod eval_error;
pub mod expr_error;

pub use eval_error::{EvalError, EvalResult};
pub use expr_error::{ExprError, ExprResult};

/// The machine word every expression evaluates to.
pub type Word = u32;
