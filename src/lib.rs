//! sdb-expr evaluates the arithmetic expressions a user types into a
//! debugger monitor (`p 16 + 4 * 2` style commands, after the shell has
//! expanded any register or memory references into plain numbers).
//!
//! An expression is split into tokens by an ordered table of regex rules and
//! then evaluated recursively: each token range is divided at its main
//! operator, the loosest-binding top-level operator furthest to the right,
//! which gives the usual precedence and left-to-right associativity for
//! `+ - * /`. Results are 32 bit machine words.
//!
//! The basic example of how to use:
//! ```
//! use sdb_expr::evaluate;
//!
//! assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
//! assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20);
//! assert!(evaluate("5 / 0").is_err());
//! ```
//!
//! A tokenized expression can be kept around and evaluated again, with
//! different options if needed:
//! ```
//! use sdb_expr::{EvalOptions, OverflowPolicy, Program};
//!
//! let prog = Program::from_source("0 - 1").unwrap();
//!
//! assert_eq!(prog.eval().unwrap(), u32::MAX);
//! assert!(prog
//!     .eval_with(&EvalOptions::default().with_overflow(OverflowPolicy::Checked))
//!     .is_err());
//! ```
mod compiler;
mod interp;
mod program;
mod types;

// Export some public interface
pub mod utils;
pub use compiler::{
    rule_tokenizer::{tokenize, tokenize_with, RuleTokenizer},
    rules::{Rule, RuleMatch, RuleSet, STANDARD_RULES},
    source_range::SourceRange,
    syntax_error::LexError,
    tokenizer::{collect_tokens, Tokenizer},
    tokens::{Token, TokenKind},
};
pub use interp::{is_balanced, is_fully_parenthesized, select_main_operator, Evaluator};
pub use program::{evaluate, evaluate_with, EvalOptions, OverflowPolicy, Program};
pub use types::{EvalError, EvalResult, ExprError, ExprResult, Word};

// Some re-exports to allow a consistent use of serde
pub use serde;
pub use serde_json;

#[cfg(test)]
mod tests;
