use serde::{Deserialize, Serialize};

use crate::types::{EvalError, EvalResult, Word};

/// How `+`, `-` and `*` behave when the result does not fit in a [`Word`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Modular word arithmetic, the way the target machine computes it.
    #[default]
    Wrapping,
    /// Report [`EvalError::NumericOverflow`].
    Checked,
}

impl OverflowPolicy {
    pub fn add(&self, lhs: Word, rhs: Word) -> EvalResult<Word> {
        match self {
            OverflowPolicy::Wrapping => Ok(lhs.wrapping_add(rhs)),
            OverflowPolicy::Checked => lhs.checked_add(rhs).ok_or(EvalError::NumericOverflow),
        }
    }

    pub fn sub(&self, lhs: Word, rhs: Word) -> EvalResult<Word> {
        match self {
            OverflowPolicy::Wrapping => Ok(lhs.wrapping_sub(rhs)),
            OverflowPolicy::Checked => lhs.checked_sub(rhs).ok_or(EvalError::NumericOverflow),
        }
    }

    pub fn mul(&self, lhs: Word, rhs: Word) -> EvalResult<Word> {
        match self {
            OverflowPolicy::Wrapping => Ok(lhs.wrapping_mul(rhs)),
            OverflowPolicy::Checked => lhs.checked_mul(rhs).ok_or(EvalError::NumericOverflow),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalOptions {
    pub overflow: OverflowPolicy,
    pub max_depth: usize,
}

impl EvalOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    pub fn new() -> EvalOptions {
        EvalOptions {
            overflow: OverflowPolicy::default(),
            max_depth: EvalOptions::DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> EvalOptions {
        self.overflow = overflow;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> EvalOptions {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions::new()
    }
}
