use std::cell::Cell;

use crate::types::{EvalError, EvalResult};

/// Tracks how deep the evaluator has recursed and refuses to go past `limit`.
pub struct DepthCounter {
    depth: Cell<usize>,
    limit: usize,
}

/// Holds one level of depth; releases it on drop.
pub struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
}

impl DepthCounter {
    pub fn new(limit: usize) -> DepthCounter {
        DepthCounter {
            depth: Cell::new(0),
            limit,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn enter<'a>(&'a self) -> EvalResult<DepthGuard<'a>> {
        let depth = self.depth.get();
        if depth >= self.limit {
            return Err(EvalError::DepthExceeded {
                limit: self.limit(),
            });
        }

        self.depth.set(depth + 1);
        Ok(DepthGuard { depth: &self.depth })
    }
}

impl<'a> DepthGuard<'a> {
    pub fn depth(&self) -> usize {
        self.depth.get()
    }
}

impl<'a> Drop for DepthGuard<'a> {
    fn drop(&mut self) {
        let depth = self.depth.get();
        self.depth.set(depth - 1);
    }
}
