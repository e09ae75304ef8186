use crate::compiler::tokens::{Token, TokenKind};

/// Positions of the depth-0 operators in a range, bucketed by kind.
#[derive(Debug, Default)]
struct Candidates {
    equal: Vec<usize>,
    plus: Vec<usize>,
    minus: Vec<usize>,
    star: Vec<usize>,
    slash: Vec<usize>,
}

impl Candidates {
    fn record(&mut self, kind: TokenKind, index: usize) {
        if !kind.is_operator() {
            return;
        }

        match kind {
            TokenKind::Equal => self.equal.push(index),
            TokenKind::Plus => self.plus.push(index),
            TokenKind::Minus => self.minus.push(index),
            TokenKind::Star => self.star.push(index),
            TokenKind::Slash => self.slash.push(index),
            _ => {}
        }
    }

    /// Loosest-binding tier first; within a tier the rightmost operator wins so
    /// that the left operand absorbs the chain and evaluation stays left to right.
    fn main_operator(&self) -> Option<usize> {
        let tiers = [
            [self.equal.last().copied(), None],
            [self.plus.last().copied(), self.minus.last().copied()],
            [self.star.last().copied(), self.slash.last().copied()],
        ];

        tiers
            .iter()
            .find_map(|tier| tier.iter().flatten().max().copied())
    }
}

/// Binding tier of an operator, loosest first. Operators in the same tier
/// associate left to right.
pub(crate) fn operator_tier(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Equal => Some(0),
        TokenKind::Plus | TokenKind::Minus => Some(1),
        TokenKind::Star | TokenKind::Slash => Some(2),
        _ => None,
    }
}

/// Finds the operator to split `[p, q]` on. Only operators outside every
/// parenthesis are considered. Returns `None` when there is no such operator.
pub fn select_main_operator(tokens: &[Token], p: usize, q: usize) -> Option<usize> {
    assert!(p <= q, "bad token range [{}, {}]", p, q);

    let mut candidates = Candidates::default();
    let mut depth: isize = 0;

    for (index, token) in tokens.iter().enumerate().take(q).skip(p) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth -= 1,
            _ => {}
        }

        if depth == 0 {
            candidates.record(token.kind, index);
        }
    }

    candidates.main_operator()
}
