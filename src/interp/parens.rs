use crate::compiler::tokens::{Token, TokenKind};

/// Walks the half-open scan `[p, q)` and reports whether every `)` closes an
/// earlier `(` and nothing is left open.
pub fn is_balanced(tokens: &[Token], p: usize, q: usize) -> bool {
    assert!(p <= q, "bad token range [{}, {})", p, q);

    let mut depth: usize = 0;
    for token in &tokens[p..q] {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    depth == 0
}

/// True when `tokens[p]` and `tokens[q]` are a matching pair that wraps the
/// whole inclusive range, e.g. `(1+2)` but not `(1)+(2)`.
pub fn is_fully_parenthesized(tokens: &[Token], p: usize, q: usize) -> bool {
    assert!(p <= q, "bad token range [{}, {}]", p, q);

    tokens[p].kind == TokenKind::LParen
        && tokens[q].kind == TokenKind::RParen
        && is_balanced(tokens, p + 1, q)
}
