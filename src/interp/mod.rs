mod main_op;
mod parens;

pub use main_op::select_main_operator;
use main_op::operator_tier;
pub use parens::{is_balanced, is_fully_parenthesized};

use crate::{
    compiler::tokens::{Token, TokenKind},
    program::EvalOptions,
    types::{EvalError, EvalResult, Word},
    utils::DepthCounter,
};

/// Evaluates token ranges by splitting them on their main operator.
pub struct Evaluator<'a> {
    tokens: &'a [Token],
    options: EvalOptions,
    depth: DepthCounter,
}

impl<'a> Evaluator<'a> {
    pub fn new(tokens: &'a [Token]) -> Evaluator<'a> {
        Evaluator::with_options(tokens, EvalOptions::default())
    }

    pub fn with_options(tokens: &'a [Token], options: EvalOptions) -> Evaluator<'a> {
        Evaluator {
            tokens,
            options,
            depth: DepthCounter::new(options.max_depth),
        }
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Evaluates the whole token sequence. An empty sequence is malformed.
    pub fn eval(&self) -> EvalResult<Word> {
        match self.tokens.len() {
            0 => Err(EvalError::MalformedExpression),
            n => self.eval_range(0, n - 1),
        }
    }

    /// Evaluates the inclusive range `[p, q]`.
    ///
    /// Panics if `p > q` or `q` is out of bounds; callers only ever build
    /// ranges from a valid split.
    pub fn eval_range(&self, p: usize, q: usize) -> EvalResult<Word> {
        assert!(p <= q, "bad token range [{}, {}]", p, q);
        assert!(q < self.tokens.len(), "token range [{}, {}] out of bounds", p, q);

        let _guard = self.depth.enter()?;

        #[cfg(feature = "debug_output")]
        {
            println!(
                "[eval]: depth {} range [{}, {}]: {}",
                self.depth.depth(),
                p,
                q,
                self.render_range(p, q)
            );
        }

        if p == q {
            return self.eval_literal(&self.tokens[p]);
        }

        if !is_balanced(self.tokens, p, q + 1) {
            return Err(EvalError::MalformedExpression);
        }

        if is_fully_parenthesized(self.tokens, p, q) {
            if q - p < 2 {
                // `()`
                return Err(EvalError::MalformedExpression);
            }
            return self.eval_range(p + 1, q - 1);
        }

        let op = match select_main_operator(self.tokens, p, q) {
            // no left operand: unary operators are not part of the grammar
            Some(op) if op > p => op,
            _ => return Err(EvalError::MalformedExpression),
        };

        // Peel same-tier operators off the left operand without recursing, so
        // a flat `a+b+...+z` chain costs one level of depth.
        let tier = operator_tier(self.tokens[op].kind);
        let mut splits = vec![(op, q)];
        let mut end = op - 1;

        while let Some(next) = self.chain_operator(p, end) {
            if operator_tier(self.tokens[next].kind) != tier {
                break;
            }
            splits.push((next, end));
            end = next - 1;
        }

        let mut acc = self.eval_range(p, end)?;
        for (op, rhs_end) in splits.into_iter().rev() {
            let rhs = self.eval_range(op + 1, rhs_end)?;
            acc = self.apply(self.tokens[op].kind, acc, rhs)?;
        }

        Ok(acc)
    }

    /// Main operator of `[p, q]` when that range would itself be split on it;
    /// anything else is left to `eval_range` to evaluate or reject.
    fn chain_operator(&self, p: usize, q: usize) -> Option<usize> {
        if p >= q
            || !is_balanced(self.tokens, p, q + 1)
            || is_fully_parenthesized(self.tokens, p, q)
        {
            return None;
        }

        select_main_operator(self.tokens, p, q).filter(|op| *op > p)
    }

    fn eval_literal(&self, token: &Token) -> EvalResult<Word> {
        match token.kind {
            TokenKind::Number => token
                .text()
                .parse::<Word>()
                .map_err(|_| EvalError::NumericOverflow),
            _ => Err(EvalError::MalformedExpression),
        }
    }

    fn apply(&self, op: TokenKind, lhs: Word, rhs: Word) -> EvalResult<Word> {
        let overflow = self.options.overflow;

        match op {
            TokenKind::Plus => overflow.add(lhs, rhs),
            TokenKind::Minus => overflow.sub(lhs, rhs),
            TokenKind::Star => overflow.mul(lhs, rhs),
            TokenKind::Slash => lhs.checked_div(rhs).ok_or(EvalError::DivisionByZero),
            TokenKind::Equal => Err(EvalError::UnsupportedOperator),
            other => unreachable!("{:?} selected as an operator", other),
        }
    }

    #[cfg(feature = "debug_output")]
    fn render_range(&self, p: usize, q: usize) -> String {
        self.tokens[p..=q]
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod test {
    use super::Evaluator;
    use crate::{
        compiler::rule_tokenizer::tokenize,
        program::{EvalOptions, OverflowPolicy},
        types::{EvalError, EvalResult},
    };
    use test_case::test_case;

    fn eval_str(source: &str) -> EvalResult<u32> {
        let tokens = tokenize(source).unwrap();
        Evaluator::new(&tokens).eval()
    }

    #[test_case("7", Ok(7); "literal")]
    #[test_case("1+2", Ok(3); "add")]
    #[test_case("9/2", Ok(4); "truncating div")]
    #[test_case("(((4)))", Ok(4); "deep wrapped literal")]
    #[test_case("(1+2)*(3+4)", Ok(21); "two groups")]
    #[test_case("100/10/5", Ok(2); "left assoc div")]
    #[test_case("2*(3+4)*5", Ok(70); "group in the middle")]
    #[test_case("()", Err(EvalError::MalformedExpression); "empty parens")]
    #[test_case("-3", Err(EvalError::MalformedExpression); "unary minus")]
    #[test_case("3+", Err(EvalError::MalformedExpression); "missing rhs")]
    #[test_case("3 4", Err(EvalError::MalformedExpression); "no operator")]
    #[test_case("1/(2-2)", Err(EvalError::DivisionByZero); "zero divisor")]
    #[test_case("3==3", Err(EvalError::UnsupportedOperator); "equality")]
    fn test_eval(source: &str, expected: EvalResult<u32>) {
        assert_eq!(eval_str(source), expected);
    }

    #[test]
    fn test_eval_empty() {
        assert_eq!(Evaluator::new(&[]).eval(), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn test_sub_range() {
        let tokens = tokenize("1 + 2 * 3").unwrap();
        let evaluator = Evaluator::new(&tokens);

        assert_eq!(evaluator.eval_range(2, 4), Ok(6));
        assert_eq!(evaluator.eval_range(0, 0), Ok(1));
    }

    #[test]
    fn test_checked_overflow() {
        let tokens = tokenize("65536*65536").unwrap();

        assert_eq!(Evaluator::new(&tokens).eval(), Ok(0));
        assert_eq!(
            Evaluator::with_options(
                &tokens,
                EvalOptions::default().with_overflow(OverflowPolicy::Checked)
            )
            .eval(),
            Err(EvalError::NumericOverflow)
        );
    }

    #[test]
    fn test_depth_limit() {
        let source = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        let tokens = tokenize(&source).unwrap();

        assert_eq!(
            Evaluator::with_options(&tokens, EvalOptions::default().with_max_depth(5)).eval(),
            Err(EvalError::DepthExceeded { limit: 5 })
        );
        assert_eq!(Evaluator::new(&tokens).eval(), Ok(1));
    }

    #[test]
    fn test_flat_chain_is_not_nesting() {
        let source = vec!["1"; 1000].join("+");
        let tokens = tokenize(&source).unwrap();
        let opts = EvalOptions::default().with_max_depth(2);

        assert_eq!(Evaluator::with_options(&tokens, opts).eval(), Ok(1000));
    }

    #[test_case("10-2-3", Ok(5); "sub chain")]
    #[test_case("2*3+4*5-6", Ok(20); "products inside a sum chain")]
    #[test_case("64/4/2*3", Ok(24); "div and mul chain")]
    #[test_case("1+2+3==6", Err(EvalError::UnsupportedOperator); "chain under equality")]
    #[test_case("1+2+(3+", Err(EvalError::MalformedExpression); "broken tail")]
    #[test_case("+1+2", Err(EvalError::MalformedExpression); "missing leading operand")]
    #[test_case("7/0+1+1", Err(EvalError::DivisionByZero); "error at the head of a chain")]
    fn test_chain_folding(source: &str, expected: EvalResult<u32>) {
        assert_eq!(eval_str(source), expected);
    }

    #[test]
    #[should_panic]
    fn test_inverted_range_panics() {
        let tokens = tokenize("1+2").unwrap();

        let _ = Evaluator::new(&tokens).eval_range(2, 0);
    }
}
