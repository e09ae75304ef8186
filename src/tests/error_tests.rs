use crate::{evaluate, evaluate_with, EvalError, EvalOptions, ExprError, LexError};
use test_case::test_case;

#[test_case("(1+2"; "missing close")]
#[test_case("1+2)"; "missing open")]
#[test_case(")("; "inverted")]
#[test_case(""; "empty input")]
#[test_case("   "; "blank input")]
#[test_case("()"; "empty parens")]
#[test_case("+3"; "leading operator")]
#[test_case("3*"; "trailing operator")]
#[test_case("1 2"; "missing operator")]
#[test_case("(1)(2)"; "adjacent groups")]
#[test_case("2*-3"; "unary minus")]
fn test_malformed(source: &str) {
    assert_eq!(
        evaluate(source),
        Err(ExprError::Eval(EvalError::MalformedExpression))
    );
}

#[test_case("2+@3", 2; "at sign")]
#[test_case("x", 0; "identifier")]
#[test_case("1 = 1", 2; "single equal")]
#[test_case("1.5", 1; "float")]
#[test_case("$pc + 4", 0; "register reference")]
fn test_no_match(source: &str, position: usize) {
    assert_eq!(
        evaluate(source),
        Err(ExprError::Lex(LexError::NoMatch { position }))
    );
}

#[test]
fn test_no_match_render() {
    let err = evaluate("2+@3").unwrap_err();

    assert_eq!(err.render("2+@3"), "no match at position 2\n2+@3\n  ^");
}

#[test]
fn test_no_match_render_multiline_with_tabs() {
    let source = "1 +\n\t@";
    let err = evaluate(source).unwrap_err();

    assert_eq!(err, ExprError::Lex(LexError::NoMatch { position: 5 }));
    assert_eq!(err.render(source), "no match at position 5\n\t@\n\t^");
}

#[test_case("5/0"; "literal zero")]
#[test_case("5/(3-3)"; "computed zero")]
#[test_case("0/0"; "zero by zero")]
fn test_division_by_zero(source: &str) {
    assert_eq!(evaluate(source), Err(ExprError::Eval(EvalError::DivisionByZero)));
}

#[test_case("2==2"; "equal")]
#[test_case("1+1 == 2"; "equal binds loosest")]
fn test_unsupported_operator(source: &str) {
    assert_eq!(
        evaluate(source),
        Err(ExprError::Eval(EvalError::UnsupportedOperator))
    );
}

#[test]
fn test_literal_overflow() {
    assert_eq!(
        evaluate("4294967296"),
        Err(ExprError::Eval(EvalError::NumericOverflow))
    );
    assert_eq!(
        evaluate("1 + 99999999999999999999"),
        Err(ExprError::Eval(EvalError::NumericOverflow))
    );
}

#[test]
fn test_depth_exceeded() {
    let source = format!("{}1{}", "(".repeat(300), ")".repeat(300));

    assert_eq!(
        evaluate(&source),
        Err(ExprError::Eval(EvalError::DepthExceeded { limit: 256 }))
    );

    let opts = EvalOptions::default().with_max_depth(512);
    assert_eq!(evaluate_with(&source, &opts), Ok(1));
}

#[test]
fn test_errors_serialize() {
    let err = evaluate("5/0").unwrap_err();
    let json = serde_json::to_string(&err).unwrap();
    let back: ExprError = serde_json::from_str(&json).unwrap();

    assert_eq!(back, err);
}
