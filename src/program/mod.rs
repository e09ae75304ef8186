mod eval_options;

pub use eval_options::{EvalOptions, OverflowPolicy};

use serde::{Deserialize, Serialize};

use crate::{
    compiler::{rule_tokenizer::tokenize_with, rules::RuleSet, tokens::Token},
    interp::Evaluator,
    types::{ExprResult, Word},
};

/// A tokenized expression that can be evaluated any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    source: String,
    tokens: Vec<Token>,
}

impl Program {
    pub fn from_source(source: &str) -> ExprResult<Program> {
        Program::from_source_with_rules(source, RuleSet::standard())
    }

    pub fn from_source_with_rules(source: &str, rules: &RuleSet) -> ExprResult<Program> {
        Ok(Program {
            source: source.to_owned(),
            tokens: tokenize_with(source, rules)?,
        })
    }

    pub fn source<'a>(&'a self) -> &'a str {
        &self.source
    }

    pub fn tokens<'a>(&'a self) -> &'a [Token] {
        &self.tokens
    }

    pub fn eval(&self) -> ExprResult<Word> {
        self.eval_with(&EvalOptions::default())
    }

    pub fn eval_with(&self, options: &EvalOptions) -> ExprResult<Word> {
        Ok(Evaluator::with_options(&self.tokens, *options).eval()?)
    }

    /// Space separated rendering of the token stream.
    pub fn dumps_tokens(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Tokenizes and evaluates `expr` with default options.
pub fn evaluate(expr: &str) -> ExprResult<Word> {
    evaluate_with(expr, &EvalOptions::default())
}

pub fn evaluate_with(expr: &str, options: &EvalOptions) -> ExprResult<Word> {
    Program::from_source(expr)?.eval_with(options)
}
