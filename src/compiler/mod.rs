pub mod rule_tokenizer;
pub mod rules;
pub mod source_range;
pub mod syntax_error;
pub mod tokenizer;
pub mod tokens;
