pub use super::syntax_error::LexError;
use super::tokens::Token;

pub trait Tokenizer {
    fn peek(&mut self) -> Result<Option<&Token>, LexError>;
    fn next(&mut self) -> Result<Option<Token>, LexError>;

    fn source<'a>(&'a self) -> &'a str;
    fn location(&self) -> usize;
}

/// Drains `tokenizer`, stopping at the first error. A partial sequence is
/// never returned.
pub fn collect_tokens<T: Tokenizer + ?Sized>(tokenizer: &mut T) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();

    while let Some(token) = tokenizer.next()? {
        tokens.push(token);
    }

    Ok(tokens)
}
