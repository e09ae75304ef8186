use super::{
    rules::RuleSet,
    source_range::SourceRange,
    syntax_error::LexError,
    tokenizer::{collect_tokens, Tokenizer},
    tokens::{Token, TokenKind},
};

/// Tokenizer driven by an ordered [`RuleSet`].
pub struct RuleTokenizer<'l> {
    input: &'l str,
    rules: &'l RuleSet,
    position: usize,

    current: Option<Token>,
}

impl<'l> RuleTokenizer<'l> {
    pub fn with_input(input: &'l str) -> RuleTokenizer<'l> {
        RuleTokenizer::with_rules(input, RuleSet::standard())
    }

    pub fn with_rules(input: &'l str, rules: &'l RuleSet) -> RuleTokenizer<'l> {
        RuleTokenizer {
            input,
            rules,
            position: 0,
            current: None,
        }
    }

    fn collect_next_token(&mut self) -> Result<Option<Token>, LexError> {
        while self.position < self.input.len() {
            let start = self.position;
            let m = self.rules.classify(self.input, start);

            if !m.is_match() {
                #[cfg(feature = "debug_output")]
                {
                    println!("[tokenizer]: no match at position {}", start);
                }

                return Err(LexError::no_match(start));
            }

            self.position += m.len;
            let loc = SourceRange::new(start, self.position);

            #[cfg(feature = "debug_output")]
            {
                println!(
                    "[tokenizer]: match rules[{}] = \"{}\" at position {} with len {}: {}",
                    m.rule,
                    self.rules.rules()[m.rule].pattern(),
                    start,
                    m.len,
                    loc.slice(self.input)
                );
            }

            match m.kind {
                TokenKind::Whitespace => continue,
                TokenKind::Number => return Ok(Some(Token::number(loc.slice(self.input), loc))),
                kind => return Ok(Some(Token::new(kind, loc))),
            }
        }

        Ok(None)
    }
}

impl Tokenizer for RuleTokenizer<'_> {
    fn peek(&mut self) -> Result<Option<&Token>, LexError> {
        if self.current.is_none() {
            self.current = self.collect_next_token()?;
        }

        Ok(self.current.as_ref())
    }

    fn next(&mut self) -> Result<Option<Token>, LexError> {
        match self.current.take() {
            Some(token) => Ok(Some(token)),
            None => self.collect_next_token(),
        }
    }

    fn source<'a>(&'a self) -> &'a str {
        self.input
    }

    fn location(&self) -> usize {
        self.position
    }
}

/// Splits `input` into tokens using the standard rule set.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(input, RuleSet::standard())
}

pub fn tokenize_with(input: &str, rules: &RuleSet) -> Result<Vec<Token>, LexError> {
    collect_tokens(&mut RuleTokenizer::with_rules(input, rules))
}

#[cfg(test)]
mod test {
    use super::{tokenize, tokenize_with, RuleTokenizer};
    use crate::compiler::{
        rules::RuleSet,
        source_range::SourceRange,
        syntax_error::LexError,
        tokenizer::Tokenizer,
        tokens::{Token, TokenKind},
    };

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_basic_stream() {
        use TokenKind::*;

        assert_eq!(
            kinds("(1 + 22) * 3 / 4 - 5 == 6"),
            vec![
                LParen, Number, Plus, Number, RParen, Star, Number, Slash, Number, Minus, Number,
                Equal, Number
            ]
        );
    }

    #[test]
    fn test_number_text_and_loc() {
        let tokens = tokenize(" 123+4").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::number("123", SourceRange::new(1, 4)),
                Token::new(TokenKind::Plus, SourceRange::new(4, 5)),
                Token::number("4", SourceRange::new(5, 6)),
            ]
        );
    }

    #[test]
    fn test_long_literal_is_not_truncated() {
        let digits = "9".repeat(64);
        let tokens = tokenize(&digits).unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(), digits);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize("  \t ").unwrap().is_empty());
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_no_match_position() {
        assert_eq!(tokenize("2+@3"), Err(LexError::NoMatch { position: 2 }));
        assert_eq!(tokenize("1 = 2"), Err(LexError::NoMatch { position: 2 }));
    }

    #[test]
    fn test_peek_then_next() {
        let mut tokenizer = RuleTokenizer::with_input("7 8");

        assert_eq!(tokenizer.peek().unwrap().map(|t| t.text()), Some("7"));
        assert_eq!(tokenizer.next().unwrap().unwrap().text(), "7");
        assert_eq!(tokenizer.next().unwrap().unwrap().text(), "8");
        assert_eq!(tokenizer.next().unwrap(), None);
        assert_eq!(tokenizer.location(), 3);
        assert_eq!(tokenizer.source(), "7 8");
    }

    #[test]
    fn test_custom_rules() {
        let rules = RuleSet::new(&[(r"_+", TokenKind::Whitespace), (r"[0-9]+", TokenKind::Number)])
            .unwrap();

        let tokens = tokenize_with("1__2", &rules).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text(), "2");
    }
}
