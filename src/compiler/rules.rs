use once_cell::sync::Lazy;
use regex::Regex;

use super::tokens::TokenKind;

/// Pattern table used by [`RuleSet::standard`]. Order is match priority.
pub const STANDARD_RULES: &[(&str, TokenKind)] = &[
    (r"[ \t\r\n]+", TokenKind::Whitespace),
    (r"\+", TokenKind::Plus),
    (r"-", TokenKind::Minus),
    (r"\*", TokenKind::Star),
    (r"/", TokenKind::Slash),
    (r"\(", TokenKind::LParen),
    (r"\)", TokenKind::RParen),
    (r"[0-9]+", TokenKind::Number),
    (r"==", TokenKind::Equal),
];

static STANDARD: Lazy<RuleSet> = Lazy::new(|| match RuleSet::new(STANDARD_RULES) {
    Ok(rules) => rules,
    Err(err) => panic!("standard rule table failed to compile: {}", err),
});

#[derive(Debug, Clone)]
pub struct Rule {
    pattern: &'static str,
    regex: Regex,
    kind: TokenKind,
}

impl Rule {
    pub fn new(pattern: &'static str, kind: TokenKind) -> Result<Rule, regex::Error> {
        // Anchor so a rule only ever matches at the cursor.
        let regex = Regex::new(&format!("^(?:{})", pattern))?;

        Ok(Rule {
            pattern,
            regex,
            kind,
        })
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Length in bytes of the match starting exactly at the head of `input`.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .map(|m| m.end())
            .filter(|len| *len > 0)
    }
}

/// Outcome of classifying the input at one position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule: usize,
    pub kind: TokenKind,
    pub len: usize,
}

impl RuleMatch {
    pub fn no_match() -> RuleMatch {
        RuleMatch {
            rule: usize::MAX,
            kind: TokenKind::NoMatch,
            len: 0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.kind != TokenKind::NoMatch
    }
}

/// An ordered, compiled set of lexing rules. Immutable once built.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(table: &[(&'static str, TokenKind)]) -> Result<RuleSet, regex::Error> {
        let rules = table
            .iter()
            .map(|&(pattern, kind)| Rule::new(pattern, kind))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RuleSet { rules })
    }

    /// The process-wide rule set, compiled on first use.
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    pub fn rules<'a>(&'a self) -> &'a [Rule] {
        &self.rules
    }

    /// Tries each rule in declaration order against `input[position..]`; the
    /// first one that matches wins.
    pub fn classify(&self, input: &str, position: usize) -> RuleMatch {
        let rest = match input.get(position..) {
            Some(rest) => rest,
            None => return RuleMatch::no_match(),
        };

        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(len) = rule.match_len(rest) {
                return RuleMatch {
                    rule: index,
                    kind: rule.kind(),
                    len,
                };
            }
        }

        RuleMatch::no_match()
    }
}
