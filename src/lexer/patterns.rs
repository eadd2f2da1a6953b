use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    builtins::{word_alternation, BuiltinConfig},
    tokens::TokenKind,
};

/// One entry of the pattern table: a token kind and the compiled pattern
/// that recognizes it.
#[derive(Clone)]
pub struct RegexPattern {
    pub kind: TokenKind,
    pub regex: Regex,
}

fn literal(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, regex::escape(text))
}

fn keyword(kind: TokenKind, word: &str) -> (TokenKind, String) {
    (kind, format!(r"\b{}\b", word))
}

fn raw(kind: TokenKind, pattern: &str) -> (TokenKind, String) {
    (kind, String::from(pattern))
}

/// Builds and compiles the full pattern table for `config`.
///
/// Table order is the match priority: at every scan position the first
/// entry that matches wins, and that is the only mechanism resolving
/// overlapping patterns. The constraints encoded below:
///
/// - comments before the operators their text may contain;
/// - whitespace before anything whitespace-adjacent;
/// - `:=` before `:`, and the two-character comparisons before the
///   one-character operators they start with;
/// - reserved words, word-bounded, before the generic identifier rule;
/// - the builtin alternations and the function-definition rule before the
///   generic identifier rule.
pub fn build_pattern_table(config: &BuiltinConfig) -> Result<Vec<RegexPattern>, Error> {
    let builtin_variables = word_alternation(&config.variables, "variables")?;
    let builtin_functions = word_alternation(&config.functions, "functions")?;

    let table = vec![
        raw(TokenKind::Comment, r"//.*"),
        // Whitespace
        raw(TokenKind::Indent, r" {4}|\t"),
        raw(TokenKind::Newline, r"\n+"),
        raw(TokenKind::Space, r" +"),
        // Structural punctuation
        literal(TokenKind::Comma, ","),
        literal(TokenKind::OpenParen, "("),
        literal(TokenKind::CloseParen, ")"),
        raw(TokenKind::Subscript, r"\[\d+\]"),
        // Ternary logic
        literal(TokenKind::Question, "?"),
        literal(TokenKind::Assign, ":="),
        literal(TokenKind::Colon, ":"),
        // Reserved words
        keyword(TokenKind::For, "for"),
        keyword(TokenKind::To, "to"),
        keyword(TokenKind::If, "if"),
        keyword(TokenKind::Then, "then"),
        keyword(TokenKind::Else, "else"),
        keyword(TokenKind::And, "and"),
        keyword(TokenKind::Not, "not"),
        keyword(TokenKind::Or, "or"),
        keyword(TokenKind::Continue, "continue"),
        keyword(TokenKind::Break, "break"),
        // Comparisons
        literal(TokenKind::Equals, "=="),
        literal(TokenKind::NotEquals, "!="),
        literal(TokenKind::LessEquals, "<="),
        literal(TokenKind::GreaterEquals, ">="),
        literal(TokenKind::Less, "<"),
        literal(TokenKind::Greater, ">"),
        // Arithmetic
        literal(TokenKind::Percent, "%"),
        literal(TokenKind::Star, "*"),
        literal(TokenKind::Plus, "+"),
        literal(TokenKind::Dash, "-"),
        literal(TokenKind::Slash, "/"),
        // Assignment
        literal(TokenKind::Declare, "="),
        // Builtin vocabulary
        (TokenKind::BuiltinVariable, builtin_variables),
        (TokenKind::BuiltinFunction, builtin_functions),
        // A definition must win over a bare reference
        raw(TokenKind::FunctionDef, r"[A-Za-z_]+\(.+\) *=>"),
        raw(TokenKind::Identifier, r"[A-Za-z_]+[A-Za-z_0-9]*"),
        raw(TokenKind::Number, r"\d+(\.\d*)?"),
    ];

    table
        .into_iter()
        .map(|(kind, pattern)| match Regex::new(&pattern) {
            Ok(regex) => Ok(RegexPattern { kind, regex }),
            Err(error) => Err(Error::new(
                ErrorImpl::InvalidPattern {
                    pattern,
                    reason: error.to_string(),
                },
                Position::null(),
            )),
        })
        .collect()
}
