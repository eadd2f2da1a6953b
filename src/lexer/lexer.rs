use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    builtins::BuiltinConfig,
    classify::normalize,
    patterns::{build_pattern_table, RegexPattern},
    tokens::{Token, TokenKind},
};

/// A compiled scanner for one builtin-name configuration.
///
/// Construction compiles the pattern table once; the result is read-only
/// and may be shared across any number of scans, concurrent ones included.
/// Per-scan state lives in the [TokenStream] each scan owns.
#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
}

impl Lexer {
    pub fn new(config: &BuiltinConfig) -> Result<Lexer, Error> {
        Ok(Lexer {
            patterns: build_pattern_table(config)?,
        })
    }

    /// Lazily scans `source`, yielding one token per non-whitespace match.
    ///
    /// The stream terminates after yielding an error; tokens already
    /// yielded remain valid. Dropping the stream early is safe.
    pub fn scan<'a>(&'a self, source: &'a str) -> TokenStream<'a> {
        TokenStream {
            patterns: &self.patterns,
            source,
            pos: 0,
            line: 1,
            line_start: 0,
            failed: false,
        }
    }

    /// Scans the whole of `source` up front.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, Error> {
        self.scan(source).collect()
    }
}

/// One in-progress scan: the remaining input plus the line bookkeeping the
/// token positions are computed from.
pub struct TokenStream<'a> {
    patterns: &'a [RegexPattern],
    source: &'a str,
    pos: usize,
    line: u32,
    line_start: usize,
    failed: bool,
}

impl TokenStream<'_> {
    fn column_at(&self, offset: usize) -> u32 {
        self.source[self.line_start..offset].chars().count() as u32
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while self.pos < self.source.len() {
            // First pattern matching at exactly the current position wins
            let matched = self.patterns.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find_at(self.source, self.pos)
                    .filter(|found| found.start() == self.pos)
                    .map(|found| (pattern.kind, found))
            });

            let (kind, found) = match matched {
                Some(matched) => matched,
                None => {
                    self.failed = true;
                    let character = self.source[self.pos..].chars().next().unwrap_or('\0');
                    return Some(Err(Error::new(
                        ErrorImpl::UnrecognisedCharacter { character },
                        Position::new(self.line, self.column_at(self.pos)),
                    )));
                }
            };

            let start = found.start();
            self.pos = found.end();

            if kind.is_whitespace() {
                if kind == TokenKind::Newline {
                    self.line += found.as_str().matches('\n').count() as u32;
                    self.line_start = found.end();
                }
                continue;
            }

            let column = self.column_at(start);
            let value = normalize(kind, found.as_str());

            return Some(Ok(MK_TOKEN!(kind, value, self.line, column)));
        }

        None
    }
}
