use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Immutable builtin-name configuration for a lexer.
///
/// The two lists hold the names reserved by the language's standard
/// vocabulary: builtin variables (`close`, `open`, ...) and builtin
/// functions (`sma`, `crossover`, ...). They are read once when the pattern
/// table is compiled and never consulted again during scanning.
#[derive(Debug, Clone)]
pub struct BuiltinConfig {
    pub variables: Vec<String>,
    pub functions: Vec<String>,
}

impl BuiltinConfig {
    pub fn new(variables: Vec<String>, functions: Vec<String>) -> Self {
        BuiltinConfig {
            variables,
            functions,
        }
    }

    /// Parses the two newline-delimited name lists.
    ///
    /// Blank lines are dropped, including the trailing one a final newline
    /// produces; left in, an empty name would become an always-matching
    /// empty alternative.
    pub fn from_lists(variables: &str, functions: &str) -> Self {
        BuiltinConfig {
            variables: parse_list(variables),
            functions: parse_list(functions),
        }
    }
}

fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Builds one alternation pattern matching any name in `names` as a whole
/// word.
///
/// Alternatives are ordered longest name first. The regex engine commits to
/// the first alternative that matches rather than the longest, so a short
/// name that is a prefix of a longer one (`ma` / `macd`) must be tried
/// after it.
pub fn word_alternation(names: &[String], list: &str) -> Result<String, Error> {
    if names.is_empty() {
        return Err(Error::new(
            ErrorImpl::EmptyBuiltinList {
                list: String::from(list),
            },
            Position::null(),
        ));
    }

    let mut sorted: Vec<&str> = names.iter().map(|name| name.trim()).collect();

    if sorted.iter().any(|name| name.is_empty()) {
        return Err(Error::new(
            ErrorImpl::EmptyBuiltinName {
                list: String::from(list),
            },
            Position::null(),
        ));
    }

    sorted.sort_by_key(|name| std::cmp::Reverse(name.len()));

    let escaped: Vec<String> = sorted.iter().map(|name| regex::escape(name)).collect();

    Ok(format!(r"\b(?:{})\b", escaped.join("|")))
}
