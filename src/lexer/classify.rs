use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::TokenKind;

lazy_static! {
    static ref SPACES: Regex = Regex::new(" +").unwrap();
}

/// Per-kind normalization of the raw matched text into the token value.
///
/// Kinds without an entry here keep the matched text unchanged; in
/// particular a Number keeps its literal spelling, numeric interpretation
/// being the consumer's concern.
pub fn normalize(kind: TokenKind, raw: &str) -> String {
    match kind {
        TokenKind::Comment => raw
            .trim_start_matches(['/', ' '])
            .trim_end_matches(' ')
            .to_string(),
        TokenKind::Subscript => raw.trim_matches([' ', '[', ']']).to_string(),
        TokenKind::FunctionDef => function_def_value(raw),
        _ => raw.to_string(),
    }
}

/// Reduces a definition head like `name(a, b) =>` to the comma-joined
/// parameter list `a,b`. The leading identifier and the definition arrow
/// are dropped.
fn function_def_value(raw: &str) -> String {
    let trimmed = raw
        .trim_matches(' ')
        .trim_end_matches("=>")
        .trim_end_matches(' ');

    let params = match trimmed.find('(') {
        Some(start) => &trimmed[start..],
        None => trimmed,
    };

    if !(params.starts_with('(') && params.ends_with(')')) {
        return params.to_string();
    }

    let inner = SPACES.replace_all(&params[1..params.len() - 1], "");

    inner.split(',').collect::<Vec<&str>>().join(",")
}
