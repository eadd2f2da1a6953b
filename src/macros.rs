//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$line` - The 1-based source line of the token
/// * `$column` - The 0-based column within that line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1, 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
            column: $column,
        }
    };
}
