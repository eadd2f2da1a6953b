use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::EmptyBuiltinList { .. } => "EmptyBuiltinList",
            ErrorImpl::EmptyBuiltinName { .. } => "EmptyBuiltinName",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
        }
    }

    /// Whether the error was raised while building the pattern table rather
    /// than during a scan.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedCharacter { .. }
        )
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::EmptyBuiltinList { list } => ErrorTip::Suggestion(format!(
                "Builtin {} list is empty, is the list file missing its entries?",
                list
            )),
            ErrorImpl::EmptyBuiltinName { list } => ErrorTip::Suggestion(format!(
                "Builtin {} list contains an empty name, was a blank line left in the list file?",
                list
            )),
            ErrorImpl::InvalidPattern { pattern, reason } => ErrorTip::Suggestion(format!(
                "Pattern `{}` failed to compile: {}",
                pattern, reason
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("builtin {list:?} list is empty")]
    EmptyBuiltinList { list: String },
    #[error("builtin {list:?} list contains an empty name")]
    EmptyBuiltinName { list: String },
    #[error("pattern {pattern:?} failed to compile: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
