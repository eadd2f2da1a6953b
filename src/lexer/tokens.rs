use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Comments
    Comment,

    // Whitespace (consumed by the scanner, never emitted)
    Indent,
    Newline,
    Space,

    // Structural punctuation
    Comma,
    OpenParen,
    CloseParen,
    Subscript, // [0]

    // Ternary logic
    Question, // ?
    Colon,    // :

    // Comparisons
    Equals,        // ==
    NotEquals,     // !=
    LessEquals,    // <=
    GreaterEquals, // >=
    Less,          // <
    Greater,       // >

    // Arithmetic
    Percent,
    Star,
    Plus,
    Dash,
    Slash,

    // Assignment
    Assign,  // :=
    Declare, // =

    // Builtin vocabulary
    BuiltinVariable,
    BuiltinFunction,

    // User code
    FunctionDef,
    Identifier,
    Number,

    // Reserved
    For,
    To,
    If,
    Then,
    Else,
    And,
    Not,
    Or,
    Continue,
    Break,
}

impl TokenKind {
    /// Structural whitespace is consumed for position bookkeeping but never
    /// surfaces as a token.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Indent | TokenKind::Newline | TokenKind::Space)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
    pub column: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{ kind: {}, value: {:?}, line: {}, column: {} }}",
            self.kind, self.value, self.line, self.column
        )
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Comment,
            TokenKind::Subscript,
            TokenKind::BuiltinVariable,
            TokenKind::BuiltinFunction,
            TokenKind::FunctionDef,
            TokenKind::Identifier,
            TokenKind::Number,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
