#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found input that is not part of the language.
    IllegalToken {
        /// The offending slice of source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token after the current one was not the expected one.
    UnexpectedToken {
        /// Canonical name of the expected token.
        expected: String,
        /// Canonical name of the token that was found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with the current token.
    NoPrefixParseFunction {
        /// Canonical name of the token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The literal text as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalToken { token, line } => {
                write!(f, "Error on line {line}: Illegal token: {token}.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Error on line {line}: Expected next token to be {expected}, got {found} instead."),

            Self::NoPrefixParseFunction { token, line } => write!(f,
                                                                  "Error on line {line}: No prefix parse function found for {token}."),

            Self::InvalidIntegerLiteral { literal, line } => write!(f,
                                                                    "Error on line {line}: Could not parse {literal} as integer."),
        }
    }
}

impl std::error::Error for ParseError {}
