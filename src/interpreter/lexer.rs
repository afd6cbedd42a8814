use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// End of input is not a token: the token stream simply ends, and the
/// parser reports it as `EOF` in diagnostics.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// The raw text is kept so that the parser can report literals that do
    /// not fit into 64 bits.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens, such as `"hello"`.
    ///
    /// The surrounding quotes are stripped. There are no escape sequences;
    /// a string runs to the next `"` and may span lines.
    #[regex(r#""[^"]*""#, |lex| {
        let slice = lex.slice();
        lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
        slice[1..slice.len() - 1].to_string()
    })]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `macro`
    #[token("macro")]
    Macro,
    /// Identifier tokens; binding names such as `x` or `newAdder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// Line feeds; skipped, but counted for diagnostics.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl std::fmt::Display for Token {
    /// Writes the canonical name of the token, as used in parser
    /// diagnostics: `IDENT`, `INT` and `STRING` for the data-carrying
    /// tokens, the uppercase keyword names, and the operator or delimiter
    /// text for everything else.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Identifier(_) => "IDENT",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Macro => "MACRO",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comment | Self::NewLine | Self::Ignored => "ILLEGAL",
        };
        write!(f, "{name}")
    }
}

/// Tokenizes a complete source text.
///
/// Every produced token is paired with the line it was found on. Lexing is
/// eager: the entire input is tokenized before parsing begins.
///
/// # Parameters
/// - `source`: The source text to tokenize.
///
/// # Returns
/// The token stream, or a `ParseError::IllegalToken` for the first slice of
/// input that is not part of the language.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 5;").unwrap();
///
/// assert_eq!(tokens[0], (Token::Let, 1));
/// assert_eq!(tokens[1], (Token::Identifier("x".to_string()), 1));
/// assert_eq!(tokens[2], (Token::Assign, 1));
/// assert_eq!(tokens[3], (Token::Int("5".to_string()), 1));
/// assert_eq!(tokens[4], (Token::Semicolon, 1));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(token) = token {
            tokens.push((token, lexer.extras.line));
        } else {
            return Err(ParseError::IllegalToken { token: lexer.slice().to_string(),
                                                  line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}
