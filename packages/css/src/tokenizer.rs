use crate::error::{ParseError, ParseResult};
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Token types for CSS transition values
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token<'src> {
    // Dimensions keep their unit attached so "200ms" never splits into
    // a number and an identifier. Unit validation happens in the parser.
    #[regex(r"-?([0-9]*\.)?[0-9]+[a-zA-Z%]+", |lex| lex.slice(), priority = 3)]
    Dimension(&'src str),

    #[regex(r"-?([0-9]*\.)?[0-9]+", |lex| lex.slice())]
    Number(&'src str),

    // Identifiers, including dashed easing keywords like ease-in-out
    // and vendor-prefixed property names like -webkit-transform.
    #[regex(r"-{0,2}[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice())]
    Ident(&'src str),

    #[token(",")]
    Comma,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Dimension(d) => write!(f, "dimension '{}'", d),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Ident(s) => write!(f, "identifier '{}'", s),
            Token::Comma => write!(f, "','"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
        }
    }
}

/// Tokenize a transition value string.
///
/// Unlike a lexer for a whole stylesheet, any character the lexer cannot
/// consume fails the entire value; invalid input must surface as a parse
/// error, never be silently skipped.
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, Range<usize>)>> {
    Token::lexer(source)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok((token, span)),
            Err(()) => Err(ParseError::lexer_error(span)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_and_ident() {
        let tokens = tokenize("opacity 200ms ease-in").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].0, Token::Ident("opacity"));
        assert_eq!(tokens[1].0, Token::Dimension("200ms"));
        assert_eq!(tokens[2].0, Token::Ident("ease-in"));
    }

    #[test]
    fn test_dimension_swallows_trailing_letters() {
        // "200mss" must lex as one dimension so the parser can reject
        // the unit, rather than as "200ms" plus a stray identifier.
        let tokens = tokenize("200mss").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, Token::Dimension("200mss"));
    }

    #[test]
    fn test_function_tokens() {
        let tokens = tokenize("cubic-bezier(0.4, 0, 0.2, 1)").unwrap();
        assert_eq!(tokens[0].0, Token::Ident("cubic-bezier"));
        assert_eq!(tokens[1].0, Token::LParen);
        assert_eq!(tokens[2].0, Token::Number("0.4"));
        assert_eq!(tokens.last().unwrap().0, Token::RParen);
    }

    #[test]
    fn test_negative_and_fractional_numbers() {
        let tokens = tokenize("-.5s steps(-1)").unwrap();
        assert_eq!(tokens[0].0, Token::Dimension("-.5s"));
        assert_eq!(tokens[3].0, Token::Number("-1"));
    }

    #[test]
    fn test_spans_track_source_offsets() {
        let tokens = tokenize("all 1s").unwrap();
        assert_eq!(tokens[0].1, 0..3);
        assert_eq!(tokens[1].1, 4..6);
    }

    #[test]
    fn test_unlexable_input_is_an_error() {
        let result = tokenize("opacity @ 1s");
        assert!(matches!(result, Err(ParseError::LexerError { .. })));
    }
}
