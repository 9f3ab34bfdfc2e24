use std::ops::Range;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected token at {}..{}: expected {expected}, found {found}", .span.start, .span.end)]
    UnexpectedToken {
        span: Range<usize>,
        expected: String,
        found: String,
    },

    #[error("Unrecognized input at {}..{}", .span.start, .span.end)]
    LexerError { span: Range<usize> },

    #[error("'{unit}' is not a time unit at {}..{}", .span.start, .span.end)]
    BadTimeUnit { span: Range<usize>, unit: String },

    #[error("transition-duration cannot be negative at {}..{}", .span.start, .span.end)]
    NegativeDuration { span: Range<usize> },

    #[error("Invalid timing function '{name}' at {}..{}: {message}", .span.start, .span.end)]
    InvalidTimingFunction {
        span: Range<usize>,
        name: String,
        message: String,
    },

    #[error("'{name}' cannot name a transition property at {}..{}", .span.start, .span.end)]
    ReservedKeyword { span: Range<usize>, name: String },

    #[error("Too many values in transition layer at {}..{}", .span.start, .span.end)]
    TooManyValues { span: Range<usize> },
}

impl ParseError {
    pub fn unexpected_token(
        span: Range<usize>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::UnexpectedToken {
            span,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn lexer_error(span: Range<usize>) -> Self {
        Self::LexerError { span }
    }

    pub fn bad_time_unit(span: Range<usize>, unit: impl Into<String>) -> Self {
        Self::BadTimeUnit {
            span,
            unit: unit.into(),
        }
    }

    pub fn negative_duration(span: Range<usize>) -> Self {
        Self::NegativeDuration { span }
    }

    pub fn invalid_timing_function(
        span: Range<usize>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidTimingFunction {
            span,
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn reserved_keyword(span: Range<usize>, name: impl Into<String>) -> Self {
        Self::ReservedKeyword {
            span,
            name: name.into(),
        }
    }

    pub fn too_many_values(span: Range<usize>) -> Self {
        Self::TooManyValues { span }
    }
}
