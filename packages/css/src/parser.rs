use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::{tokenize, Token};
use std::ops::Range;

/// Position keywords accepted as the second argument of steps()
const STEP_POSITIONS: &[&str] = &[
    "jump-start",
    "jump-end",
    "jump-none",
    "jump-both",
    "start",
    "end",
];

/// Parser for CSS transition values.
///
/// A value is one or more comma-separated layers; each layer is one to
/// four whitespace-separated values. Values fill semantic slots by kind:
/// the first time fills duration and the second delay, easing keywords
/// and functions fill timing, any other identifier names the property.
pub struct Parser<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> ParseResult<Self> {
        Ok(Self {
            tokens: tokenize(source)?,
            pos: 0,
        })
    }

    /// Parse a complete (possibly multi-layer) transition value
    pub fn parse_value(&mut self) -> ParseResult<Vec<TransitionLayer>> {
        let mut layers = vec![self.parse_layer()?];

        while self.match_token(Token::Comma) {
            layers.push(self.parse_layer()?);
        }

        if !self.is_at_end() {
            return Err(ParseError::unexpected_token(
                self.peek_span(),
                "','",
                Self::format_token(self.peek()),
            ));
        }

        Ok(layers)
    }

    fn parse_layer(&mut self) -> ParseResult<TransitionLayer> {
        let mut property: Option<KeywordValue> = None;
        let mut duration: Option<UnitValue> = None;
        let mut delay: Option<UnitValue> = None;
        let mut timing: Option<TimingFunction> = None;

        if self.is_at_end() || self.check(Token::Comma) {
            return Err(ParseError::unexpected_token(
                self.peek_span(),
                "a transition layer",
                Self::format_token(self.peek()),
            ));
        }

        while !self.is_at_end() && !self.check(Token::Comma) {
            let span = self.peek_span();

            match self.peek() {
                Some((Token::Dimension(raw), _)) => {
                    let raw = *raw;
                    self.advance();

                    let time = Self::parse_time(raw, span.clone())?;
                    if duration.is_none() {
                        // Delays may be negative, durations may not.
                        if time.value < 0.0 {
                            return Err(ParseError::negative_duration(span));
                        }
                        duration = Some(time);
                    } else if delay.is_none() {
                        delay = Some(time);
                    } else {
                        return Err(ParseError::too_many_values(span));
                    }
                }

                Some((Token::Ident(name), _)) => {
                    let name = *name;
                    self.advance();

                    if self.match_token(Token::LParen) {
                        if timing.is_some() {
                            return Err(ParseError::too_many_values(span));
                        }
                        let function = self.parse_timing_function(name, span)?;
                        timing = Some(TimingFunction::Function(function));
                    } else if is_timing_keyword(name) {
                        // Easing keywords never fall back to the property
                        // slot; a property named "ease" could not survive
                        // a serialize/re-parse round trip.
                        if timing.is_some() {
                            return Err(ParseError::too_many_values(span));
                        }
                        timing = Some(TimingFunction::Keyword(KeywordValue::new(name)));
                    } else if property.is_none() {
                        if CSS_WIDE_KEYWORDS.contains(&name.to_ascii_lowercase().as_str()) {
                            return Err(ParseError::reserved_keyword(span, name));
                        }
                        property = Some(KeywordValue::new(name));
                    } else {
                        return Err(ParseError::too_many_values(span));
                    }
                }

                _ => {
                    return Err(ParseError::unexpected_token(
                        span,
                        "a time, keyword, or timing function",
                        Self::format_token(self.peek()),
                    ));
                }
            }
        }

        let mut values = Vec::new();
        if let Some(property) = property {
            values.push(Value::Keyword(property));
        }
        if let Some(duration) = duration {
            values.push(Value::Unit(duration));
        }
        if let Some(delay) = delay {
            values.push(Value::Unit(delay));
        }
        if let Some(timing) = timing {
            values.push(timing.into_value());
        }

        Ok(TransitionLayer::new(values))
    }

    /// Split a dimension token into value and unit; only time units are
    /// valid in a transition layer.
    fn parse_time(raw: &str, span: Range<usize>) -> ParseResult<UnitValue> {
        let split = raw
            .find(|c: char| c.is_ascii_alphabetic() || c == '%')
            .unwrap_or(raw.len());
        let (number, unit) = raw.split_at(split);

        let value: f64 = number
            .parse()
            .map_err(|_| ParseError::lexer_error(span.clone()))?;

        if unit != "s" && unit != "ms" {
            return Err(ParseError::bad_time_unit(span, unit));
        }

        Ok(UnitValue::new(value, unit))
    }

    fn parse_timing_function(
        &mut self,
        name: &'src str,
        span: Range<usize>,
    ) -> ParseResult<FunctionValue> {
        let mut args = Vec::new();

        if !self.check(Token::RParen) {
            loop {
                args.push(self.parse_function_arg()?);
                if !self.match_token(Token::Comma) {
                    break;
                }
            }
        }

        self.expect(Token::RParen)?;

        let function = FunctionValue::new(name, args);
        Self::validate_timing_function(&function, span)?;
        Ok(function)
    }

    fn parse_function_arg(&mut self) -> ParseResult<FunctionArg> {
        match self.peek() {
            Some((Token::Number(raw), _)) => {
                let raw = *raw;
                let span = self.peek_span();
                self.advance();
                let value: f64 = raw.parse().map_err(|_| ParseError::lexer_error(span))?;
                Ok(FunctionArg::Number(value))
            }
            Some((Token::Ident(name), _)) => {
                let name = name.to_string();
                self.advance();
                Ok(FunctionArg::Keyword(name))
            }
            _ => Err(ParseError::unexpected_token(
                self.peek_span(),
                "a number or keyword",
                Self::format_token(self.peek()),
            )),
        }
    }

    fn validate_timing_function(function: &FunctionValue, span: Range<usize>) -> ParseResult<()> {
        match function.name.as_str() {
            "cubic-bezier" => {
                if function.args.len() != 4 {
                    return Err(ParseError::invalid_timing_function(
                        span,
                        &function.name,
                        "expected four numbers",
                    ));
                }

                let mut points = [0.0f64; 4];
                for (i, arg) in function.args.iter().enumerate() {
                    match arg {
                        FunctionArg::Number(n) => points[i] = *n,
                        FunctionArg::Keyword(_) => {
                            return Err(ParseError::invalid_timing_function(
                                span,
                                &function.name,
                                "expected four numbers",
                            ));
                        }
                    }
                }

                // The x ordinates are progress through the duration and
                // must stay within it; the y ordinates may overshoot.
                if !(0.0..=1.0).contains(&points[0]) || !(0.0..=1.0).contains(&points[2]) {
                    return Err(ParseError::invalid_timing_function(
                        span,
                        &function.name,
                        "x ordinates must be between 0 and 1",
                    ));
                }

                Ok(())
            }

            "steps" => {
                if function.args.is_empty() || function.args.len() > 2 {
                    return Err(ParseError::invalid_timing_function(
                        span,
                        &function.name,
                        "expected a step count and an optional position",
                    ));
                }

                match &function.args[0] {
                    FunctionArg::Number(n) if *n > 0.0 && n.fract() == 0.0 => {}
                    _ => {
                        return Err(ParseError::invalid_timing_function(
                            span,
                            &function.name,
                            "step count must be a positive integer",
                        ));
                    }
                }

                if let Some(position) = function.args.get(1) {
                    match position {
                        FunctionArg::Keyword(k) if STEP_POSITIONS.contains(&k.as_str()) => {}
                        _ => {
                            return Err(ParseError::invalid_timing_function(
                                span,
                                &function.name,
                                "unknown step position",
                            ));
                        }
                    }
                }

                Ok(())
            }

            other => Err(ParseError::invalid_timing_function(
                span,
                other,
                "unknown timing function",
            )),
        }
    }

    fn peek(&self) -> Option<&(Token<'src>, Range<usize>)> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&(Token<'src>, Range<usize>)> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, token: Token) -> bool {
        if let Some((t, _)) = self.peek() {
            std::mem::discriminant(t) == std::mem::discriminant(&token)
        } else {
            false
        }
    }

    fn match_token(&mut self, token: Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token) -> ParseResult<()> {
        if self.check(token.clone()) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                self.peek_span(),
                token.to_string(),
                Self::format_token(self.peek()),
            ))
        }
    }

    /// Get the span of the next token (the one we're about to consume)
    fn peek_span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.clone())
            .unwrap_or_else(|| {
                // If we're at EOF, use the end of the last token
                let end = self.tokens.last().map(|(_, span)| span.end).unwrap_or(0);
                end..end
            })
    }

    /// Format a token for display in error messages
    fn format_token(token: Option<&(Token, Range<usize>)>) -> String {
        match token {
            None => "end of value".to_string(),
            Some((token, _)) => token.to_string(),
        }
    }
}

/// Parse a transition value into its layers
pub fn parse(source: &str) -> ParseResult<Vec<TransitionLayer>> {
    Parser::new(source)?.parse_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_layer() {
        let layers = parse("opacity 200ms ease-in 0s").unwrap();
        assert_eq!(layers.len(), 1);

        let values = &layers[0].values;
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], Value::Keyword(KeywordValue::new("opacity")));
        assert_eq!(values[1], Value::Unit(UnitValue::new(200.0, "ms")));
        assert_eq!(values[2], Value::Unit(UnitValue::new(0.0, "s")));
        assert_eq!(
            values[3],
            Value::Keyword(KeywordValue::new("ease-in"))
        );
    }

    #[test]
    fn test_parse_normalizes_field_order() {
        // Timing keyword before the property; the tuple still comes out
        // in canonical order.
        let layers = parse("ease 1s opacity").unwrap();
        let values = &layers[0].values;
        assert_eq!(values[0], Value::Keyword(KeywordValue::new("opacity")));
        assert_eq!(values[1], Value::Unit(UnitValue::new(1.0, "s")));
        assert_eq!(values[2], Value::Keyword(KeywordValue::new("ease")));
    }

    #[test]
    fn test_parse_multi_layer() {
        let layers = parse("opacity 200ms, transform 300ms ease-out 50ms").unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].values.len(), 2);
        assert_eq!(layers[1].values.len(), 4);
    }

    #[test]
    fn test_time_slot_order_not_magnitude() {
        // First time is the duration even when smaller than the delay.
        let layers = parse("width 10ms 2s").unwrap();
        let values = &layers[0].values;
        assert_eq!(values[1], Value::Unit(UnitValue::new(10.0, "ms")));
        assert_eq!(values[2], Value::Unit(UnitValue::new(2.0, "s")));
    }

    #[test]
    fn test_negative_delay_allowed_negative_duration_rejected() {
        let layers = parse("opacity 1s -0.5s").unwrap();
        assert_eq!(
            layers[0].values[2],
            Value::Unit(UnitValue::new(-0.5, "s"))
        );

        let result = parse("opacity -1s");
        assert!(matches!(result, Err(ParseError::NegativeDuration { .. })));
    }

    #[test]
    fn test_cubic_bezier() {
        let layers = parse("opacity 1s cubic-bezier(0.4, 0, 0.2, 1)").unwrap();
        let values = &layers[0].values;
        assert_eq!(
            values[2],
            Value::Function(FunctionValue::new(
                "cubic-bezier",
                vec![
                    FunctionArg::Number(0.4),
                    FunctionArg::Number(0.0),
                    FunctionArg::Number(0.2),
                    FunctionArg::Number(1.0),
                ],
            ))
        );
    }

    #[test]
    fn test_steps() {
        let layers = parse("opacity 1s steps(4, jump-end)").unwrap();
        assert_eq!(
            layers[0].values[2],
            Value::Function(FunctionValue::new(
                "steps",
                vec![
                    FunctionArg::Number(4.0),
                    FunctionArg::Keyword("jump-end".to_string()),
                ],
            ))
        );
    }

    #[test]
    fn test_invalid_timing_functions() {
        assert!(parse("opacity 1s cubic-bezier(0.4, 0)").is_err());
        assert!(parse("opacity 1s cubic-bezier(2, 0, 0.5, 1)").is_err());
        assert!(parse("opacity 1s steps(0)").is_err());
        assert!(parse("opacity 1s steps(2.5)").is_err());
        assert!(parse("opacity 1s steps(2, sideways)").is_err());
        assert!(parse("opacity 1s bounce(3)").is_err());
    }

    #[test]
    fn test_garbage_is_invalid() {
        // Three plain identifiers cannot all find a slot.
        assert!(parse("not a transition").is_err());
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
        assert!(parse("200").is_err());
        assert!(parse("opacity 200px").is_err());
        assert!(parse("opacity 200mss").is_err());
        assert!(parse("opacity 1s 2s 3s").is_err());
        assert!(parse("opacity 1s,").is_err());
        assert!(parse(", opacity 1s").is_err());
        assert!(parse("opacity 1s (").is_err());
    }

    #[test]
    fn test_reserved_property_names() {
        assert!(matches!(
            parse("inherit 1s"),
            Err(ParseError::ReservedKeyword { .. })
        ));
        assert!(parse("initial").is_err());
    }

    #[test]
    fn test_second_easing_keyword_is_invalid() {
        assert!(matches!(
            parse("linear ease 1s"),
            Err(ParseError::TooManyValues { .. })
        ));
    }

    #[test]
    fn test_vendor_prefixed_property() {
        let layers = parse("-webkit-transform 1s").unwrap();
        assert_eq!(
            layers[0].values[0],
            Value::Keyword(KeywordValue::new("-webkit-transform"))
        );
    }
}
