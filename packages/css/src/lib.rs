pub mod ast;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod serializer;
pub mod tokenizer;

#[cfg(test)]
mod tests_serializer;

pub use ast::{
    FunctionArg, FunctionValue, KeywordValue, TimingFunction, TransitionLayer, UnitValue, Value,
};
pub use error::{ParseError, ParseResult};
pub use extractor::{extract_transition_properties, TransitionDefaults, TransitionProperties};
pub use parser::{parse, Parser};
pub use serializer::{serialize_layer, serialize_layers};
pub use tokenizer::{tokenize, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_basic() {
        let source = "opacity 200ms";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 2);
    }
}
