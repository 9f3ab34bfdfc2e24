use crate::ast::{KeywordValue, TimingFunction, UnitValue};
use crate::extractor::{TransitionDefaults, TransitionProperties};
use crate::parser::parse;
use crate::serializer::{serialize_layer, serialize_layers};

#[test]
fn test_serialize_single_layer() {
    let layers = parse("opacity 200ms ease-in 0s").unwrap();
    assert_eq!(serialize_layer(&layers[0]), "opacity 200ms 0s ease-in");
}

#[test]
fn test_serialize_joins_layers() {
    let layers = parse("opacity 200ms, transform 300ms ease-out 50ms").unwrap();
    assert_eq!(
        serialize_layers(&layers),
        "opacity 200ms, transform 300ms 50ms ease-out"
    );
}

#[test]
fn test_serialize_normalizes_source_order() {
    let layers = parse("ease 1s opacity").unwrap();
    assert_eq!(serialize_layer(&layers[0]), "opacity 1s ease");
}

#[test]
fn test_serialize_partial_layer_emits_present_fields_only() {
    let layers = parse("opacity").unwrap();
    assert_eq!(serialize_layer(&layers[0]), "opacity");

    let layers = parse("1s linear").unwrap();
    assert_eq!(serialize_layer(&layers[0]), "1s linear");
}

#[test]
fn test_serialize_timing_functions() {
    let layers = parse("opacity 1s cubic-bezier(0.4, 0, 0.2, 1)").unwrap();
    assert_eq!(
        serialize_layer(&layers[0]),
        "opacity 1s cubic-bezier(0.4, 0, 0.2, 1)"
    );

    let layers = parse("opacity 1s steps(4, jump-end)").unwrap();
    assert_eq!(serialize_layer(&layers[0]), "opacity 1s steps(4, jump-end)");
}

#[test]
fn test_round_trip_law() {
    // Parse, serialize, re-parse: layers must come back field-wise equal.
    let sources = [
        "opacity 200ms",
        "all 0s 0s ease",
        "transform .3s ease-in-out -0.1s",
        "opacity 1s cubic-bezier(0.17, 0.67, 0.83, 0.67)",
        "width 2s steps(6, start), height 1s linear",
        "-webkit-transform 150ms step-end",
    ];

    for source in sources {
        let layers = parse(source).unwrap();
        let text = serialize_layers(&layers);
        let reparsed = parse(&text).unwrap_or_else(|e| {
            panic!("canonical text {:?} failed to re-parse: {}", text, e)
        });
        assert_eq!(layers, reparsed, "round trip diverged for {:?}", source);
    }
}

#[test]
fn test_resolved_layer_round_trips_with_defaults() {
    let layers = parse("opacity 200ms").unwrap();
    let properties = crate::extractor::extract_transition_properties(&layers[0]);
    let resolved = properties.resolve(&TransitionDefaults::default());

    let text = serialize_layer(&resolved);
    assert_eq!(text, "opacity 200ms 0s ease");
    assert_eq!(parse(&text).unwrap().remove(0), resolved);
}

#[test]
fn test_resolved_function_timing_round_trips() {
    let properties = TransitionProperties {
        property: Some(KeywordValue::new("transform")),
        duration: Some(UnitValue::new(0.25, "s")),
        delay: None,
        timing: Some(TimingFunction::Keyword(KeywordValue::new("step-start"))),
    };
    let resolved = properties.resolve(&TransitionDefaults::default());

    let text = serialize_layer(&resolved);
    assert_eq!(text, "transform 0.25s 0s step-start");
    assert_eq!(parse(&text).unwrap().remove(0), resolved);
}
