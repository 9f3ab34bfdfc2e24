//! Serializer converts parsed transition values back to CSS text.
//!
//! Output is canonical rather than lossless: fields come out in fixed
//! order (property, duration, delay, timing), separated by single
//! spaces, with layers joined by ", ". Only present fields are emitted.

use crate::ast::TransitionLayer;
use crate::extractor::extract_transition_properties;

/// Render a single layer to canonical text
pub fn serialize_layer(layer: &TransitionLayer) -> String {
    let properties = extract_transition_properties(layer);
    let mut parts: Vec<String> = Vec::with_capacity(4);

    if let Some(property) = &properties.property {
        parts.push(property.to_string());
    }
    if let Some(duration) = &properties.duration {
        parts.push(duration.to_string());
    }
    if let Some(delay) = &properties.delay {
        parts.push(delay.to_string());
    }
    if let Some(timing) = &properties.timing {
        parts.push(timing.to_string());
    }

    parts.join(" ")
}

/// Render a complete multi-layer transition value
pub fn serialize_layers(layers: &[TransitionLayer]) -> String {
    layers
        .iter()
        .map(serialize_layer)
        .collect::<Vec<_>>()
        .join(", ")
}
