use crate::ast::{
    is_timing_keyword, KeywordValue, TimingFunction, TransitionLayer, UnitValue, Value,
};
use serde::{Deserialize, Serialize};

/// The four semantic fields of a transition layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionProperties {
    pub property: Option<KeywordValue>,
    pub duration: Option<UnitValue>,
    pub delay: Option<UnitValue>,
    pub timing: Option<TimingFunction>,
}

impl TransitionProperties {
    /// Overlay `patch` on this record: fields the patch provides replace
    /// the current ones, the rest keep their current value.
    pub fn overlaid(&self, patch: &TransitionProperties) -> TransitionProperties {
        TransitionProperties {
            property: patch.property.clone().or_else(|| self.property.clone()),
            duration: patch.duration.clone().or_else(|| self.duration.clone()),
            delay: patch.delay.clone().or_else(|| self.delay.clone()),
            timing: patch.timing.clone().or_else(|| self.timing.clone()),
        }
    }

    /// Resolve to a complete canonical layer, substituting the configured
    /// default for every absent field.
    pub fn resolve(&self, defaults: &TransitionDefaults) -> TransitionLayer {
        TransitionLayer::new(vec![
            Value::Keyword(
                self.property
                    .clone()
                    .unwrap_or_else(|| defaults.property.clone()),
            ),
            Value::Unit(
                self.duration
                    .clone()
                    .unwrap_or_else(|| defaults.duration.clone()),
            ),
            Value::Unit(self.delay.clone().unwrap_or_else(|| defaults.delay.clone())),
            self.timing
                .clone()
                .unwrap_or_else(|| defaults.timing.clone())
                .into_value(),
        ])
    }
}

/// Configured fallbacks for absent layer fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDefaults {
    pub property: KeywordValue,
    pub duration: UnitValue,
    pub delay: UnitValue,
    pub timing: TimingFunction,
}

impl Default for TransitionDefaults {
    /// The CSS initial values: `all 0s 0s ease`
    fn default() -> Self {
        Self {
            property: KeywordValue::new("all"),
            duration: UnitValue::new(0.0, "s"),
            delay: UnitValue::new(0.0, "s"),
            timing: TimingFunction::Keyword(KeywordValue::new("ease")),
        }
    }
}

impl TransitionDefaults {
    /// A complete layer built from the defaults alone
    pub fn to_layer(&self) -> TransitionLayer {
        TransitionProperties::default().resolve(self)
    }
}

/// Extract the semantic fields from a layer tuple.
///
/// Dispatch is by token kind, never by position: the first unit value is
/// the duration and the second the delay (the slot order the parser
/// assigned), easing keywords and functions fill the timing slot, and
/// any other keyword names the property. Absent fields stay `None`;
/// extra values are ignored; there is no error path.
pub fn extract_transition_properties(layer: &TransitionLayer) -> TransitionProperties {
    let mut properties = TransitionProperties::default();

    for value in &layer.values {
        match value {
            Value::Unit(unit) => {
                if properties.duration.is_none() {
                    properties.duration = Some(unit.clone());
                } else if properties.delay.is_none() {
                    properties.delay = Some(unit.clone());
                }
            }
            Value::Keyword(keyword) => {
                if is_timing_keyword(&keyword.name) && properties.timing.is_none() {
                    properties.timing = Some(TimingFunction::Keyword(keyword.clone()));
                } else if properties.property.is_none() {
                    properties.property = Some(keyword.clone());
                }
            }
            Value::Function(function) => {
                if properties.timing.is_none() {
                    properties.timing = Some(TimingFunction::Function(function.clone()));
                }
            }
        }
    }

    properties
}
