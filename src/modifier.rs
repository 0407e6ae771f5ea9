//! Residual energy modifiers.
//!
//! A modifier reads one element of a card's residual energy (its signature
//! minus the base type's reference signature) and turns it into a number.
//! It only contributes when the residual leans toward the configured aspect;
//! otherwise it falls back to its base value.

use std::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::element::{Aspect, Element};
use crate::signature::CardSignature;

/// What a modifier changes about a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ModifierType {
    /// Damage or effectiveness
    #[default]
    Power,
    /// Energy cost
    Cost,
    /// How long effects last
    Duration,
    /// Area of effect or targeting range
    Range,
    Healing,
    /// Attack or movement speed
    Speed,
    Defense,
    Special,
}

impl ModifierType {
    pub const fn name(self) -> &'static str {
        match self {
            ModifierType::Power => "Power",
            ModifierType::Cost => "Cost",
            ModifierType::Duration => "Duration",
            ModifierType::Range => "Range",
            ModifierType::Healing => "Healing",
            ModifierType::Speed => "Speed",
            ModifierType::Defense => "Defense",
            ModifierType::Special => "Special",
        }
    }
}

impl fmt::Display for ModifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One-sided linear rule from an element's residual energy to an effect value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct ResidualEnergyModifier {
    pub name: String,
    pub modifier_type: ModifierType,
    pub source_element: Element,
    /// Effect per unit of aligned residual energy. Negative values shrink the effect.
    pub intensity: f32,
    /// Look for positive residual values when true, negative ones when false.
    pub use_positive_aspect: bool,
    /// Value returned when the residual does not line up with the aspect.
    pub base_value: f32,
    /// Text with `{VALUE}`, `{TYPE}` and `{ELEMENT}` placeholders.
    pub effect_template: String,
}

impl Default for ResidualEnergyModifier {
    fn default() -> Self {
        Self {
            name: String::new(),
            modifier_type: ModifierType::Power,
            source_element: Element::Solidum,
            intensity: 1.0,
            use_positive_aspect: true,
            base_value: 0.0,
            effect_template: String::new(),
        }
    }
}

impl ResidualEnergyModifier {
    /// Effect value for the given residual energy.
    pub fn calculate_effect(&self, residual: &CardSignature) -> f32 {
        let mut value = residual.get_element(self.source_element);
        if !self.use_positive_aspect {
            value = -value;
        }

        if value < 0.0 {
            return self.base_value;
        }

        self.base_value + value * self.intensity
    }

    /// Describes the effect, filling the template's placeholders.
    pub fn effect_text(&self, residual: &CardSignature) -> String {
        let effect = self.calculate_effect(residual);

        if self.effect_template.is_empty() {
            return format!("{}: {}", self.modifier_type, format_effect(effect));
        }

        self.effect_template
            .replace("{VALUE}", &format_effect(effect))
            .replace("{TYPE}", self.modifier_type.name())
            .replace("{ELEMENT}", self.source_element.name())
    }

    /// The aspect this modifier responds to.
    pub fn relevant_aspect(&self) -> Aspect {
        self.source_element.aspect(self.use_positive_aspect)
    }

    /// A power bonus that grows with aligned residual energy, starting at 0.
    pub fn power(element: Element, positive: bool, intensity: f32) -> Self {
        Self {
            name: format!("{} Power", element.aspect(positive)),
            modifier_type: ModifierType::Power,
            source_element: element,
            intensity,
            use_positive_aspect: positive,
            base_value: 0.0,
            effect_template: "Power +{VALUE}".to_string(),
        }
    }

    /// A cost that starts at 1 and drops as aligned residual energy grows.
    pub fn cost(element: Element, positive: bool, intensity: f32) -> Self {
        Self {
            name: format!("{} Efficiency", element.aspect(positive)),
            modifier_type: ModifierType::Cost,
            source_element: element,
            intensity: -intensity,
            use_positive_aspect: positive,
            base_value: 1.0,
            effect_template: "Cost {VALUE}".to_string(),
        }
    }

    pub fn power_default(element: Element) -> Self {
        Self::power(element, true, 1.0)
    }

    pub fn cost_default(element: Element) -> Self {
        Self::cost(element, true, 0.5)
    }
}

/// One decimal place, halves rounded away from zero.
fn format_effect(value: f32) -> String {
    let rounded = (f64::from(value) * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}
