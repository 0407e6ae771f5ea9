//! Authored base card types and how signatures are matched against them.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::modifier::ResidualEnergyModifier;
use crate::rarity::{CardCategory, CardRarity};
use crate::signature::CardSignature;
use crate::template::TextureRef;

/// Default distance within which a signature matches a base type.
pub const DEFAULT_MATCH_RADIUS: f32 = 0.5;

/// Total residual deviation that counts as fully unusual.
const UNUSUALNESS_SCALE: f32 = 4.0;

/// Most rarity tiers an unusual signature can add on top of the base rarity.
const MAX_RARITY_BOOST: f32 = 2.0;

/// Share of the summed modifier effects that feeds into a card's value.
const POWER_VALUE_WEIGHT: f32 = 0.5;

/// A card archetype anchored at a reference signature.
///
/// Static game data: created when content is authored or loaded and only
/// read afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct BaseCardType {
    pub type_name: String,
    pub description: String,
    pub category: CardCategory,
    pub base_rarity: CardRarity,
    pub base_signature: CardSignature,
    /// How far a signature may be from `base_signature` and still match.
    pub match_radius: f32,

    pub art_options: Vec<TextureRef>,
    pub symbol_options: Vec<TextureRef>,
    pub energy_fill_1_options: Vec<TextureRef>,
    pub energy_fill_2_options: Vec<TextureRef>,

    pub base_power: f32,
    /// Monetary value before rarity and modifiers.
    pub base_value: f32,
    /// Energy cost.
    pub base_cost: u32,

    /// Applied in order to the residual energy of a matching signature.
    pub modifiers: Vec<ResidualEnergyModifier>,
    pub base_effect_template: String,
}

impl Default for BaseCardType {
    fn default() -> Self {
        Self {
            type_name: String::new(),
            description: String::new(),
            category: CardCategory::Skill,
            base_rarity: CardRarity::Common,
            base_signature: CardSignature::new(),
            match_radius: DEFAULT_MATCH_RADIUS,
            art_options: Vec::new(),
            symbol_options: Vec::new(),
            energy_fill_1_options: Vec::new(),
            energy_fill_2_options: Vec::new(),
            base_power: 1.0,
            base_value: 10.0,
            base_cost: 1,
            modifiers: Vec::new(),
            base_effect_template: String::new(),
        }
    }
}

impl BaseCardType {
    /// True when the signature lies within the match radius.
    pub fn can_match(&self, signature: &CardSignature) -> bool {
        self.can_match_within(signature, -1.0)
    }

    /// Like [`can_match`](Self::can_match), but a positive `max_distance`
    /// replaces the match radius.
    pub fn can_match_within(&self, signature: &CardSignature, max_distance: f32) -> bool {
        let threshold = if max_distance > 0.0 {
            max_distance
        } else {
            self.match_radius
        };
        signature.distance_to(&self.base_signature) <= threshold
    }

    /// Inverse-distance weight: 1 at the base signature, falling with
    /// distance, 0 outside the radius. Not normalized across types.
    pub fn match_weight(&self, signature: &CardSignature) -> f32 {
        let distance = signature.distance_to(&self.base_signature);
        if distance > self.match_radius {
            return 0.0;
        }
        1.0 / (1.0 + distance)
    }

    /// The signature's energy left over after removing the base signature.
    pub fn residual(&self, signature: &CardSignature) -> CardSignature {
        signature.subtract(&self.base_signature)
    }

    /// Base rarity raised by up to two tiers for unusual signatures.
    pub fn actual_rarity(&self, signature: &CardSignature) -> CardRarity {
        let unusualness = unusualness(&self.residual(signature));
        let boost = (unusualness * MAX_RARITY_BOOST).floor() as usize;
        CardRarity::from_ordinal_saturating(self.base_rarity.ordinal() + boost)
    }

    /// Base value scaled by rarity (1x to 5x) and by the summed modifier effects.
    pub fn actual_value(&self, signature: &CardSignature) -> f32 {
        let rarity_multiplier = self.actual_rarity(signature).multiplier();
        let power_modifier = self.power_modifier(&self.residual(signature));
        self.base_value * rarity_multiplier * (1.0 + power_modifier * POWER_VALUE_WEIGHT)
    }

    /// Effect text of every modifier, in order.
    pub fn effect_texts(&self, signature: &CardSignature) -> Vec<String> {
        let residual = self.residual(signature);
        self.modifiers
            .iter()
            .map(|modifier| modifier.effect_text(&residual))
            .collect()
    }

    fn power_modifier(&self, residual: &CardSignature) -> f32 {
        self.modifiers
            .iter()
            .map(|modifier| modifier.calculate_effect(residual))
            .sum()
    }
}

/// Summed residual magnitude mapped onto [0, 1].
fn unusualness(residual: &CardSignature) -> f32 {
    let total: f32 = residual.elements().iter().map(|e| e.abs()).sum();
    (total / UNUSUALNESS_SCALE).clamp(0.0, 1.0)
}

/// Builder for [`BaseCardType`].
#[derive(Debug, Clone)]
pub struct BaseCardTypeBuilder {
    card_type: BaseCardType,
}

impl BaseCardTypeBuilder {
    pub fn new(type_name: impl Into<String>, base_signature: CardSignature) -> Self {
        Self {
            card_type: BaseCardType {
                type_name: type_name.into(),
                base_signature,
                ..BaseCardType::default()
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.card_type.description = description.into();
        self
    }

    pub fn category(mut self, category: CardCategory) -> Self {
        self.card_type.category = category;
        self
    }

    pub fn base_rarity(mut self, rarity: CardRarity) -> Self {
        self.card_type.base_rarity = rarity;
        self
    }

    pub fn match_radius(mut self, radius: f32) -> Self {
        self.card_type.match_radius = radius;
        self
    }

    pub fn art(mut self, options: &[&str]) -> Self {
        self.card_type.art_options = textures(options);
        self
    }

    pub fn symbols(mut self, options: &[&str]) -> Self {
        self.card_type.symbol_options = textures(options);
        self
    }

    pub fn energy_fills(mut self, fill_1: &[&str], fill_2: &[&str]) -> Self {
        self.card_type.energy_fill_1_options = textures(fill_1);
        self.card_type.energy_fill_2_options = textures(fill_2);
        self
    }

    pub fn base_power(mut self, power: f32) -> Self {
        self.card_type.base_power = power;
        self
    }

    pub fn base_value(mut self, value: f32) -> Self {
        self.card_type.base_value = value;
        self
    }

    pub fn base_cost(mut self, cost: u32) -> Self {
        self.card_type.base_cost = cost;
        self
    }

    pub fn modifier(mut self, modifier: ResidualEnergyModifier) -> Self {
        self.card_type.modifiers.push(modifier);
        self
    }

    pub fn effect_template(mut self, template: impl Into<String>) -> Self {
        self.card_type.base_effect_template = template.into();
        self
    }

    pub fn build(self) -> BaseCardType {
        self.card_type
    }
}

fn textures(paths: &[&str]) -> Vec<TextureRef> {
    paths.iter().map(|path| TextureRef::new(*path)).collect()
}
