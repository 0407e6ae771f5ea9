//! Content tables consumed by card generation.
//!
//! Content is plain data: base card types, per-rarity frame visuals and
//! per-element gem visuals. A small builtin set ships with the crate; the
//! `serialization` feature adds JSON loading.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serialization")]
use std::fmt;
#[cfg(feature = "serialization")]
use std::path::Path;

use crate::card_type::{BaseCardType, BaseCardTypeBuilder};
use crate::element::Element;
use crate::modifier::{ModifierType, ResidualEnergyModifier};
use crate::rarity::{CardCategory, CardRarity};
use crate::signature::CardSignature;
use crate::template::TextureRef;
use crate::visuals::{EmissionColor, GemVisual, RarityVisual};

/// All authored data a generator needs.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct CardContent {
    pub base_types: Vec<BaseCardType>,
    pub rarity_visuals: Vec<RarityVisual>,
    pub gem_visuals: Vec<GemVisual>,
}

impl CardContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// First visual bundle registered for `rarity`.
    pub fn rarity_visual(&self, rarity: CardRarity) -> Option<&RarityVisual> {
        self.rarity_visuals.iter().find(|rv| rv.rarity == rarity)
    }

    /// First gem visual registered for `element`.
    pub fn gem_visual(&self, element: Element) -> Option<&GemVisual> {
        self.gem_visuals.iter().find(|gv| gv.element == element)
    }

    /// Base types whose match radius contains the signature, in table order.
    pub fn matching_base_types(&self, signature: &CardSignature) -> Vec<&BaseCardType> {
        self.base_types
            .iter()
            .filter(|bt| bt.can_match(signature))
            .collect()
    }

    pub fn base_type(&self, type_name: &str) -> Option<&BaseCardType> {
        self.base_types.iter().find(|bt| bt.type_name == type_name)
    }

    /// The content shipped with the crate.
    pub fn with_builtin() -> Self {
        Self {
            base_types: builtin_base_types(),
            rarity_visuals: CardRarity::ALL.iter().map(|r| builtin_rarity_visual(*r)).collect(),
            gem_visuals: Element::ALL.iter().map(|e| builtin_gem_visual(*e)).collect(),
        }
    }
}

fn builtin_base_types() -> Vec<BaseCardType> {
    vec![
        BaseCardTypeBuilder::new(
            "Ember Strike",
            CardSignature::from_array([0.0, 0.8, -0.2, 0.3, 0.0, 0.0, -0.4, 0.0]),
        )
        .description("A burst of heat thrown at close range.")
        .category(CardCategory::Skill)
        .match_radius(0.9)
        .art(&["textures/art/ember_strike_0.png", "textures/art/ember_strike_1.png"])
        .symbols(&["textures/symbols/flame.png"])
        .energy_fills(&["textures/energy/red_half.png"], &["textures/energy/orange_half.png"])
        .base_power(3.0)
        .base_value(12.0)
        .base_cost(2)
        .modifier(ResidualEnergyModifier::power_default(Element::Febris))
        .modifier(ResidualEnergyModifier::cost_default(Element::Spatium))
        .effect_template("Deal fire damage to a nearby target.")
        .build(),
        BaseCardTypeBuilder::new(
            "Stone Ward",
            CardSignature::from_array([0.8, 0.0, 0.4, 0.0, 0.0, 0.6, 0.3, 0.0]),
        )
        .description("A wall of packed earth.")
        .category(CardCategory::Equipment)
        .match_radius(0.9)
        .art(&["textures/art/stone_ward_0.png"])
        .symbols(&["textures/symbols/shield.png"])
        .energy_fills(&["textures/energy/brown_half.png"], &["textures/energy/grey_half.png"])
        .base_power(1.0)
        .base_value(10.0)
        .base_cost(1)
        .modifier(ResidualEnergyModifier {
            name: "Gravitas Guard".to_string(),
            modifier_type: ModifierType::Defense,
            source_element: Element::Inertiae,
            intensity: 2.0,
            base_value: 0.0,
            effect_template: "Defense +{VALUE}".to_string(),
            ..ResidualEnergyModifier::default()
        })
        .build(),
        BaseCardTypeBuilder::new(
            "Tide Mend",
            CardSignature::from_array([0.0, -0.7, 0.0, 0.4, 0.0, 0.0, 0.8, 0.0]),
        )
        .description("Cool water that closes wounds.")
        .category(CardCategory::Skill)
        .base_rarity(CardRarity::Uncommon)
        .match_radius(0.8)
        .art(&["textures/art/tide_mend_0.png", "textures/art/tide_mend_1.png"])
        .symbols(&["textures/symbols/droplet.png"])
        .energy_fills(&["textures/energy/blue_half.png"], &["textures/energy/teal_half.png"])
        .base_value(15.0)
        .base_cost(2)
        .modifier(ResidualEnergyModifier {
            name: "Auxillus Healing".to_string(),
            modifier_type: ModifierType::Healing,
            source_element: Element::Subsidium,
            intensity: 1.5,
            base_value: 1.0,
            effect_template: "Heal {VALUE}".to_string(),
            ..ResidualEnergyModifier::default()
        })
        .modifier(ResidualEnergyModifier::cost(Element::Febris, false, 0.5))
        .build(),
        BaseCardTypeBuilder::new(
            "Drift Step",
            CardSignature::from_array([-0.7, 0.0, -0.3, 0.0, 0.5, -0.6, 0.0, 0.6]),
        )
        .description("Slip through space to a distant point.")
        .category(CardCategory::Playstyle)
        .base_rarity(CardRarity::Rare)
        .match_radius(0.8)
        .art(&["textures/art/drift_step_0.png"])
        .symbols(&["textures/symbols/spiral.png"])
        .energy_fills(&["textures/energy/violet_half.png"], &["textures/energy/white_half.png"])
        .base_value(20.0)
        .base_cost(3)
        .modifier(ResidualEnergyModifier {
            name: "Disis Range".to_string(),
            modifier_type: ModifierType::Range,
            source_element: Element::Spatium,
            intensity: 3.0,
            base_value: 1.0,
            effect_template: "{TYPE} {VALUE} ({ELEMENT})".to_string(),
            ..ResidualEnergyModifier::default()
        })
        .modifier(ResidualEnergyModifier::power(Element::Inertiae, false, 0.5))
        .build(),
    ]
}

fn builtin_rarity_visual(rarity: CardRarity) -> RarityVisual {
    let tier = rarity.name().to_lowercase();
    let frame = |part: &str, count: usize| -> Vec<TextureRef> {
        (0..count)
            .map(|i| TextureRef::new(format!("textures/frames/{tier}/{part}_{i}.png")))
            .collect()
    };
    RarityVisual {
        rarity,
        base_options: frame("base", 2),
        border_options: frame("border", 2),
        corner_options: frame("corners", 1),
        banner_options: frame("banner", 1),
        image_background_options: frame("background", 3),
        description_box_options: frame("description", 1),
        energy_container_options: frame("energy_container", 1),
    }
}

fn builtin_gem_visual(element: Element) -> GemVisual {
    let (positive_color, negative_color) = match element {
        Element::Solidum => (EmissionColor::rgb(0.55, 0.4, 0.2), EmissionColor::rgb(0.8, 0.95, 1.0)),
        Element::Febris => (EmissionColor::rgb(1.0, 0.35, 0.05), EmissionColor::rgb(0.1, 0.45, 1.0)),
        Element::Ordinem => (EmissionColor::rgb(0.9, 0.9, 1.0), EmissionColor::rgb(0.7, 0.1, 0.6)),
        Element::Lumines => (EmissionColor::rgb(1.0, 0.95, 0.6), EmissionColor::rgb(0.15, 0.1, 0.3)),
        Element::Varias => (EmissionColor::rgb(0.3, 0.9, 0.8), EmissionColor::rgb(0.9, 0.75, 0.2)),
        Element::Inertiae => (EmissionColor::rgb(0.35, 0.35, 0.4), EmissionColor::rgb(0.85, 1.0, 0.85)),
        Element::Subsidium => (EmissionColor::rgb(0.3, 1.0, 0.4), EmissionColor::rgb(0.6, 0.0, 0.1)),
        Element::Spatium => (EmissionColor::rgb(0.5, 0.3, 1.0), EmissionColor::rgb(1.0, 0.6, 0.3)),
    };
    let name = element.name().to_lowercase();
    GemVisual {
        element,
        socket_texture: Some(TextureRef::new("textures/gems/socket.png")),
        positive_gem_texture: Some(TextureRef::new(format!(
            "textures/gems/{name}_{}.png",
            element.positive().name().to_lowercase()
        ))),
        positive_emission_color: positive_color,
        positive_emission_strength: 3.0,
        negative_gem_texture: Some(TextureRef::new(format!(
            "textures/gems/{name}_{}.png",
            element.negative().name().to_lowercase()
        ))),
        negative_emission_color: negative_color,
        negative_emission_strength: 2.0,
    }
}

/// Error loading content from disk or text.
#[cfg(feature = "serialization")]
#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

#[cfg(feature = "serialization")]
impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(err) => write!(f, "Failed to read content: {}", err),
            ContentError::Parse(err) => write!(f, "Failed to parse content: {}", err),
        }
    }
}

#[cfg(feature = "serialization")]
impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Io(err) => Some(err),
            ContentError::Parse(err) => Some(err),
        }
    }
}

#[cfg(feature = "serialization")]
impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::Io(err)
    }
}

#[cfg(feature = "serialization")]
impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err)
    }
}

#[cfg(feature = "serialization")]
impl CardContent {
    pub fn from_json_str(text: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a JSON content file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
