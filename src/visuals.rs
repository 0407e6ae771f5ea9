//! Authored visual bundles keyed by rarity and by element.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::rarity::CardRarity;
use crate::template::TextureRef;

/// Linear RGB color used for gem emission.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct EmissionColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl EmissionColor {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for EmissionColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Texture options for the frame layers of cards of one rarity.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct RarityVisual {
    pub rarity: CardRarity,
    pub base_options: Vec<TextureRef>,
    pub border_options: Vec<TextureRef>,
    pub corner_options: Vec<TextureRef>,
    pub banner_options: Vec<TextureRef>,
    pub image_background_options: Vec<TextureRef>,
    pub description_box_options: Vec<TextureRef>,
    pub energy_container_options: Vec<TextureRef>,
}

impl RarityVisual {
    pub fn new(rarity: CardRarity) -> Self {
        Self {
            rarity,
            ..Self::default()
        }
    }
}

/// How the gem for one element looks on each side of zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct GemVisual {
    pub element: Element,
    pub socket_texture: Option<TextureRef>,

    pub positive_gem_texture: Option<TextureRef>,
    pub positive_emission_color: EmissionColor,
    /// Authored in 0..10.
    pub positive_emission_strength: f32,

    pub negative_gem_texture: Option<TextureRef>,
    pub negative_emission_color: EmissionColor,
    /// Authored in 0..10.
    pub negative_emission_strength: f32,
}

impl Default for GemVisual {
    fn default() -> Self {
        Self {
            element: Element::Solidum,
            socket_texture: None,
            positive_gem_texture: None,
            positive_emission_color: EmissionColor::WHITE,
            positive_emission_strength: 1.0,
            negative_gem_texture: None,
            negative_emission_color: EmissionColor::WHITE,
            negative_emission_strength: 1.0,
        }
    }
}

impl GemVisual {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            ..Self::default()
        }
    }

    /// Gem texture for the given side.
    pub fn gem_texture(&self, positive: bool) -> Option<&TextureRef> {
        if positive {
            self.positive_gem_texture.as_ref()
        } else {
            self.negative_gem_texture.as_ref()
        }
    }

    /// Emission color and strength for the given side, with the strength
    /// scaled by the element's intensity.
    pub fn emission(&self, positive: bool, intensity: f32) -> (EmissionColor, f32) {
        if positive {
            (
                self.positive_emission_color,
                intensity * self.positive_emission_strength,
            )
        } else {
            (
                self.negative_emission_color,
                intensity * self.negative_emission_strength,
            )
        }
    }
}
