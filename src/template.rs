//! The visual card template that generation fills in.
//!
//! A template is a fixed set of named layers. The renderer composites them in
//! order; generation only decides which texture each layer shows.

use std::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Number of gem sockets (and gems) on a card, one per element.
pub const GEM_SLOT_COUNT: usize = Element::COUNT;

/// Path or resource key of a texture owned by the host engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(transparent))]
pub struct TextureRef(pub String);

impl TextureRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TextureRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// One texture layer of a card.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct LayerData {
    pub texture: Option<TextureRef>,
    /// UV region as `[x, y, width, height]`.
    pub region: [f32; 4],
    pub render_on_front: bool,
    pub render_on_back: bool,
}

impl Default for LayerData {
    fn default() -> Self {
        Self {
            texture: None,
            region: [0.0, 0.0, 1.0, 1.0],
            render_on_front: true,
            render_on_back: false,
        }
    }
}

impl LayerData {
    pub fn is_empty(&self) -> bool {
        self.texture.is_none()
    }
}

/// All layers of one card, in compositing order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct CardTemplate {
    pub card_base: LayerData,
    pub border: LayerData,
    pub corners: LayerData,
    pub art: LayerData,
    pub symbol: LayerData,
    pub image_background: LayerData,
    pub banner: LayerData,
    pub description_box: LayerData,
    pub energy_container: LayerData,
    pub energy_fill_1: LayerData,
    pub energy_fill_2: LayerData,
    pub energy_fill_full: LayerData,
    pub gem_sockets: [LayerData; GEM_SLOT_COUNT],
    pub gems: [LayerData; GEM_SLOT_COUNT],
}

impl CardTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every layer with a display name, in compositing order.
    pub fn layers(&self) -> Vec<(String, &LayerData)> {
        let mut layers = vec![
            ("card_base".to_string(), &self.card_base),
            ("border".to_string(), &self.border),
            ("corners".to_string(), &self.corners),
            ("art".to_string(), &self.art),
            ("symbol".to_string(), &self.symbol),
            ("image_background".to_string(), &self.image_background),
            ("banner".to_string(), &self.banner),
            ("description_box".to_string(), &self.description_box),
            ("energy_container".to_string(), &self.energy_container),
            ("energy_fill_1".to_string(), &self.energy_fill_1),
            ("energy_fill_2".to_string(), &self.energy_fill_2),
            ("energy_fill_full".to_string(), &self.energy_fill_full),
        ];
        for (i, socket) in self.gem_sockets.iter().enumerate() {
            layers.push((format!("gem_socket_{i}"), socket));
        }
        for (i, gem) in self.gems.iter().enumerate() {
            layers.push((format!("gem_{i}"), gem));
        }
        layers
    }

    /// Number of layers that have a texture.
    pub fn filled_layer_count(&self) -> usize {
        self.layers()
            .iter()
            .filter(|(_, layer)| !layer.is_empty())
            .count()
    }
}
