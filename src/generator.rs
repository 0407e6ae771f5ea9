//! Signature-driven card generation.
//!
//! [`SignatureCardGenerator`] turns a [`CardSignature`] into concrete visuals:
//! it picks frame textures for the signature's rarity, art for the best
//! matching base card type, and a glowing gem per element. All choices come
//! from an RNG seeded by the signature, so the same signature always yields
//! the same card.
//!
//! Missing content is never an error. A rarity without visuals, a signature
//! no base type matches, or an element without a gem visual simply leaves the
//! corresponding layers as they were.

use rand::Rng;
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::content::CardContent;
use crate::element::Element;
use crate::helper::{apply, compute_seed, determine_rarity, seeded_rng, select_weighted};
use crate::rarity::{CardRarity, RarityTally};
use crate::signature::CardSignature;
use crate::template::{CardTemplate, GEM_SLOT_COUNT};
use crate::visuals::{EmissionColor, GemVisual};

/// The host-side sink that displays a generated card.
pub trait CardRenderer {
    /// Sets the glow of the gem in `index` (0..8, element order).
    fn set_gem_emission(&mut self, index: usize, color: EmissionColor, strength: f32);

    /// Sets the card's name label.
    fn set_name_text(&mut self, text: &str);

    /// Sets the card's attribute label.
    fn set_attribute_text(&mut self, text: &str);
}

/// Emission written to one gem slot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct GemEmission {
    pub index: usize,
    pub color: EmissionColor,
    pub strength: f32,
}

/// A renderer that keeps whatever it was last told.
///
/// Useful wherever there is no real renderer: tools, tests, headless runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordingRenderer {
    pub emissions: [Option<GemEmission>; GEM_SLOT_COUNT],
    pub name_text: String,
    pub attribute_text: String,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emission(&self, index: usize) -> Option<&GemEmission> {
        self.emissions.get(index).and_then(|e| e.as_ref())
    }
}

impl CardRenderer for RecordingRenderer {
    fn set_gem_emission(&mut self, index: usize, color: EmissionColor, strength: f32) {
        if let Some(slot) = self.emissions.get_mut(index) {
            *slot = Some(GemEmission {
                index,
                color,
                strength,
            });
        }
    }

    fn set_name_text(&mut self, text: &str) {
        self.name_text = text.to_string();
    }

    fn set_attribute_text(&mut self, text: &str) {
        self.attribute_text = text.to_string();
    }
}

/// What generation decided for one card.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct GeneratedCard {
    pub signature: CardSignature,
    pub seed: i32,
    pub rarity: CardRarity,
    /// Name of the chosen base card type, if any matched.
    pub base_type: Option<String>,
    /// Emissions sent to the renderer, in slot order.
    pub gem_emissions: Vec<GemEmission>,
}

/// Something that can dress a card template for a signature.
pub trait CardGenerator {
    fn generate(
        &self,
        renderer: &mut dyn CardRenderer,
        signature: &CardSignature,
        template: &mut CardTemplate,
    ) -> GeneratedCard;
}

/// Generates card visuals deterministically from a signature.
#[derive(Debug, Clone, Default)]
pub struct SignatureCardGenerator {
    content: CardContent,
}

impl SignatureCardGenerator {
    pub fn new(content: CardContent) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &CardContent {
        &self.content
    }

    /// Draws a random signature from `rng` and generates a fresh card for it.
    pub fn generate_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        renderer: &mut dyn CardRenderer,
    ) -> (CardSignature, CardTemplate, GeneratedCard) {
        let signature = CardSignature::random(rng);
        let mut template = CardTemplate::new();
        let card = self.generate(renderer, &signature, &mut template);
        (signature, template, card)
    }

    /// Generates `count` random cards, recording each rarity in `tally`.
    pub fn generate_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        tally: &mut RarityTally,
    ) -> Vec<(CardTemplate, GeneratedCard)> {
        (0..count)
            .map(|_| {
                let mut renderer = RecordingRenderer::new();
                let (_, template, card) = self.generate_random(rng, &mut renderer);
                tally.record(card.rarity);
                (template, card)
            })
            .collect()
    }
}

impl CardGenerator for SignatureCardGenerator {
    fn generate(
        &self,
        renderer: &mut dyn CardRenderer,
        signature: &CardSignature,
        template: &mut CardTemplate,
    ) -> GeneratedCard {
        let seed = compute_seed(signature);
        let mut rng = seeded_rng(signature);

        let rarity = determine_rarity(signature);

        match self.content.rarity_visual(rarity) {
            Some(visuals) => {
                apply(&mut rng, &mut template.card_base, &visuals.base_options);
                apply(&mut rng, &mut template.border, &visuals.border_options);
                apply(&mut rng, &mut template.corners, &visuals.corner_options);
                apply(&mut rng, &mut template.banner, &visuals.banner_options);
                apply(
                    &mut rng,
                    &mut template.image_background,
                    &visuals.image_background_options,
                );
                apply(
                    &mut rng,
                    &mut template.description_box,
                    &visuals.description_box_options,
                );
                apply(
                    &mut rng,
                    &mut template.energy_container,
                    &visuals.energy_container_options,
                );
            }
            None => trace!(%rarity, "no rarity visuals registered"),
        }

        let candidates = self.content.matching_base_types(signature);
        let chosen = select_weighted(&mut rng, &candidates, |bt| bt.match_weight(signature));
        let base_type = match chosen {
            Some(base) => {
                apply(&mut rng, &mut template.art, &base.art_options);
                apply(&mut rng, &mut template.symbol, &base.symbol_options);
                apply(&mut rng, &mut template.energy_fill_1, &base.energy_fill_1_options);
                apply(&mut rng, &mut template.energy_fill_2, &base.energy_fill_2_options);
                Some(base.type_name.clone())
            }
            None => {
                trace!("no base card type matches");
                None
            }
        };

        let mut gem_emissions = Vec::new();
        for (i, element) in Element::ALL.iter().enumerate() {
            let Some(gem) = self.content.gem_visual(*element) else {
                trace!(%element, "no gem visual registered");
                continue;
            };
            let emission = set_gem_visuals(renderer, template, gem, signature, i);
            gem_emissions.push(emission);
        }

        renderer.set_name_text(rarity.name());
        renderer.set_attribute_text(&signature.to_string());

        debug!(
            seed,
            %rarity,
            base_type = base_type.as_deref().unwrap_or("-"),
            candidates = candidates.len(),
            "generated card"
        );

        GeneratedCard {
            signature: *signature,
            seed,
            rarity,
            base_type,
            gem_emissions,
        }
    }
}

fn set_gem_visuals(
    renderer: &mut dyn CardRenderer,
    template: &mut CardTemplate,
    gem: &GemVisual,
    signature: &CardSignature,
    index: usize,
) -> GemEmission {
    let element = gem.element;
    let positive = signature.get_element(element) >= 0.0;
    let intensity = signature.intensity(element);

    template.gem_sockets[index].texture = gem.socket_texture.clone();
    template.gems[index].texture = gem.gem_texture(positive).cloned();

    let (color, strength) = gem.emission(positive, intensity);
    renderer.set_gem_emission(index, color, strength);

    GemEmission {
        index,
        color,
        strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_type::BaseCardTypeBuilder;
    use crate::template::TextureRef;
    use crate::visuals::RarityVisual;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sig(values: [f32; 8]) -> CardSignature {
        CardSignature::from_array(values)
    }

    #[test]
    fn test_empty_content_leaves_template_untouched() {
        let generator = SignatureCardGenerator::default();
        let mut renderer = RecordingRenderer::new();
        let mut template = CardTemplate::new();
        let signature = sig([0.9, -0.3, 0.1, 0.0, 0.5, -0.7, 0.2, 0.4]);

        let card = generator.generate(&mut renderer, &signature, &mut template);

        assert_eq!(template, CardTemplate::new());
        assert_eq!(card.base_type, None);
        assert!(card.gem_emissions.is_empty());
        assert!(renderer.emissions.iter().all(|e| e.is_none()));
        assert_eq!(renderer.name_text, card.rarity.name());
        assert_eq!(renderer.attribute_text, signature.to_string());
    }

    #[test]
    fn test_rarity_visuals_fill_frame_layers() {
        let signature = CardSignature::from_array([1.0; 8]);
        let mut visuals = RarityVisual::new(CardRarity::Legendary);
        visuals.base_options = vec![TextureRef::new("gold_base.png")];
        visuals.border_options = vec![TextureRef::new("gold_border.png")];
        let generator = SignatureCardGenerator::new(CardContent {
            rarity_visuals: vec![visuals],
            ..CardContent::default()
        });

        let mut template = CardTemplate::new();
        let card = generator.generate(&mut RecordingRenderer::new(), &signature, &mut template);

        assert_eq!(card.rarity, CardRarity::Legendary);
        assert_eq!(template.card_base.texture, Some(TextureRef::new("gold_base.png")));
        assert_eq!(template.border.texture, Some(TextureRef::new("gold_border.png")));
        // options left empty keep their layer blank
        assert!(template.corners.is_empty());
    }

    #[test]
    fn test_other_rarity_visuals_are_ignored() {
        let signature = CardSignature::from_array([0.5; 8]);
        let mut visuals = RarityVisual::new(CardRarity::Legendary);
        visuals.base_options = vec![TextureRef::new("gold_base.png")];
        let generator = SignatureCardGenerator::new(CardContent {
            rarity_visuals: vec![visuals],
            ..CardContent::default()
        });

        let mut template = CardTemplate::new();
        let card = generator.generate(&mut RecordingRenderer::new(), &signature, &mut template);

        assert_eq!(card.rarity, CardRarity::Common);
        assert!(template.card_base.is_empty());
    }

    #[test]
    fn test_matching_base_type_supplies_art() {
        let base = BaseCardTypeBuilder::new("Spark", sig([0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]))
            .match_radius(0.5)
            .art(&["spark_art.png"])
            .symbols(&["spark_symbol.png"])
            .energy_fills(&["fill_a.png"], &["fill_b.png"])
            .build();
        let generator = SignatureCardGenerator::new(CardContent {
            base_types: vec![base],
            ..CardContent::default()
        });

        let mut template = CardTemplate::new();
        let card = generator.generate(
            &mut RecordingRenderer::new(),
            &sig([0.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            &mut template,
        );

        assert_eq!(card.base_type.as_deref(), Some("Spark"));
        assert_eq!(template.art.texture, Some(TextureRef::new("spark_art.png")));
        assert_eq!(template.symbol.texture, Some(TextureRef::new("spark_symbol.png")));
        assert_eq!(template.energy_fill_1.texture, Some(TextureRef::new("fill_a.png")));
        assert_eq!(template.energy_fill_2.texture, Some(TextureRef::new("fill_b.png")));
        assert!(template.energy_fill_full.is_empty());
    }

    #[test]
    fn test_no_matching_base_type_leaves_art_alone() {
        let base = BaseCardTypeBuilder::new("Spark", sig([0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]))
            .art(&["spark_art.png"])
            .build();
        let generator = SignatureCardGenerator::new(CardContent {
            base_types: vec![base],
            ..CardContent::default()
        });

        let mut template = CardTemplate::new();
        template.art.texture = Some(TextureRef::new("previous.png"));
        let card = generator.generate(
            &mut RecordingRenderer::new(),
            &sig([1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            &mut template,
        );

        assert_eq!(card.base_type, None);
        assert_eq!(template.art.texture, Some(TextureRef::new("previous.png")));
    }

    #[test]
    fn test_gems_follow_sign_and_intensity() {
        let gem = GemVisual {
            socket_texture: Some(TextureRef::new("socket.png")),
            positive_gem_texture: Some(TextureRef::new("ignis.png")),
            positive_emission_color: EmissionColor::rgb(1.0, 0.3, 0.0),
            positive_emission_strength: 4.0,
            negative_gem_texture: Some(TextureRef::new("hydris.png")),
            negative_emission_color: EmissionColor::rgb(0.0, 0.3, 1.0),
            negative_emission_strength: 2.0,
            ..GemVisual::new(Element::Febris)
        };
        let generator = SignatureCardGenerator::new(CardContent {
            gem_visuals: vec![gem],
            ..CardContent::default()
        });

        let mut renderer = RecordingRenderer::new();
        let mut template = CardTemplate::new();
        let card = generator.generate(
            &mut renderer,
            &sig([0.0, -0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            &mut template,
        );

        let febris = Element::Febris.index();
        assert_eq!(template.gem_sockets[febris].texture, Some(TextureRef::new("socket.png")));
        assert_eq!(template.gems[febris].texture, Some(TextureRef::new("hydris.png")));
        let emission = renderer.emission(febris).expect("febris gem should glow");
        assert_eq!(emission.color, EmissionColor::rgb(0.0, 0.3, 1.0));
        assert_eq!(emission.strength, 1.0);

        // only the registered element got a gem
        assert_eq!(card.gem_emissions.len(), 1);
        assert!(template.gems[Element::Solidum.index()].is_empty());
        assert!(renderer.emission(Element::Solidum.index()).is_none());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = SignatureCardGenerator::new(CardContent::with_builtin());
        let signature = sig([0.1, 0.75, -0.2, 0.3, 0.05, -0.1, -0.35, 0.0]);

        let mut first = CardTemplate::new();
        let mut second = CardTemplate::new();
        let mut renderer_a = RecordingRenderer::new();
        let mut renderer_b = RecordingRenderer::new();
        let a = generator.generate(&mut renderer_a, &signature, &mut first);
        let b = generator.generate(&mut renderer_b, &signature, &mut second);

        assert_eq!(a, b);
        assert_eq!(first, second);
        assert_eq!(renderer_a, renderer_b);
    }

    #[test]
    fn test_generate_random_uses_caller_rng() {
        let generator = SignatureCardGenerator::new(CardContent::with_builtin());
        let mut rng_a = StdRng::seed_from_u64(77);
        let mut rng_b = StdRng::seed_from_u64(77);

        let (sig_a, template_a, card_a) =
            generator.generate_random(&mut rng_a, &mut RecordingRenderer::new());
        let (sig_b, template_b, card_b) =
            generator.generate_random(&mut rng_b, &mut RecordingRenderer::new());

        assert_eq!(sig_a, sig_b);
        assert_eq!(template_a, template_b);
        assert_eq!(card_a, card_b);
        assert_eq!(card_a.signature, sig_a);
    }

    #[test]
    fn test_generate_batch_tallies() {
        let generator = SignatureCardGenerator::new(CardContent::with_builtin());
        let mut rng = StdRng::seed_from_u64(5);
        let mut tally = RarityTally::new();

        let cards = generator.generate_batch(&mut rng, 25, &mut tally);

        assert_eq!(cards.len(), 25);
        assert_eq!(tally.total(), 25);
        for rarity in CardRarity::ALL {
            let expected = cards.iter().filter(|(_, c)| c.rarity == rarity).count() as u32;
            assert_eq!(tally.count(rarity), expected);
        }
    }

    #[test]
    fn test_generator_behind_trait_object() {
        let generator: Box<dyn CardGenerator> =
            Box::new(SignatureCardGenerator::new(CardContent::with_builtin()));
        let mut template = CardTemplate::new();
        let card = generator.generate(
            &mut RecordingRenderer::new(),
            &CardSignature::new(),
            &mut template,
        );
        assert_eq!(card.seed, -153111983);
        assert_eq!(card.rarity, CardRarity::Legendary);
        assert_eq!(card.gem_emissions.len(), 8);
        assert!(card.gem_emissions.iter().all(|e| e.strength == 0.0));
    }
}
