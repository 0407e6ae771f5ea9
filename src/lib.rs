pub mod card_type;
pub mod content;
pub mod element;
pub mod generator;
pub mod helper;
pub mod modifier;
pub mod rarity;
pub mod signature;
pub mod template;
pub mod visuals;


pub use card_type::{BaseCardType, BaseCardTypeBuilder, DEFAULT_MATCH_RADIUS};
pub use content::CardContent;
#[cfg(feature = "serialization")]
pub use content::ContentError;
pub use element::{Aspect, Element};
pub use generator::{
    CardGenerator, CardRenderer, GemEmission, GeneratedCard, RecordingRenderer,
    SignatureCardGenerator,
};
pub use helper::{
    apply, compute_seed, determine_rarity, rarity_score, seeded_rng, select_weighted,
};
pub use modifier::{ModifierType, ResidualEnergyModifier};
pub use rarity::{CardCategory, CardRarity, RarityTally};
pub use signature::{CardSignature, DEFAULT_SIGNIFICANCE_THRESHOLD, SignatureError};
pub use template::{CardTemplate, GEM_SLOT_COUNT, LayerData, TextureRef};
pub use visuals::{EmissionColor, GemVisual, RarityVisual};
