use std::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Ordinal rarity tier. Derived from a signature, never stored on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CardRarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl CardRarity {
    pub const ALL: [CardRarity; 5] = [
        CardRarity::Common,
        CardRarity::Uncommon,
        CardRarity::Rare,
        CardRarity::Epic,
        CardRarity::Legendary,
    ];

    /// Position in the Common..Legendary order, starting at 0.
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Rarity at `ordinal`, saturating at Legendary.
    pub fn from_ordinal_saturating(ordinal: usize) -> CardRarity {
        Self::ALL[ordinal.min(Self::ALL.len() - 1)]
    }

    /// Value multiplier: Common is 1x, Legendary is 5x.
    pub fn multiplier(self) -> f32 {
        (self.ordinal() + 1) as f32
    }

    pub const fn name(self) -> &'static str {
        match self {
            CardRarity::Common => "Common",
            CardRarity::Uncommon => "Uncommon",
            CardRarity::Rare => "Rare",
            CardRarity::Epic => "Epic",
            CardRarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for CardRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a card does for the player's virtual character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CardCategory {
    /// Affects autonomous agent behavior
    Playstyle,
    /// Gear for the virtual character
    Equipment,
    /// Attacks and abilities
    #[default]
    Skill,
}

/// Per-rarity counts of generated cards, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RarityTally {
    counts: [u32; 5],
}

impl RarityTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, rarity: CardRarity) {
        self.counts[rarity.ordinal()] += 1;
    }

    pub fn count(&self, rarity: CardRarity) -> u32 {
        self.counts[rarity.ordinal()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Share of recorded cards with the given rarity, or 0 when empty.
    pub fn fraction(&self, rarity: CardRarity) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(rarity) as f64 / total as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardRarity, u32)> + '_ {
        CardRarity::ALL
            .iter()
            .map(move |rarity| (*rarity, self.count(*rarity)))
    }
}

impl FromIterator<CardRarity> for RarityTally {
    fn from_iter<T: IntoIterator<Item = CardRarity>>(iter: T) -> Self {
        let mut tally = RarityTally::new();
        for rarity in iter {
            tally.record(rarity);
        }
        tally
    }
}
