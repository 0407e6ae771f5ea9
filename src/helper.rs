//! Building blocks for signature-driven card generation.
//!
//! Everything here is deterministic given its inputs: the seed and the rarity
//! depend only on the signature, and the texture and weighted picks only on
//! the RNG handed in. Generation seeds that RNG from [`compute_seed`] so a
//! card's looks can be rebuilt from its signature alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rarity::CardRarity;
use crate::signature::CardSignature;
use crate::template::{LayerData, TextureRef};

/// Starting value of the seed hash.
const SEED_START: i32 = 17;
/// Multiplier applied before each component is mixed in.
const SEED_FACTOR: i32 = 23;

/// Points a single component can contribute to the rarity score.
const MAX_POINTS_PER_COMPONENT: u32 = 8;

/// Derives a stable integer seed from a signature.
///
/// Starts at 17 and folds in each component as `seed * 23 + round(c * 1000)`
/// using 32-bit wrapping arithmetic, rounding halves to even.
pub fn compute_seed(signature: &CardSignature) -> i32 {
    signature.elements().iter().fold(SEED_START, |seed, value| {
        let scaled = (value * 1000.0).round_ties_even() as i32;
        seed.wrapping_mul(SEED_FACTOR).wrapping_add(scaled)
    })
}

/// A fresh RNG seeded from [`compute_seed`].
pub fn seeded_rng(signature: &CardSignature) -> StdRng {
    StdRng::seed_from_u64(compute_seed(signature) as u32 as u64)
}

/// Scores how far one component sits from the 0.5 midpoint of its magnitude.
fn component_points(value: f32) -> u32 {
    let v = (value.abs() - 0.5).abs();
    if v < 0.1 {
        0
    } else if v < 0.2 {
        1
    } else if v < 0.3 {
        2
    } else if v < 0.4 {
        4
    } else {
        MAX_POINTS_PER_COMPONENT
    }
}

/// Log-compressed rarity score in [0, 1].
pub fn rarity_score(signature: &CardSignature) -> f32 {
    let elements = signature.elements();
    let total_points: u32 = elements.iter().map(|e| component_points(*e)).sum();
    let max_points = elements.len() as u32 * MAX_POINTS_PER_COMPONENT;
    let ratio = total_points as f32 / max_points as f32;
    ((1.0f32 + 9.0 * ratio) as f64).log10() as f32
}

/// Rarity tier of a signature.
///
/// Components near a magnitude of 0.5 score nothing; very weak or very
/// strong components score the most. The summed score is log-compressed and
/// then cut at 0.70, 0.80, 0.92 and 0.96.
pub fn determine_rarity(signature: &CardSignature) -> CardRarity {
    let score = rarity_score(signature);
    if score < 0.70 {
        CardRarity::Common
    } else if score < 0.80 {
        CardRarity::Uncommon
    } else if score < 0.92 {
        CardRarity::Rare
    } else if score < 0.96 {
        CardRarity::Epic
    } else {
        CardRarity::Legendary
    }
}

/// Puts one of `options` on `layer`. Returns false (and leaves the layer
/// alone) when there is nothing to choose from.
pub fn apply<R: Rng + ?Sized>(rng: &mut R, layer: &mut LayerData, options: &[TextureRef]) -> bool {
    let index = match options.len() {
        0 => return false,
        1 => 0,
        len => rng.random_range(0..len),
    };
    layer.texture = Some(options[index].clone());
    true
}

/// Roulette-wheel selection.
///
/// Returns `None` only for an empty slice. When every weight is zero (or the
/// total is otherwise not positive) the first item wins.
pub fn select_weighted<'a, T, R, F>(rng: &mut R, items: &'a [T], weight_fn: F) -> Option<&'a T>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f32,
{
    let first = items.first()?;
    let weights: Vec<f32> = items.iter().map(&weight_fn).collect();
    let total: f32 = weights.iter().sum();
    if total <= 0.0 {
        return Some(first);
    }

    let pick = rng.random::<f32>() * total;
    let mut cumulative = 0.0;
    for (item, weight) in items.iter().zip(weights) {
        cumulative += weight;
        if pick <= cumulative {
            return Some(item);
        }
    }

    items.last()
}
