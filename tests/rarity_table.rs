//! Rarity tiers for a fixed table of signatures.

use cardcleaner::{CardRarity, CardSignature, compute_seed, determine_rarity};

fn assert_rarity(values: [f32; 8], expected: CardRarity) {
    let signature = CardSignature::from_array(values);
    assert_eq!(
        determine_rarity(&signature),
        expected,
        "rarity of {}",
        signature
    );
}

#[test]
fn test_zero_signature_seed() {
    assert_eq!(compute_seed(&CardSignature::new()), -153111983);
}

#[test]
fn test_common_signatures() {
    assert_rarity([0.5; 8], CardRarity::Common);
    assert_rarity([-0.5; 8], CardRarity::Common);
    assert_rarity([0.45; 8], CardRarity::Common);
    assert_rarity([-0.45; 8], CardRarity::Common);
    assert_rarity([0.55; 8], CardRarity::Common);
}

#[test]
fn test_uncommon_signatures() {
    assert_rarity([0.8; 8], CardRarity::Uncommon);
    assert_rarity([-0.8; 8], CardRarity::Uncommon);
    assert_rarity([0.2; 8], CardRarity::Uncommon);
    assert_rarity([-0.2; 8], CardRarity::Uncommon);
    assert_rarity(
        [0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85, 0.2],
        CardRarity::Uncommon,
    );
}

#[test]
fn test_rare_signatures() {
    assert_rarity([1.0, 1.0, 1.0, 1.0, 0.85, 0.85, 0.85, 0.85], CardRarity::Rare);
    assert_rarity([1.0, 1.0, 0.85, 0.85, 0.85, 0.85, 0.85, 0.85], CardRarity::Rare);
    assert_rarity([1.0, 1.0, 1.0, 0.85, 0.85, 0.85, 0.85, 0.85], CardRarity::Rare);
    assert_rarity([1.0, 1.0, 1.0, 1.0, 1.0, 0.85, 0.85, 0.85], CardRarity::Rare);
    assert_rarity(
        [-1.0, -1.0, -1.0, -1.0, -0.15, -0.15, -0.15, -0.15],
        CardRarity::Rare,
    );
}

#[test]
fn test_epic_signatures() {
    assert_rarity([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5], CardRarity::Epic);
    assert_rarity([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.85, 0.85], CardRarity::Epic);
    assert_rarity([-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 0.5], CardRarity::Epic);
    assert_rarity(
        [-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -0.85, -0.85],
        CardRarity::Epic,
    );
    assert_rarity([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.85, 0.75], CardRarity::Epic);
}

#[test]
fn test_legendary_signatures() {
    assert_rarity([1.0; 8], CardRarity::Legendary);
    assert_rarity([-1.0; 8], CardRarity::Legendary);
    assert_rarity([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.85], CardRarity::Legendary);
    assert_rarity([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.75], CardRarity::Legendary);
    assert_rarity(
        [-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -0.75],
        CardRarity::Legendary,
    );
    assert_rarity([0.0; 8], CardRarity::Legendary);
}

#[test]
fn test_sign_does_not_change_rarity() {
    let values = [0.9, -0.35, 0.05, 0.62, -0.71, 0.18, -0.99, 0.4];
    let flipped = values.map(|v| -v);
    assert_eq!(
        determine_rarity(&CardSignature::from_array(values)),
        determine_rarity(&CardSignature::from_array(flipped))
    );
}
