//! Base card type matching and valuation against the builtin content.

use cardcleaner::{CardContent, CardRarity, CardSignature, Element};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn test_hot_signature_matches_ember_strike_only() {
    let content = CardContent::with_builtin();
    let signature = CardSignature::from_array([0.0, 1.0, -0.2, 0.3, 0.0, 0.0, -0.4, 0.4]);

    let matches = content.matching_base_types(&signature);
    let names: Vec<&str> = matches.iter().map(|bt| bt.type_name.as_str()).collect();
    assert_eq!(names, vec!["Ember Strike"]);

    let ember = matches[0];
    assert_eq!(
        ember.effect_texts(&signature),
        vec!["Power +0.2".to_string(), "Cost 0.8".to_string()]
    );
    assert_eq!(ember.actual_rarity(&signature), CardRarity::Common);
    // 12 * 1 * (1 + (0.2 + 0.8) * 0.5)
    assert!(approx_eq(ember.actual_value(&signature), 18.0));
}

#[test]
fn test_tide_mend_residual_healing() {
    let content = CardContent::with_builtin();
    let tide = content.base_type("Tide Mend").expect("builtin type");

    let mut signature = tide.base_signature;
    signature.set_element(Element::Subsidium, 1.0);

    assert!(tide.can_match(&signature));
    assert_eq!(
        tide.effect_texts(&signature),
        vec!["Heal 1.3".to_string(), "Cost 1.0".to_string()]
    );
    assert_eq!(tide.actual_rarity(&signature), CardRarity::Uncommon);
    // 15 * 2 * (1 + (1.3 + 1.0) * 0.5)
    assert!(approx_eq(tide.actual_value(&signature), 64.5));
}

#[test]
fn test_match_weight_falls_with_distance() {
    let content = CardContent::with_builtin();
    let ember = content.base_type("Ember Strike").expect("builtin type");

    let exact = ember.base_signature;
    let mut near = exact;
    near.set_element(Element::Febris, 1.0);
    let mut outside = exact;
    outside.set_element(Element::Febris, -1.0);

    assert_eq!(ember.match_weight(&exact), 1.0);
    assert!(ember.match_weight(&near) < 1.0);
    assert!(ember.match_weight(&near) > 0.0);
    assert_eq!(ember.match_weight(&outside), 0.0);
    assert!(!ember.can_match(&outside));
}

#[test]
fn test_unusual_residual_raises_rarity() {
    let content = CardContent::with_builtin();
    let drift = content.base_type("Drift Step").expect("builtin type");

    assert_eq!(drift.actual_rarity(&drift.base_signature), CardRarity::Rare);

    // residual magnitudes sum to 2.0, half the unusualness scale
    let mut unusual = drift.base_signature;
    unusual.set_element(Element::Febris, 1.0);
    unusual.set_element(Element::Lumines, 1.0);
    assert_eq!(drift.actual_rarity(&unusual), CardRarity::Epic);
}
