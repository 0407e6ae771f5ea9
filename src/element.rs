//! The eight elemental axes of a card signature and their named poles.
//!
//! Every [`Element`] has a positive and a negative [`Aspect`]. The mapping is a
//! fixed table in both directions: an aspect always belongs to exactly one
//! element, and an element's sign selects which of its two aspects dominates.

use std::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// One axis of a [`CardSignature`](crate::signature::CardSignature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Element {
    /// Solidity (air to rock)
    #[default]
    Solidum,
    /// Temperature (water to fire)
    Febris,
    /// Orderedness (entropy to order)
    Ordinem,
    /// Luminance (dark to light)
    Lumines,
    /// Manifold (time to space)
    Varias,
    /// Density (light to heavy)
    Inertiae,
    /// Helpfulness (harmful to helpful)
    Subsidium,
    /// Distance (nearby to distant)
    Spatium,
}

impl Element {
    pub const COUNT: usize = 8;

    /// All elements in signature order.
    pub const ALL: [Element; Element::COUNT] = [
        Element::Solidum,
        Element::Febris,
        Element::Ordinem,
        Element::Lumines,
        Element::Varias,
        Element::Inertiae,
        Element::Subsidium,
        Element::Spatium,
    ];

    /// Position of this element inside a signature.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Element stored at the given signature position, if any.
    pub fn from_index(index: usize) -> Option<Element> {
        Self::ALL.get(index).copied()
    }

    /// The aspect this element shows when its value is zero or above.
    pub const fn positive(self) -> Aspect {
        match self {
            Element::Solidum => Aspect::Tellus,
            Element::Febris => Aspect::Ignis,
            Element::Ordinem => Aspect::Vitrio,
            Element::Lumines => Aspect::Luminus,
            Element::Varias => Aspect::Spatius,
            Element::Inertiae => Aspect::Gravitas,
            Element::Subsidium => Aspect::Auxillus,
            Element::Spatium => Aspect::Disis,
        }
    }

    /// The aspect this element shows when its value is below zero.
    pub const fn negative(self) -> Aspect {
        match self {
            Element::Solidum => Aspect::Aeolis,
            Element::Febris => Aspect::Hydris,
            Element::Ordinem => Aspect::Empyrus,
            Element::Lumines => Aspect::Noctis,
            Element::Varias => Aspect::Tempus,
            Element::Inertiae => Aspect::Levitas,
            Element::Subsidium => Aspect::Malus,
            Element::Spatium => Aspect::Iuxta,
        }
    }

    /// Positive or negative aspect depending on `positive`.
    pub const fn aspect(self, positive: bool) -> Aspect {
        if positive {
            self.positive()
        } else {
            self.negative()
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Element::Solidum => "Solidum",
            Element::Febris => "Febris",
            Element::Ordinem => "Ordinem",
            Element::Lumines => "Lumines",
            Element::Varias => "Varias",
            Element::Inertiae => "Inertiae",
            Element::Subsidium => "Subsidium",
            Element::Spatium => "Spatium",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named pole of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Aspect {
    // Positive poles
    Tellus,
    Ignis,
    Vitrio,
    Luminus,
    Spatius,
    Gravitas,
    Auxillus,
    Disis,

    // Negative poles
    Aeolis,
    Hydris,
    Empyrus,
    Noctis,
    Tempus,
    Levitas,
    Malus,
    Iuxta,
}

impl Aspect {
    pub const ALL: [Aspect; 16] = [
        Aspect::Tellus,
        Aspect::Ignis,
        Aspect::Vitrio,
        Aspect::Luminus,
        Aspect::Spatius,
        Aspect::Gravitas,
        Aspect::Auxillus,
        Aspect::Disis,
        Aspect::Aeolis,
        Aspect::Hydris,
        Aspect::Empyrus,
        Aspect::Noctis,
        Aspect::Tempus,
        Aspect::Levitas,
        Aspect::Malus,
        Aspect::Iuxta,
    ];

    /// The element this aspect belongs to, regardless of sign.
    pub const fn element(self) -> Element {
        match self {
            Aspect::Tellus | Aspect::Aeolis => Element::Solidum,
            Aspect::Ignis | Aspect::Hydris => Element::Febris,
            Aspect::Vitrio | Aspect::Empyrus => Element::Ordinem,
            Aspect::Luminus | Aspect::Noctis => Element::Lumines,
            Aspect::Spatius | Aspect::Tempus => Element::Varias,
            Aspect::Gravitas | Aspect::Levitas => Element::Inertiae,
            Aspect::Auxillus | Aspect::Malus => Element::Subsidium,
            Aspect::Disis | Aspect::Iuxta => Element::Spatium,
        }
    }

    /// Returns true for the pole an element shows at non-negative values.
    pub const fn is_positive(self) -> bool {
        matches!(
            self,
            Aspect::Tellus
                | Aspect::Ignis
                | Aspect::Vitrio
                | Aspect::Luminus
                | Aspect::Spatius
                | Aspect::Gravitas
                | Aspect::Auxillus
                | Aspect::Disis
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Aspect::Tellus => "Tellus",
            Aspect::Ignis => "Ignis",
            Aspect::Vitrio => "Vitrio",
            Aspect::Luminus => "Luminus",
            Aspect::Spatius => "Spatius",
            Aspect::Gravitas => "Gravitas",
            Aspect::Auxillus => "Auxillus",
            Aspect::Disis => "Disis",
            Aspect::Aeolis => "Aeolis",
            Aspect::Hydris => "Hydris",
            Aspect::Empyrus => "Empyrus",
            Aspect::Noctis => "Noctis",
            Aspect::Tempus => "Tempus",
            Aspect::Levitas => "Levitas",
            Aspect::Malus => "Malus",
            Aspect::Iuxta => "Iuxta",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_conversions() {
        assert_eq!(Element::Solidum.positive(), Aspect::Tellus);
        assert_eq!(Element::Febris.positive(), Aspect::Ignis);
        assert_eq!(Element::Ordinem.positive(), Aspect::Vitrio);
        assert_eq!(Element::Lumines.positive(), Aspect::Luminus);
        assert_eq!(Element::Varias.positive(), Aspect::Spatius);
        assert_eq!(Element::Inertiae.positive(), Aspect::Gravitas);
        assert_eq!(Element::Subsidium.positive(), Aspect::Auxillus);
        assert_eq!(Element::Spatium.positive(), Aspect::Disis);
    }

    #[test]
    fn test_negative_conversions() {
        assert_eq!(Element::Solidum.negative(), Aspect::Aeolis);
        assert_eq!(Element::Febris.negative(), Aspect::Hydris);
        assert_eq!(Element::Ordinem.negative(), Aspect::Empyrus);
        assert_eq!(Element::Lumines.negative(), Aspect::Noctis);
        assert_eq!(Element::Varias.negative(), Aspect::Tempus);
        assert_eq!(Element::Inertiae.negative(), Aspect::Levitas);
        assert_eq!(Element::Subsidium.negative(), Aspect::Malus);
        assert_eq!(Element::Spatium.negative(), Aspect::Iuxta);
    }

    #[test]
    fn test_aspect_to_element() {
        assert_eq!(Aspect::Tellus.element(), Element::Solidum);
        assert_eq!(Aspect::Ignis.element(), Element::Febris);
        assert_eq!(Aspect::Vitrio.element(), Element::Ordinem);
        assert_eq!(Aspect::Aeolis.element(), Element::Solidum);
        assert_eq!(Aspect::Hydris.element(), Element::Febris);
        assert_eq!(Aspect::Empyrus.element(), Element::Ordinem);
    }

    #[test]
    fn test_round_trip_every_element() {
        for element in Element::ALL {
            assert_eq!(element.positive().element(), element);
            assert_eq!(element.negative().element(), element);
            assert!(element.positive().is_positive());
            assert!(!element.negative().is_positive());
        }
    }

    #[test]
    fn test_every_aspect_used_once() {
        for aspect in Aspect::ALL {
            let element = aspect.element();
            assert_eq!(element.aspect(aspect.is_positive()), aspect);
        }
    }

    #[test]
    fn test_index_matches_signature_order() {
        for (i, element) in Element::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
            assert_eq!(Element::from_index(i), Some(*element));
        }
        assert_eq!(Element::from_index(8), None);
    }
}
