//! Card signatures: the 8-dimensional elemental fingerprint of a card.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use rand::Rng;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::element::{Aspect, Element};

/// Intensity at or above which an element counts as significant.
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f32 = 0.1;

/// Error returned when a signature cannot be built from caller input.
#[derive(Debug, Clone, PartialEq)]
pub enum SignatureError {
    /// The input did not hold exactly one value per element.
    InvalidLength { expected: usize, actual: usize },
    /// A textual component could not be read as a number.
    InvalidComponent { position: usize, text: String },
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureError::InvalidLength { expected, actual } => write!(
                f,
                "Signature must have exactly {} values, got {}",
                expected, actual
            ),
            SignatureError::InvalidComponent { position, text } => write!(
                f,
                "Signature component {} is not a number: '{}'",
                position, text
            ),
        }
    }
}

impl std::error::Error for SignatureError {}

/// Eight elemental values, each kept within [-1, 1].
///
/// Writes go through [`CardSignature::set`], which clamps. There is no
/// `IndexMut`. Subtraction saturates at the bounds, as residual-energy
/// calculations expect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialization",
    serde(try_from = "Vec<f32>", into = "[f32; 8]")
)]
pub struct CardSignature {
    elements: [f32; Element::COUNT],
}

/// Clamps to [-1, 1]. NaN becomes 0.
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(-1.0, 1.0)
}

impl CardSignature {
    /// Creates an all-zero signature.
    pub const fn new() -> Self {
        Self {
            elements: [0.0; Element::COUNT],
        }
    }

    /// Creates a signature from one value per element, clamping each.
    pub fn from_array(elements: [f32; Element::COUNT]) -> Self {
        Self {
            elements: elements.map(clamp_unit),
        }
    }

    /// Creates a signature from a slice that must hold exactly eight finite
    /// values.
    pub fn from_slice(elements: &[f32]) -> Result<Self, SignatureError> {
        if let Some(position) = elements.iter().position(|e| !e.is_finite()) {
            return Err(SignatureError::InvalidComponent {
                position,
                text: elements[position].to_string(),
            });
        }
        let array: [f32; Element::COUNT] =
            elements
                .try_into()
                .map_err(|_| SignatureError::InvalidLength {
                    expected: Element::COUNT,
                    actual: elements.len(),
                })?;
        Ok(Self::from_array(array))
    }

    /// Draws every component uniformly from [-1, 1].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut signature = Self::new();
        for i in 0..Element::COUNT {
            signature.set(i, rng.random_range(-1.0..=1.0));
        }
        signature
    }

    /// Returns the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 8 or more.
    pub fn get(&self, index: usize) -> f32 {
        self.elements[index]
    }

    /// Sets the component at `index`, clamping to [-1, 1].
    ///
    /// # Panics
    ///
    /// Panics if `index` is 8 or more.
    pub fn set(&mut self, index: usize, value: f32) {
        self.elements[index] = clamp_unit(value);
    }

    pub fn get_element(&self, element: Element) -> f32 {
        self.elements[element.index()]
    }

    pub fn set_element(&mut self, element: Element, value: f32) {
        self.set(element.index(), value);
    }

    /// Returns a copy of all eight components in element order.
    pub fn elements(&self) -> [f32; Element::COUNT] {
        self.elements
    }

    /// Euclidean distance in signature space.
    pub fn distance_to(&self, other: &CardSignature) -> f32 {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .map(|(a, b)| {
                let diff = a - b;
                diff * diff
            })
            .sum::<f32>()
            .sqrt()
    }

    /// Elementwise difference, re-clamped to [-1, 1].
    pub fn subtract(&self, other: &CardSignature) -> CardSignature {
        let mut result = CardSignature::new();
        for i in 0..Element::COUNT {
            result.set(i, self.elements[i] - other.elements[i]);
        }
        result
    }

    /// Positive aspect when the component is zero or above, negative otherwise.
    pub fn dominant_aspect(&self, element: Element) -> Aspect {
        element.aspect(self.get_element(element) >= 0.0)
    }

    pub fn intensity(&self, element: Element) -> f32 {
        self.get_element(element).abs()
    }

    pub fn is_significant(&self, element: Element) -> bool {
        self.is_significant_with(element, DEFAULT_SIGNIFICANCE_THRESHOLD)
    }

    pub fn is_significant_with(&self, element: Element, threshold: f32) -> bool {
        self.intensity(element) >= threshold
    }

    /// Elements whose intensity reaches the default threshold, with their aspect.
    pub fn significant_aspects(&self) -> Vec<(Element, Aspect)> {
        Element::ALL
            .iter()
            .filter(|element| self.is_significant(**element))
            .map(|element| (*element, self.dominant_aspect(*element)))
            .collect()
    }
}

impl Index<usize> for CardSignature {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.elements[index]
    }
}

impl Index<Element> for CardSignature {
    type Output = f32;

    fn index(&self, element: Element) -> &f32 {
        &self.elements[element.index()]
    }
}

impl From<[f32; Element::COUNT]> for CardSignature {
    fn from(elements: [f32; Element::COUNT]) -> Self {
        Self::from_array(elements)
    }
}

impl From<CardSignature> for [f32; Element::COUNT] {
    fn from(signature: CardSignature) -> Self {
        signature.elements
    }
}

impl TryFrom<&[f32]> for CardSignature {
    type Error = SignatureError;

    fn try_from(elements: &[f32]) -> Result<Self, Self::Error> {
        Self::from_slice(elements)
    }
}

impl TryFrom<Vec<f32>> for CardSignature {
    type Error = SignatureError;

    fn try_from(elements: Vec<f32>) -> Result<Self, Self::Error> {
        Self::from_slice(&elements)
    }
}

/// Parses comma-separated values such as `"0.5, -0.25, 0, 1, 0, 0, 0, 0"`.
impl FromStr for CardSignature {
    type Err = SignatureError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for (position, part) in text.split(',').enumerate() {
            let part = part.trim();
            let value = part
                .parse::<f32>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| SignatureError::InvalidComponent {
                    position,
                    text: part.to_string(),
                })?;
            values.push(value);
        }
        Self::from_slice(&values)
    }
}

impl fmt::Display for CardSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.elements.iter().map(|e| format!("{e:.2}")).collect();
        write!(f, "Signature[{}]", parts.join(", "))
    }
}
