use std::fmt;

use crate::InvalidInputError;

/// Number of hexagrams in a complete catalog.
pub const HEXAGRAM_COUNT: usize = 64;

/// Sequential catalog id, 1 through 64.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct HexagramId(u8);

impl HexagramId {
    pub fn new(id: u8) -> Result<Self, InvalidInputError> {
        if (1..=64).contains(&id) {
            Ok(Self(id))
        } else {
            Err(InvalidInputError::HexagramId(id))
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HexagramId {
    type Error = InvalidInputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HexagramId> for u8 {
    fn from(value: HexagramId) -> Self {
        value.0
    }
}

impl fmt::Display for HexagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Line position within a figure, 1 (bottom, first drawn) through 6 (top).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct LinePosition(u8);

impl LinePosition {
    pub const ALL: [LinePosition; 6] = [
        LinePosition(1),
        LinePosition(2),
        LinePosition(3),
        LinePosition(4),
        LinePosition(5),
        LinePosition(6),
    ];

    pub fn new(position: u8) -> Result<Self, InvalidInputError> {
        if (1..=6).contains(&position) {
            Ok(Self(position))
        } else {
            Err(InvalidInputError::LinePosition(position))
        }
    }

    /// Position for a zero-based index into a six-line array.
    pub fn from_index(index: usize) -> Result<Self, InvalidInputError> {
        let position = u8::try_from(index + 1).unwrap_or(u8::MAX);
        Self::new(position)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based index into a six-line array.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for LinePosition {
    type Error = InvalidInputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LinePosition> for u8 {
    fn from(value: LinePosition) -> Self {
        value.0
    }
}

impl fmt::Display for LinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
