//! Six-line figures and their lookup codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{InvalidInputError, Line, LinePosition, Trigram};

pub const FIGURE_LINES: usize = 6;

/// Six-bit catalog key: lower trigram code followed by upper trigram code.
///
/// Renders as six `0`/`1` characters, position 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FigureCode(u8);

impl FigureCode {
    #[must_use]
    pub fn new(bits: u8) -> Option<Self> {
        (bits < 64).then_some(Self(bits))
    }

    #[must_use]
    pub const fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        Self((lower.code() << 3) | upper.code())
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn lower(self) -> Trigram {
        Trigram::from_low_bits(self.0 >> 3)
    }

    #[must_use]
    pub fn upper(self) -> Trigram {
        Trigram::from_low_bits(self.0)
    }

    pub fn parse(raw: &str) -> Result<Self, InvalidInputError> {
        let trimmed = raw.trim();
        if trimmed.len() != FIGURE_LINES || !trimmed.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(InvalidInputError::FigureCode(raw.to_string()));
        }
        let bits = trimmed
            .bytes()
            .fold(0u8, |acc, b| (acc << 1) | u8::from(b == b'1'));
        Ok(Self(bits))
    }
}

impl fmt::Display for FigureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06b}", self.0)
    }
}

impl FromStr for FigureCode {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FigureCode {
    type Error = InvalidInputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FigureCode> for String {
    fn from(value: FigureCode) -> Self {
        value.to_string()
    }
}

/// Set of changing positions, iterated bottom-to-top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct ChangingLines(u8);

impl ChangingLines {
    pub const NONE: ChangingLines = ChangingLines(0);
    pub const ALL: ChangingLines = ChangingLines(0b11_1111);

    fn mask(position: LinePosition) -> u8 {
        1 << position.index()
    }

    pub fn insert(&mut self, position: LinePosition) {
        self.0 |= Self::mask(position);
    }

    #[must_use]
    pub fn contains(self, position: LinePosition) -> bool {
        self.0 & Self::mask(position) != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = LinePosition> {
        LinePosition::ALL
            .into_iter()
            .filter(move |position| self.contains(*position))
    }
}

impl FromIterator<LinePosition> for ChangingLines {
    fn from_iter<I: IntoIterator<Item = LinePosition>>(iter: I) -> Self {
        let mut lines = Self::NONE;
        for position in iter {
            lines.insert(position);
        }
        lines
    }
}

impl TryFrom<Vec<u8>> for ChangingLines {
    type Error = InvalidInputError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        value
            .into_iter()
            .map(LinePosition::new)
            .collect::<Result<_, _>>()
    }
}

impl From<ChangingLines> for Vec<u8> {
    fn from(value: ChangingLines) -> Self {
        value.iter().map(LinePosition::value).collect()
    }
}

/// Six lines, position 1 (bottom) first.
///
/// Equality is line-by-line, which coincides with equality of [`FigureCode`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "FigureCode", into = "FigureCode")]
pub struct Figure {
    lines: [Line; FIGURE_LINES],
}

impl Figure {
    #[must_use]
    pub const fn new(lines: [Line; FIGURE_LINES]) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        let [l1, l2, l3] = lower.lines();
        let [l4, l5, l6] = upper.lines();
        Self::new([l1, l2, l3, l4, l5, l6])
    }

    #[must_use]
    pub fn from_code(code: FigureCode) -> Self {
        Self::from_trigrams(code.lower(), code.upper())
    }

    #[must_use]
    pub const fn lines(&self) -> &[Line; FIGURE_LINES] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, position: LinePosition) -> Line {
        self.lines[position.index()]
    }

    /// Positions 1-3 as the lower trigram, 4-6 as the upper.
    #[must_use]
    pub fn decompose(&self) -> (Trigram, Trigram) {
        let [l1, l2, l3, l4, l5, l6] = self.lines;
        (
            Trigram::from_lines([l1, l2, l3]),
            Trigram::from_lines([l4, l5, l6]),
        )
    }

    #[must_use]
    pub fn lower(&self) -> Trigram {
        self.decompose().0
    }

    #[must_use]
    pub fn upper(&self) -> Trigram {
        self.decompose().1
    }

    #[must_use]
    pub fn code(&self) -> FigureCode {
        let (lower, upper) = self.decompose();
        FigureCode::from_trigrams(lower, upper)
    }

    /// Copy with every line in `changing` inverted. Identity when `changing` is empty.
    #[must_use]
    pub fn mutate(&self, changing: ChangingLines) -> Self {
        let mut lines = self.lines;
        for position in changing.iter() {
            lines[position.index()] = lines[position.index()].inverted();
        }
        Self::new(lines)
    }
}

impl From<FigureCode> for Figure {
    fn from(code: FigureCode) -> Self {
        Self::from_code(code)
    }
}

impl From<Figure> for FigureCode {
    fn from(figure: Figure) -> Self {
        figure.code()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
