//! Three-coin toss outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{InvalidInputError, Line};

/// One face of a coin. The inscribed face counts 3, the plain face 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl CoinFace {
    #[must_use]
    pub const fn from_heads(heads: bool) -> Self {
        if heads { CoinFace::Heads } else { CoinFace::Tails }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            CoinFace::Heads => 3,
            CoinFace::Tails => 2,
        }
    }
}

/// Sum of three coin faces: 6, 7, 8 or 9.
///
/// 6 and 9 are the extreme sums and always changing; 7 and 8 never are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TossOutcome {
    /// 6: broken, changing.
    OldYin,
    /// 7: solid, stable.
    YoungYang,
    /// 8: broken, stable.
    YoungYin,
    /// 9: solid, changing.
    OldYang,
}

impl TossOutcome {
    pub const ALL: [TossOutcome; 4] = [
        TossOutcome::OldYin,
        TossOutcome::YoungYang,
        TossOutcome::YoungYin,
        TossOutcome::OldYang,
    ];

    pub fn from_value(value: u8) -> Result<Self, InvalidInputError> {
        match value {
            6 => Ok(TossOutcome::OldYin),
            7 => Ok(TossOutcome::YoungYang),
            8 => Ok(TossOutcome::YoungYin),
            9 => Ok(TossOutcome::OldYang),
            other => Err(InvalidInputError::TossValue(other)),
        }
    }

    #[must_use]
    pub fn from_coins(coins: [CoinFace; 3]) -> Self {
        match coins.iter().map(|c| c.value()).sum::<u8>() {
            6 => TossOutcome::OldYin,
            7 => TossOutcome::YoungYang,
            8 => TossOutcome::YoungYin,
            // Three faces of 2 or 3 cannot sum outside 6..=9.
            _ => TossOutcome::OldYang,
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            TossOutcome::OldYin => 6,
            TossOutcome::YoungYang => 7,
            TossOutcome::YoungYin => 8,
            TossOutcome::OldYang => 9,
        }
    }

    #[must_use]
    pub const fn line(self) -> Line {
        match self {
            TossOutcome::YoungYang | TossOutcome::OldYang => Line::Solid,
            TossOutcome::OldYin | TossOutcome::YoungYin => Line::Broken,
        }
    }

    #[must_use]
    pub const fn is_changing(self) -> bool {
        matches!(self, TossOutcome::OldYin | TossOutcome::OldYang)
    }

    /// The line this outcome settles into once changing lines have turned.
    #[must_use]
    pub const fn settled_line(self) -> Line {
        if self.is_changing() {
            self.line().inverted()
        } else {
            self.line()
        }
    }

    /// Traditional name: 老阴, 少阳, 少阴, 老阳.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TossOutcome::OldYin => "老阴",
            TossOutcome::YoungYang => "少阳",
            TossOutcome::YoungYin => "少阴",
            TossOutcome::OldYang => "老阳",
        }
    }
}

impl TryFrom<u8> for TossOutcome {
    type Error = InvalidInputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<TossOutcome> for u8 {
    fn from(value: TossOutcome) -> Self {
        value.value()
    }
}

impl fmt::Display for TossOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value(), self.label())
    }
}
