use std::fmt;

use serde::{Deserialize, Serialize};

/// One line of a figure: yang (solid) or yin (broken).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Line {
    Solid,
    Broken,
}

impl Line {
    #[must_use]
    pub const fn from_bit(solid: bool) -> Self {
        if solid { Line::Solid } else { Line::Broken }
    }

    /// `1` for solid, `0` for broken.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Line::Solid => 1,
            Line::Broken => 0,
        }
    }

    #[must_use]
    pub const fn is_solid(self) -> bool {
        matches!(self, Line::Solid)
    }

    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Line::Solid => Line::Broken,
            Line::Broken => Line::Solid,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Line::Solid => "solid",
            Line::Broken => "broken",
        }
    }

    /// 阳 or 阴.
    #[must_use]
    pub const fn polarity(self) -> &'static str {
        match self {
            Line::Solid => "阳",
            Line::Broken => "阴",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
