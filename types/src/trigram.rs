//! The eight trigrams.
//!
//! A trigram code lists its lines bottom-to-top with the lowest line as the
//! most significant bit: ☳ (solid under two broken) is `0b100`, ☶ (solid over
//! two broken) is `0b001`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

impl Trigram {
    /// Ordered by descending code, so `ALL[7 - code]` is the trigram for `code`.
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
    ];

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Trigram::Qian => 0b111,
            Trigram::Dui => 0b110,
            Trigram::Li => 0b101,
            Trigram::Zhen => 0b100,
            Trigram::Xun => 0b011,
            Trigram::Kan => 0b010,
            Trigram::Gen => 0b001,
            Trigram::Kun => 0b000,
        }
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        (code <= 0b111).then(|| Self::from_low_bits(code))
    }

    /// Uses only the low three bits of `code`.
    pub(crate) fn from_low_bits(code: u8) -> Self {
        Self::ALL[usize::from(0b111 - (code & 0b111))]
    }

    /// Canonical (simplified) name as printed in manuscripts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Dui => "兑",
            Trigram::Li => "离",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
            Trigram::Kun => "坤",
        }
    }

    /// Traditional-character spelling, where it differs from [`name`](Self::name).
    #[must_use]
    pub const fn traditional_name(self) -> Option<&'static str> {
        match self {
            Trigram::Dui => Some("兌"),
            Trigram::Li => Some("離"),
            _ => None,
        }
    }

    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Trigram::Qian => '☰',
            Trigram::Dui => '☱',
            Trigram::Li => '☲',
            Trigram::Zhen => '☳',
            Trigram::Xun => '☴',
            Trigram::Kan => '☵',
            Trigram::Gen => '☶',
            Trigram::Kun => '☷',
        }
    }

    /// The natural image: heaven, lake, fire, thunder, wind, water, mountain, earth.
    #[must_use]
    pub const fn nature(self) -> &'static str {
        match self {
            Trigram::Qian => "天",
            Trigram::Dui => "泽",
            Trigram::Li => "火",
            Trigram::Zhen => "雷",
            Trigram::Xun => "风",
            Trigram::Kan => "水",
            Trigram::Gen => "山",
            Trigram::Kun => "地",
        }
    }

    /// The quality traditionally attributed to the trigram.
    #[must_use]
    pub const fn quality(self) -> &'static str {
        match self {
            Trigram::Qian => "健",
            Trigram::Dui => "悦",
            Trigram::Li => "丽",
            Trigram::Zhen => "动",
            Trigram::Xun => "入",
            Trigram::Kan => "陷",
            Trigram::Gen => "止",
            Trigram::Kun => "顺",
        }
    }

    /// Look up a trigram by either spelling of its name.
    ///
    /// Surrounding whitespace and a trailing 卦 are ignored.
    #[must_use]
    pub fn from_name(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let name = trimmed.strip_suffix('卦').unwrap_or(trimmed).trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name || t.traditional_name() == Some(name))
    }

    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.glyph() == glyph)
    }

    /// Whether `c` is one of the eight trigram glyphs.
    #[must_use]
    pub fn is_glyph(c: char) -> bool {
        ('☰'..='☷').contains(&c)
    }

    /// Lines bottom-to-top.
    #[must_use]
    pub fn lines(self) -> [Line; 3] {
        let code = self.code();
        [
            Line::from_bit(code & 0b100 != 0),
            Line::from_bit(code & 0b010 != 0),
            Line::from_bit(code & 0b001 != 0),
        ]
    }

    /// Trigram for lines given bottom-to-top.
    #[must_use]
    pub fn from_lines(lines: [Line; 3]) -> Self {
        let code = lines
            .iter()
            .fold(0u8, |acc, line| (acc << 1) | line.bit());
        Self::from_low_bits(code)
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name(), self.glyph())
    }
}
