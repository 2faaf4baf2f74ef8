//! Catalog records: one per hexagram, six line texts each.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Figure, FigureCode, HexagramId, LinePosition, Trigram};

/// Coarse fortune label derived from a hexagram's guidance text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fortune {
    GreatFortune,
    Fortune,
    Misfortune,
    #[default]
    Neutral,
}

impl Fortune {
    /// 大吉, 吉, 凶 or 中平.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Fortune::GreatFortune => "大吉",
            Fortune::Fortune => "吉",
            Fortune::Misfortune => "凶",
            Fortune::Neutral => "中平",
        }
    }
}

impl fmt::Display for Fortune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Guidance split by life domain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Guidance {
    pub career: String,
    pub relationship: String,
    pub health: String,
    pub wealth: String,
}

/// Text attached to one line of one hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub hexagram: HexagramId,
    pub position: LinePosition,
    /// Traditional line name, e.g. 初九 or 上六.
    pub name: String,
    pub text: String,
    /// Image commentary (象曰).
    pub image: String,
    /// Plain-language gloss (译).
    pub gloss: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRecord {
    pub id: HexagramId,
    pub code: FigureCode,
    /// Full name, e.g. 乾为天.
    pub name: String,
    /// Short name, e.g. 乾卦.
    pub short_name: String,
    /// Hexagram glyph (䷀ …); empty when the source omits it.
    #[serde(default)]
    pub glyph: String,
    pub upper: Trigram,
    pub lower: Trigram,
    /// 卦辞.
    pub judgment: String,
    /// 象辞.
    pub image: String,
    /// 彖辞.
    pub commentary: String,
    pub summary: String,
    pub fortune: Fortune,
    pub guidance: Guidance,
    pub lines: Vec<LineRecord>,
}

impl HexagramRecord {
    #[must_use]
    pub fn figure(&self) -> Figure {
        Figure::from_code(self.code)
    }

    #[must_use]
    pub fn line(&self, position: LinePosition) -> Option<&LineRecord> {
        self.lines.iter().find(|line| line.position == position)
    }

    /// Whether `code` agrees with the recorded trigrams.
    #[must_use]
    pub fn code_is_consistent(&self) -> bool {
        self.code == FigureCode::from_trigrams(self.lower, self.upper)
    }
}

impl fmt::Display for HexagramRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "第{}卦 {}({})", self.id, self.short_name, self.name)?;
        if !self.glyph.is_empty() {
            write!(f, " {}", self.glyph)?;
        }
        Ok(())
    }
}
