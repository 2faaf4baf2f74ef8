//! A resolved divination joined with its catalog records.

use std::fmt;

use yijing_catalog::{CatalogStore, NotFoundError};
use yijing_types::{HexagramRecord, LinePosition, LineRecord};

use crate::DivinationResult;

/// Borrowed view over a [`DivinationResult`] and the records it resolves to.
#[derive(Debug, Clone)]
pub struct Reading<'a> {
    pub result: &'a DivinationResult,
    pub primary: &'a HexagramRecord,
    /// Present iff the result has changing lines.
    pub secondary: Option<&'a HexagramRecord>,
    /// Primary record's line texts at the changing positions, bottom first.
    pub changing_lines: Vec<&'a LineRecord>,
}

impl<'a> Reading<'a> {
    /// Look up both figures. A miss on either is surfaced, never defaulted.
    pub fn interpret(
        result: &'a DivinationResult,
        catalog: &'a CatalogStore,
    ) -> Result<Self, NotFoundError> {
        let primary = catalog.by_figure(&result.primary())?;
        let secondary = result
            .secondary()
            .map(|figure| catalog.by_figure(&figure))
            .transpose()?;
        let changing_lines = result
            .changing()
            .iter()
            .map(|position| catalog.line(primary.id, position))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            primary = primary.id.value(),
            secondary = secondary.map(|record| record.id.value()),
            "Interpreted reading"
        );

        Ok(Self {
            result,
            primary,
            secondary,
            changing_lines,
        })
    }
}

impl fmt::Display for Reading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Top line first, the way figures are printed.
        for position in LinePosition::ALL.iter().rev() {
            let outcome = self.result.outcomes()[position.index()];
            let mark = if outcome.is_changing() { " ○" } else { "" };
            writeln!(
                f,
                "{position} {} {outcome}{mark}",
                outcome.line().polarity()
            )?;
        }
        writeln!(f)?;

        let primary = self.primary;
        writeln!(f, "本卦 {primary}")?;
        writeln!(f, "  上{} 下{}", primary.upper, primary.lower)?;
        writeln!(f, "  卦辞: {}", primary.judgment)?;
        if !primary.image.is_empty() {
            writeln!(f, "  象辞: {}", primary.image)?;
        }
        writeln!(f, "  吉凶: {}", primary.fortune)?;

        for line in &self.changing_lines {
            writeln!(f, "  {}: {}", line.name, line.text)?;
            if !line.gloss.is_empty() {
                writeln!(f, "    {}", line.gloss)?;
            }
        }

        if let Some(secondary) = self.secondary {
            writeln!(f)?;
            writeln!(f, "变卦 {secondary}")?;
            writeln!(f, "  卦辞: {}", secondary.judgment)?;
        }

        let guidance = &primary.guidance;
        writeln!(f)?;
        writeln!(f, "事业: {}", guidance.career)?;
        writeln!(f, "感情: {}", guidance.relationship)?;
        writeln!(f, "健康: {}", guidance.health)?;
        write!(f, "财运: {}", guidance.wealth)
    }
}
