//! Six toss outcomes to primary figure, changing lines, and secondary figure.
//!
//! Outcomes are ordered bottom-to-top: the first outcome is position 1. Lookup
//! codes always come from [`Figure::code`], which concatenates the lower
//! trigram code and the upper trigram code in that order.

use serde::{Deserialize, Serialize};

use yijing_types::{
    ChangingLines, FIGURE_LINES, Figure, InvalidInputError, Line, LinePosition, TossOutcome,
    Trigram,
};

fn check_count(
    outcomes: &[TossOutcome],
) -> Result<&[TossOutcome; FIGURE_LINES], InvalidInputError> {
    outcomes.try_into().map_err(|_| InvalidInputError::OutcomeCount {
        expected: FIGURE_LINES,
        actual: outcomes.len(),
    })
}

/// Figure formed by each outcome's line, in order.
pub fn resolve_primary(outcomes: &[TossOutcome]) -> Result<Figure, InvalidInputError> {
    let outcomes = check_count(outcomes)?;
    Ok(Figure::new(outcomes.map(TossOutcome::line)))
}

/// Positions whose outcome is changing. Outcomes past the sixth are ignored.
#[must_use]
pub fn changing_positions(outcomes: &[TossOutcome]) -> ChangingLines {
    outcomes
        .iter()
        .enumerate()
        .filter(|(_, outcome)| outcome.is_changing())
        .filter_map(|(index, _)| LinePosition::from_index(index).ok())
        .collect()
}

/// `primary` with every changing line inverted, or `None` when nothing changes.
#[must_use]
pub fn resolve_secondary(primary: &Figure, changing: ChangingLines) -> Option<Figure> {
    (!changing.is_empty()).then(|| primary.mutate(changing))
}

/// Lower (positions 1-3) and upper (positions 4-6) trigrams.
#[must_use]
pub fn decompose(figure: &Figure) -> (Trigram, Trigram) {
    figure.decompose()
}

/// Resolve six outcomes into a complete [`DivinationResult`].
pub fn divine(outcomes: &[TossOutcome]) -> Result<DivinationResult, InvalidInputError> {
    let primary = resolve_primary(outcomes)?;
    let outcomes = *check_count(outcomes)?;
    let changing = changing_positions(&outcomes);
    let secondary = resolve_secondary(&primary, changing);

    tracing::debug!(
        primary = %primary,
        changing = ?Vec::<u8>::from(changing),
        secondary = ?secondary.map(|f| f.to_string()),
        "Resolved divination"
    );

    Ok(DivinationResult {
        primary,
        changing,
        secondary,
        outcomes,
    })
}

/// Outcome of one divination.
///
/// The secondary figure is present exactly when some line is changing, and
/// differs from the primary at those positions only. Deserialization
/// re-derives everything from the stored outcomes, so a loaded result
/// upholds the same invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredDivination")]
pub struct DivinationResult {
    primary: Figure,
    changing: ChangingLines,
    secondary: Option<Figure>,
    outcomes: [TossOutcome; FIGURE_LINES],
}

#[derive(Deserialize)]
struct StoredDivination {
    outcomes: Vec<TossOutcome>,
}

impl TryFrom<StoredDivination> for DivinationResult {
    type Error = InvalidInputError;

    fn try_from(value: StoredDivination) -> Result<Self, Self::Error> {
        divine(&value.outcomes)
    }
}

impl DivinationResult {
    #[must_use]
    pub fn primary(&self) -> Figure {
        self.primary
    }

    #[must_use]
    pub fn changing(&self) -> ChangingLines {
        self.changing
    }

    #[must_use]
    pub fn secondary(&self) -> Option<Figure> {
        self.secondary
    }

    #[must_use]
    pub fn outcomes(&self) -> &[TossOutcome; FIGURE_LINES] {
        &self.outcomes
    }

    #[must_use]
    pub fn has_changing_lines(&self) -> bool {
        !self.changing.is_empty()
    }

    /// Lines after every changing line has turned; equals the primary when nothing changes.
    #[must_use]
    pub fn settled_lines(&self) -> [Line; FIGURE_LINES] {
        self.outcomes.map(TossOutcome::settled_line)
    }
}
