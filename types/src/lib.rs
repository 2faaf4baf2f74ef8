//! Core domain types for Yijing.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.
//!
//! # Line encoding
//!
//! Every component shares one convention for turning lines into bits:
//!
//! - A [`Line`] is `1` when solid and `0` when broken.
//! - A [`Trigram`] code lists its lines bottom-to-top, the lowest line as the
//!   most significant of the three bits.
//! - A [`FigureCode`] is `lower << 3 | upper`, so its six-digit binary rendering
//!   reads position 1 through position 6 left to right.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod figure;
mod ids;
mod line;
mod record;
mod toss;
mod trigram;

pub use figure::{ChangingLines, FIGURE_LINES, Figure, FigureCode};
pub use ids::{HEXAGRAM_COUNT, HexagramId, LinePosition};
pub use line::Line;
pub use record::{Fortune, Guidance, HexagramRecord, LineRecord};
pub use toss::{CoinFace, TossOutcome};
pub use trigram::Trigram;

use thiserror::Error;

/// Input that cannot be turned into a domain value.
///
/// Raised at construction boundaries; domain types are valid once built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("expected {expected} toss outcomes, got {actual}")]
    OutcomeCount { expected: usize, actual: usize },
    #[error("toss value {0} is outside 6..=9")]
    TossValue(u8),
    #[error("line position {0} is outside 1..=6")]
    LinePosition(u8),
    #[error("hexagram id {0} is outside 1..=64")]
    HexagramId(u8),
    #[error("figure code '{0}' must be six characters of 0 or 1")]
    FigureCode(String),
}
