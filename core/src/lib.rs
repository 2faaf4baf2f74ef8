//! Divination logic for Yijing.
//!
//! - [`toss`]: the three-coin line generator
//! - [`resolver`]: six outcomes to primary figure, changing lines, and secondary figure
//! - [`reading`]: a resolved result joined with its catalog records
//!
//! Nothing here holds shared mutable state; each divination owns its outcomes,
//! figures, and result. The catalog is passed in by reference.

pub mod reading;
pub mod resolver;
pub mod toss;

pub use reading::Reading;
pub use resolver::{
    DivinationResult, changing_positions, decompose, divine, resolve_primary, resolve_secondary,
};
pub use toss::{CoinToss, draw_with_seed};
