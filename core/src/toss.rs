//! Three-coin line generator.
//!
//! Each draw flips three fair coins worth 3 (heads) or 2 (tails) and sums them:
//!
//! | Sum | Outcome | Probability |
//! |-----|---------|-------------|
//! | 6   | 老阴, broken, changing | 1/8 |
//! | 7   | 少阳, solid            | 3/8 |
//! | 8   | 少阴, broken           | 3/8 |
//! | 9   | 老阳, solid, changing  | 1/8 |

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use yijing_types::{CoinFace, FIGURE_LINES, TossOutcome};

/// Coin tosser over a caller-chosen random source.
#[derive(Debug, Clone)]
pub struct CoinToss<R> {
    rng: R,
}

impl CoinToss<ThreadRng> {
    /// Tosser backed by the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for CoinToss<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinToss<StdRng> {
    /// Reproducible tosser: the same seed yields the same sequence of draws.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> CoinToss<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn draw(&mut self) -> TossOutcome {
        toss_three(&mut self.rng)
    }

    /// Six draws, position 1 first.
    pub fn draw_six(&mut self) -> [TossOutcome; FIGURE_LINES] {
        let outcomes: [TossOutcome; FIGURE_LINES] = std::array::from_fn(|_| self.draw());
        tracing::debug!(
            values = ?outcomes.map(TossOutcome::value),
            "Drew six toss outcomes"
        );
        outcomes
    }
}

/// A single draw from a fresh generator seeded with `seed`.
#[must_use]
pub fn draw_with_seed(seed: u64) -> TossOutcome {
    CoinToss::seeded(seed).draw()
}

fn toss_three(rng: &mut impl Rng) -> TossOutcome {
    let coins = std::array::from_fn(|_| CoinFace::from_heads(rng.random_bool(0.5)));
    TossOutcome::from_coins(coins)
}
