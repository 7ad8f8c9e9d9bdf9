use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::errors::CoreError;
use crate::models::fluctuation::{Direction, Fluctuation, MAX_SWING_PERCENT, MIN_SWING_PERCENT};
use crate::models::stock::{Change, Stock};

/// Source of daily price swings.
///
/// The production implementation draws from the thread-local RNG; seeded and
/// scripted implementations exist for reproducible sessions and tests.
pub trait FluctuationSource: Send {
    /// Draw the next swing: uniformly chosen direction, uniformly chosen
    /// percent in `MIN_SWING_PERCENT..=MAX_SWING_PERCENT`.
    fn next_fluctuation(&mut self) -> Fluctuation;
}

/// Draws every swing from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFluctuationSource;

impl RandomFluctuationSource {
    pub fn new() -> Self {
        Self
    }
}

impl FluctuationSource for RandomFluctuationSource {
    fn next_fluctuation(&mut self) -> Fluctuation {
        let mut rng = rand::thread_rng();
        let direction = if rng.gen_bool(0.5) {
            Direction::Up
        } else {
            Direction::Down
        };
        Fluctuation::new(direction, rng.gen_range(MIN_SWING_PERCENT..=MAX_SWING_PERCENT))
    }
}

/// Deterministic source backed by a seeded RNG.
///
/// Two sessions built from the same seed walk through identical price
/// histories, which makes a whole simulation replayable.
#[derive(Debug, Clone)]
pub struct SeededFluctuationSource {
    rng: StdRng,
}

impl SeededFluctuationSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FluctuationSource for SeededFluctuationSource {
    fn next_fluctuation(&mut self) -> Fluctuation {
        let direction = if self.rng.gen_bool(0.5) {
            Direction::Up
        } else {
            Direction::Down
        };
        Fluctuation::new(direction, self.rng.gen_range(MIN_SWING_PERCENT..=MAX_SWING_PERCENT))
    }
}

/// Evolves stock prices from one day to the next and derives change metrics
/// against the day-1 baseline.
///
/// Pure business logic apart from the injected randomness. Easy to test with
/// a scripted [`FluctuationSource`].
pub struct PriceEvolver {
    source: Box<dyn FluctuationSource>,
}

impl PriceEvolver {
    /// Evolver backed by the thread-local RNG.
    pub fn new() -> Self {
        Self::with_source(Box::new(RandomFluctuationSource::new()))
    }

    /// Evolver with a caller-supplied swing source (seeded or scripted).
    pub fn with_source(source: Box<dyn FluctuationSource>) -> Self {
        Self { source }
    }

    /// Apply one random swing to a price.
    pub fn fluctuate(&mut self, price: f64) -> f64 {
        self.source.next_fluctuation().apply(price)
    }

    /// Produce the next-day version of a stock: one swing applied to the
    /// current price, change metrics recomputed against the unchanged
    /// day-1 baseline.
    pub fn evolve(&mut self, stock: &Stock) -> Result<Stock, CoreError> {
        let initial = stock.initial_value()?;
        let current = stock.current_value()?;

        let swing = self.source.next_fluctuation();
        let next = swing.apply(current);
        debug!(
            "{}: {:.2} {} {}% -> {:.2}",
            stock.name, current, swing.direction, swing.percent, next
        );

        Ok(Stock {
            name: stock.name.clone(),
            initial: stock.initial.clone(),
            current: Stock::format_price(next),
            change: Self::compute_change(initial, next)?,
        })
    }

    /// Change metrics of `current` against the `initial` baseline.
    ///
    /// - `is_up` is a strict comparison, so an unchanged price reads as down.
    /// - `amount` is the signed delta rendered to two decimals.
    /// - `percent` is the relative delta floored toward negative infinity
    ///   and rendered as a whole number.
    pub fn compute_change(initial: f64, current: f64) -> Result<Change, CoreError> {
        if initial == 0.0 {
            return Err(CoreError::DivisionByZero);
        }

        let delta = current - initial;
        let percent = (delta / initial * 100.0).floor() as i64;

        Ok(Change {
            is_up: current > initial,
            amount: Stock::format_price(delta),
            percent: percent.to_string(),
        })
    }
}

impl Default for PriceEvolver {
    fn default() -> Self {
        Self::new()
    }
}
