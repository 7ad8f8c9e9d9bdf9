use tracing::debug;

use crate::errors::CoreError;
use crate::models::stock::{Stock, StockQuote};
use crate::models::timeline::{DayKey, Timeline};
use crate::services::price_evolver::PriceEvolver;

/// Materializes days on a [`Timeline`]: the first day from feed quotes,
/// every later day by evolving the previous day's snapshot.
///
/// Pure business logic with no I/O. Easy to test.
pub struct TimelineService;

impl TimelineService {
    pub fn new() -> Self {
        Self
    }

    /// Record the opening snapshot for a day from feed quotes.
    ///
    /// No-op if the day is already present. Every quote price must be finite
    /// and strictly positive. Opening stocks carry a zero change: initial and
    /// current price start out as the same value.
    pub fn seed_day(
        &self,
        timeline: &mut Timeline,
        key: DayKey,
        quotes: &[StockQuote],
    ) -> Result<(), CoreError> {
        if timeline.contains(&key) {
            debug!("day {key} already seeded, keeping existing snapshot");
            return Ok(());
        }

        let mut stocks = Vec::with_capacity(quotes.len());
        for quote in quotes {
            if !quote.price.is_finite() || quote.price <= 0.0 {
                return Err(CoreError::MalformedInput(format!(
                    "invalid feed price {} for {}",
                    quote.price, quote.symbol
                )));
            }

            let price = Stock::format_price(quote.price);
            stocks.push(Stock {
                name: quote.display_name(),
                initial: price.clone(),
                current: price,
                change: PriceEvolver::compute_change(quote.price, quote.price)?,
            });
        }

        debug!("seeded day {} with {} stocks", key, stocks.len());
        timeline.record(key, stocks);
        Ok(())
    }

    /// Materialize `next_key` by evolving the snapshot stored under
    /// `current_key`.
    ///
    /// No-op if `next_key` is already present, so revisiting a day never
    /// re-rolls its prices. Fails with [`CoreError::DayNotFound`] when the
    /// source day has no snapshot.
    pub fn advance_day(
        &self,
        timeline: &mut Timeline,
        evolver: &mut PriceEvolver,
        current_key: &str,
        next_key: DayKey,
    ) -> Result<(), CoreError> {
        if timeline.contains(&next_key) {
            debug!("day {next_key} already materialized, keeping existing snapshot");
            return Ok(());
        }

        let source = timeline
            .get(current_key)
            .ok_or_else(|| CoreError::DayNotFound(current_key.to_string()))?;

        let mut evolved = Vec::with_capacity(source.len());
        for stock in source {
            evolved.push(evolver.evolve(stock)?);
        }

        debug!("materialized day {next_key} from {current_key}");
        timeline.record(next_key, evolved);
        Ok(())
    }

    /// The snapshot recorded for a day.
    pub fn stocks_for<'a>(
        &self,
        timeline: &'a Timeline,
        key: &str,
    ) -> Result<&'a [Stock], CoreError> {
        timeline
            .get(key)
            .ok_or_else(|| CoreError::DayNotFound(key.to_string()))
    }
}

impl Default for TimelineService {
    fn default() -> Self {
        Self::new()
    }
}
