pub mod calendar;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::NaiveDate;
use tracing::info;

use errors::CoreError;
use models::stock::{Stock, StockQuote};
use models::timeline::{DayKey, Timeline};
use providers::traits::StockFeed;
use services::price_evolver::{FluctuationSource, PriceEvolver, SeededFluctuationSource};
use services::timeline_service::TimelineService;

/// Main entry point for the stock simulator core library.
/// Holds one session's timeline, its day cursor, and the services that
/// operate on them.
#[must_use]
pub struct StockSimulator {
    timeline: Timeline,
    timeline_service: TimelineService,
    evolver: PriceEvolver,
    /// First simulated day. Fixed for the life of the session; every change
    /// metric is measured against this day's prices.
    start_date: NaiveDate,
    /// The day cursor. Moves forward one day at a time, never backward.
    current_date: NaiveDate,
}

impl std::fmt::Debug for StockSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockSimulator")
            .field("start_date", &self.start_date)
            .field("current_date", &self.current_date)
            .field("days_visited", &self.timeline.day_count())
            .field("stocks", &self.stock_count())
            .finish()
    }
}

impl StockSimulator {
    // ── Session Setup ───────────────────────────────────────────────

    /// Start a session from a live feed, with today as day one.
    pub async fn start(feed: &dyn StockFeed) -> Result<Self, CoreError> {
        let quotes = feed.fetch_quotes().await?;
        info!("starting session with {} quotes from {}", quotes.len(), feed.name());
        Self::from_quotes(&quotes, chrono::Utc::now().date_naive())
    }

    /// Start a session from already-fetched quotes.
    /// Use this for WASM / Tauri where the frontend handles the fetch.
    pub fn from_quotes(quotes: &[StockQuote], start_date: NaiveDate) -> Result<Self, CoreError> {
        Self::build(quotes, start_date, PriceEvolver::new())
    }

    /// Start a session whose whole price history is reproducible from `seed`.
    pub fn from_quotes_seeded(
        quotes: &[StockQuote],
        start_date: NaiveDate,
        seed: u64,
    ) -> Result<Self, CoreError> {
        Self::build(
            quotes,
            start_date,
            PriceEvolver::with_source(Box::new(SeededFluctuationSource::new(seed))),
        )
    }

    /// Start a session with a caller-supplied swing source.
    pub fn with_fluctuation_source(
        quotes: &[StockQuote],
        start_date: NaiveDate,
        source: Box<dyn FluctuationSource>,
    ) -> Result<Self, CoreError> {
        Self::build(quotes, start_date, PriceEvolver::with_source(source))
    }

    // ── Day Navigation ──────────────────────────────────────────────

    /// Move the session forward one calendar day.
    ///
    /// The new day's snapshot is evolved from the current day's prices.
    /// Revisited days keep their stored snapshot. The cursor only moves
    /// once the next day's snapshot is in place.
    pub fn advance_day(&mut self) -> Result<(), CoreError> {
        let next_date = calendar::add_days(self.current_date, 1);
        self.timeline_service.advance_day(
            &mut self.timeline,
            &mut self.evolver,
            &calendar::day_key(self.current_date),
            calendar::day_key(next_date),
        )?;
        self.current_date = next_date;
        Ok(())
    }

    /// 1-based day counter: the start day is day 1, the day after is day 2.
    #[must_use]
    pub fn day_distance(&self) -> i64 {
        calendar::day_distance(self.start_date, self.current_date) + 1
    }

    /// The cursor date rendered long form, e.g. "Friday, August 22, 2026".
    #[must_use]
    pub fn formatted_current_date(&self) -> String {
        calendar::long_format(self.current_date)
    }

    /// The timeline key for the cursor date.
    #[must_use]
    pub fn current_day_key(&self) -> DayKey {
        calendar::day_key(self.current_date)
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    // ── Snapshots ───────────────────────────────────────────────────

    /// The stock snapshot for the cursor day.
    pub fn current_stocks(&self) -> Result<&[Stock], CoreError> {
        self.timeline_service
            .stocks_for(&self.timeline, &self.current_day_key())
    }

    /// The stock snapshot for any visited day.
    /// Fails with [`CoreError::DayNotFound`] for days the session never reached.
    pub fn stocks_on(&self, date: NaiveDate) -> Result<&[Stock], CoreError> {
        self.timeline_service
            .stocks_for(&self.timeline, &calendar::day_key(date))
    }

    /// Number of days materialized so far (day one counts).
    #[must_use]
    pub fn days_visited(&self) -> usize {
        self.timeline.day_count()
    }

    /// Number of stocks tracked by the session. Constant across days.
    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.current_stocks().map(|stocks| stocks.len()).unwrap_or(0)
    }

    /// Read-only view of the whole timeline.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export one visited day's snapshot as a JSON string.
    pub fn day_snapshot_json(&self, date: NaiveDate) -> Result<String, CoreError> {
        let stocks = self.stocks_on(date)?;
        serde_json::to_string_pretty(stocks)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))
    }

    /// Export the whole timeline as JSON (full-session snapshot for debugging/display).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.timeline)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize timeline: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        quotes: &[StockQuote],
        start_date: NaiveDate,
        evolver: PriceEvolver,
    ) -> Result<Self, CoreError> {
        let timeline_service = TimelineService::new();
        let mut timeline = Timeline::new();
        timeline_service.seed_day(&mut timeline, calendar::day_key(start_date), quotes)?;

        Ok(Self {
            timeline,
            timeline_service,
            evolver,
            start_date,
            current_date: start_date,
        })
    }
}
