use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One raw entry of the stock feed, exactly as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Ticker symbol (e.g., "ACB")
    pub symbol: String,

    /// Company name (e.g., "Acme")
    pub name: String,

    /// Quoted price. Must be finite and strictly positive to seed a session.
    pub price: f64,
}

impl StockQuote {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
        }
    }

    /// The display label stored on every snapshot: `"Acme (ACB)"`.
    /// Composed here, once, so every seeding path agrees on the format.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

/// Movement of a stock against its day-1 baseline.
///
/// Always computed against `initial`, never against the previous day, so a
/// stock that drifted up and back down reads as unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Strictly above the baseline (`current > initial`; equal is not up).
    pub is_up: bool,

    /// `current - initial`, rendered with exactly 2 fractional digits.
    pub amount: String,

    /// `floor(((current - initial) / initial) * 100)` as an integer string.
    /// Floored toward negative infinity: -2.9% reads "-3", +2.9% reads "2".
    pub percent: String,
}

/// One stock as recorded on one trading day.
///
/// Records are immutable per day and recreated on every advance: `name` and
/// `initial` carry over unchanged, `current` and `change` are recomputed.
/// Prices are decimal strings with exactly 2 fractional digits, produced by
/// [`Stock::format_price`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Display label, composed as `"Company (SYMBOL)"`.
    pub name: String,

    /// Day-1 price, the change baseline. Fixed for the life of the session.
    pub initial: String,

    /// Price on this snapshot's day.
    pub current: String,

    /// Movement against `initial`.
    pub change: Change,
}

impl Stock {
    /// Render a price with exactly 2 fractional digits.
    ///
    /// Uses Rust's standard float formatting, which rounds the exact binary
    /// value to the nearest representable 2-digit decimal.
    #[must_use]
    pub fn format_price(value: f64) -> String {
        format!("{value:.2}")
    }

    /// Parse the stored baseline price back to a number.
    pub fn initial_value(&self) -> Result<f64, CoreError> {
        Self::parse_decimal("initial", &self.initial)
    }

    /// Parse the stored current price back to a number.
    pub fn current_value(&self) -> Result<f64, CoreError> {
        Self::parse_decimal("current", &self.current)
    }

    /// Stored price strings are produced by the library itself, so a parse
    /// failure means the record was assembled by hand from non-numeric text.
    fn parse_decimal(field: &str, value: &str) -> Result<f64, CoreError> {
        value.trim().parse::<f64>().map_err(|_| {
            CoreError::MalformedInput(format!("non-numeric {field} price '{value}'"))
        })
    }
}
