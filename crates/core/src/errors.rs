use thiserror::Error;

/// Unified error type for the entire stock-simulator-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input / Data ────────────────────────────────────────────────
    #[error("Malformed stock data: {0}")]
    MalformedInput(String),

    #[error("No snapshot recorded for day {0}")]
    DayNotFound(String),

    #[error("Change computation against a zero baseline price")]
    DivisionByZero,

    // ── API / Network ───────────────────────────────────────────────
    #[error("Feed error ({feed}): {message}")]
    Api {
        feed: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Export ──────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so that
        // transport errors never echo request secrets.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
