// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use stock_simulator_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn malformed_input() {
        let err = CoreError::MalformedInput("non-numeric current price 'x'".into());
        assert_eq!(
            err.to_string(),
            "Malformed stock data: non-numeric current price 'x'"
        );
    }

    #[test]
    fn malformed_input_empty_message() {
        let err = CoreError::MalformedInput(String::new());
        assert_eq!(err.to_string(), "Malformed stock data: ");
    }

    #[test]
    fn day_not_found() {
        let err = CoreError::DayNotFound("2025-01-03".into());
        assert_eq!(err.to_string(), "No snapshot recorded for day 2025-01-03");
    }

    #[test]
    fn division_by_zero() {
        let err = CoreError::DivisionByZero;
        assert_eq!(
            err.to_string(),
            "Change computation against a zero baseline price"
        );
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            feed: "Brainbase".into(),
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "Feed error (Brainbase): rate limited");
    }

    #[test]
    fn api_error_empty_feed() {
        let err = CoreError::Api {
            feed: String::new(),
            message: "unknown".into(),
        };
        assert_eq!(err.to_string(), "Feed error (): unknown");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Serialization error: unexpected EOF");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        // Trigger a real serde_json error
        let result: Result<Vec<String>, _> = serde_json::from_str("{{invalid json");
        let json_err = result.unwrap_err();
        let core_err: CoreError = json_err.into();
        match &core_err {
            CoreError::Serialization(msg) => assert!(!msg.is_empty()),
            other => panic!("Expected Serialization, got {:?}", other),
        }
    }

    #[test]
    fn from_serde_json_error_eof() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("");
        let json_err = result.unwrap_err();
        let core_err: CoreError = json_err.into();
        match &core_err {
            CoreError::Serialization(msg) => assert!(msg.contains("EOF")),
            other => panic!("Expected Serialization, got {:?}", other),
        }
    }
}

// ── Error is std::error::Error ──────────────────────────────────────

mod std_error {
    use super::*;

    #[test]
    fn core_error_implements_error_trait() {
        let err: Box<dyn std::error::Error> =
            Box::new(CoreError::DayNotFound("2025-01-03".into()));
        assert!(err.to_string().contains("2025-01-03"));
    }

    #[test]
    fn core_error_implements_send() {
        fn assert_send<T: Send>() {}
        assert_send::<CoreError>();
    }

    #[test]
    fn core_error_implements_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<CoreError>();
    }

    #[test]
    fn debug_formatting_names_the_variant() {
        let err = CoreError::DivisionByZero;
        assert_eq!(format!("{:?}", err), "DivisionByZero");
    }
}

// ── Edge cases ──────────────────────────────────────────────────────

mod edge_cases {
    use super::*;

    #[test]
    fn day_key_with_unusual_content_is_echoed() {
        let err = CoreError::DayNotFound("not-a-date".into());
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn errors_can_be_matched_by_variant() {
        let errs = vec![
            CoreError::MalformedInput("x".into()),
            CoreError::DayNotFound("y".into()),
            CoreError::DivisionByZero,
        ];

        let mut seen_malformed = false;
        let mut seen_not_found = false;
        let mut seen_div_zero = false;
        for err in &errs {
            match err {
                CoreError::MalformedInput(_) => seen_malformed = true,
                CoreError::DayNotFound(_) => seen_not_found = true,
                CoreError::DivisionByZero => seen_div_zero = true,
                _ => {}
            }
        }
        assert!(seen_malformed && seen_not_found && seen_div_zero);
    }
}
