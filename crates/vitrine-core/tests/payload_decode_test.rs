//! Payload Decode Test: Verifies the externally-supplied session feed
//!
//! This test validates that:
//! 1. Rates decode from both JSON numbers and numeric strings
//! 2. Unknown fields and missing optionals never break the decode
//! 3. A decoded scenario drives the conversion display policy end to end
//! 4. The bundled sample session stays decodable and non-empty
//!
//! Run with: `cargo test --test payload_decode_test`

use vitrine_core::{
    conversion_view, papers_view, ConversionDisplay, RateStrength, SessionPayload,
};

#[test]
fn test_rate_decodes_from_number_and_string() {
    let numeric: SessionPayload = serde_json::from_str(
        r#"{ "conversion": { "request": { "fromCurrency": "USD", "toCurrency": "EUR" },
             "result": { "rate": 0.92 } } }"#,
    )
    .expect("decode numeric rate");
    let string: SessionPayload = serde_json::from_str(
        r#"{ "conversion": { "request": { "fromCurrency": "USD", "toCurrency": "EUR" },
             "result": { "rate": "0.92" } } }"#,
    )
    .expect("decode string rate");

    for payload in [numeric, string] {
        let scenario = payload.conversion.expect("scenario");
        let rate = scenario.result.expect("result").rate_f64();
        assert_eq!(rate, Some(0.92));
    }

    println!("✓ Rate decode: number and string forms agree");
}

#[test]
fn test_tolerant_decode() {
    // Unknown fields, camelCase keys, null result, no conversion at all.
    let payload: SessionPayload = serde_json::from_str(
        r#"{
            "papers": [
                { "title": "A", "url": "https://example.org/a", "publishedDate": "2024-05-14",
                  "summary": "", "relevanceScore": 0.93 }
            ],
            "maxVisible": 5,
            "conversion": { "request": { "amount": "1", "fromCurrency": "GBP", "toCurrency": "JPY" },
                            "result": null },
            "traceId": "abc-123"
        }"#,
    )
    .expect("tolerant decode");

    assert_eq!(payload.papers.len(), 1);
    assert_eq!(payload.papers[0].published_date.as_deref(), Some("2024-05-14"));
    assert_eq!(payload.max_visible, Some(5));
    let scenario = payload.conversion.expect("scenario");
    assert!(scenario.result.is_none());

    let empty: SessionPayload = serde_json::from_str("{}").expect("empty object");
    assert!(empty.papers.is_empty());
    assert!(empty.conversion.is_none());

    println!("✓ Tolerant decode: unknown fields ignored, optionals default");
}

#[test]
fn test_scenario_drives_display_policy() {
    let payload: SessionPayload = serde_json::from_str(
        r#"{ "conversion": { "request": { "amount": "2", "fromCurrency": "USD", "toCurrency": "EUR" },
             "result": { "rate": "3.5" } } }"#,
    )
    .expect("decode scenario");
    let scenario = payload.conversion.expect("scenario");
    let amount = scenario.request.amount.as_deref().unwrap_or("");

    match conversion_view(amount, scenario.result.as_ref()).display() {
        ConversionDisplay::Converted {
            amount_label,
            unit_rate_label,
            strength,
        } => {
            assert_eq!(amount_label, "7.00");
            assert_eq!(unit_rate_label, "3.5000");
            assert_eq!(strength, RateStrength::Strong);
        }
        other => panic!("expected Converted, got {:?}", other),
    }

    // A rate string that is not numeric renders as pending, not an error.
    let pending: SessionPayload = serde_json::from_str(
        r#"{ "conversion": { "request": { "amount": "2", "fromCurrency": "USD", "toCurrency": "EUR" },
             "result": { "rate": "n/a" } } }"#,
    )
    .expect("decode non-numeric rate");
    let scenario = pending.conversion.expect("scenario");
    assert_eq!(
        conversion_view("2", scenario.result.as_ref()).display(),
        ConversionDisplay::Pending
    );

    println!("✓ Display policy: decoded scenario converts, bad rate pends");
}

#[test]
fn test_bundled_sample_decodes() {
    let sample = SessionPayload::sample();
    assert!(!sample.papers.is_empty());

    let view = papers_view(&sample.papers, sample.max_visible);
    assert!(!view.is_empty_state());
    assert!(view.cards().iter().any(|c| c.download_url.is_some()));

    let scenario = sample.conversion.expect("sample scenario");
    assert!(scenario.result.expect("sample rate").rate_f64().is_some());

    println!("✓ Bundled sample: decodes, yields cards and a usable rate");
}
