//! Currency converter: amount input gating, conversion derivation, display policy.
//!
//! The amount field accepts only digits with at most one decimal point;
//! anything else keeps the prior text and raises a transient inline error.
//! Conversion itself is a pure derivation of (accepted text, latest rate).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::format::{format_grouped, format_unit_rate};

/// Inline message shown when a keystroke is rejected by the input gate.
pub const INVALID_AMOUNT_MESSAGE: &str = "Numbers and a single decimal point only";

/// Empty string, or digits with at most one decimal point.
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d*\.?\d*$").expect("amount pattern is a valid regex"));

/// True when the raw text passes the keystroke gate. Note that acceptance
/// is weaker than usability: "." and "0" pass the gate but do not convert.
pub fn amount_pattern_accepts(text: &str) -> bool {
    AMOUNT_PATTERN.is_match(text)
}

/// Classification of the accepted amount text for conversion purposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountState {
    /// Field is empty.
    Empty,
    /// Parses to a finite number greater than zero; carries the value.
    ValidNumeric(f64),
    /// Pattern-accepted but unusable: non-numeric (".") or not positive.
    Invalid,
}

/// Evaluates accepted text for conversion eligibility.
pub fn classify_amount(text: &str) -> AmountState {
    if text.is_empty() {
        return AmountState::Empty;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => AmountState::ValidNumeric(v),
        _ => AmountState::Invalid,
    }
}

/// The editable amount field: owns the accepted text and the transient
/// validation error. One instance per converter panel; mutated only through
/// its own edit handler.
#[derive(Debug, Clone, Default)]
pub struct AmountInput {
    text: String,
    error: Option<&'static str>,
}

impl AmountInput {
    /// Seeds the field from a caller-supplied default. A default that fails
    /// the gate is discarded rather than shown.
    pub fn new(initial: &str) -> Self {
        let text = if amount_pattern_accepts(initial) {
            initial.to_string()
        } else {
            String::new()
        };
        Self { text, error: None }
    }

    /// Currently accepted text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Inline validation message, present until the next accepted edit.
    pub fn error(&self) -> Option<&str> {
        self.error
    }

    /// Conversion-eligibility state of the accepted text.
    pub fn state(&self) -> AmountState {
        classify_amount(&self.text)
    }

    /// Applies an edit: accepted candidates replace the text and clear any
    /// error; rejected candidates keep the prior text and raise the inline
    /// message. Returns whether the candidate was accepted.
    pub fn apply_edit(&mut self, candidate: &str) -> bool {
        if amount_pattern_accepts(candidate) {
            self.text = candidate.to_string();
            self.error = None;
            true
        } else {
            self.error = Some(INVALID_AMOUNT_MESSAGE);
            false
        }
    }
}

/// The conversion to perform, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Initial amount text; the panel owns edits from there on.
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(alias = "fromCurrency")]
    pub from_currency: String,
    #[serde(alias = "toCurrency")]
    pub to_currency: String,
}

/// Exchange rate as it arrives on the wire: some sources send a JSON
/// number, others a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RateValue {
    Number(f64),
    Text(String),
}

impl RateValue {
    /// Numeric view of the wire value; None for non-numeric or non-finite
    /// input, which the display policy treats as rate-not-yet-available.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            RateValue::Number(n) => *n,
            RateValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

/// The (possibly pending) rate lookup outcome. Absence of the whole result
/// means the rate has not arrived yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub rate: RateValue,
}

impl ConversionResult {
    /// Usable numeric rate, if the wire value parses to a finite number.
    pub fn rate_f64(&self) -> Option<f64> {
        self.rate.as_f64()
    }
}

/// Directional indicator for the displayed rate. Threshold at 1.0 is a
/// fixed display policy, not a trend signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateStrength {
    Strong,
    Weak,
}

impl RateStrength {
    pub fn from_rate(rate: f64) -> Self {
        if rate > 1.0 {
            RateStrength::Strong
        } else {
            RateStrength::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RateStrength::Strong => "strong",
            RateStrength::Weak => "weak",
        }
    }
}

/// Derived conversion values. `converted_amount` is present only when the
/// amount is valid AND the rate is present and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionView {
    pub converted_amount: Option<f64>,
    pub is_valid_amount: bool,
    pub rate: Option<f64>,
}

/// What the converter should render, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionDisplay {
    /// No usable rate yet: show the loading indicator.
    Pending,
    /// Rate known, amount unusable: prompt for a valid amount.
    EnterAmount,
    /// Ready: formatted converted amount, unit rate, and the indicator.
    Converted {
        amount_label: String,
        unit_rate_label: String,
        strength: RateStrength,
    },
}

/// Recomputes the conversion view from the accepted amount text and the
/// latest result. Called on every change to either input.
pub fn conversion_view(amount_text: &str, result: Option<&ConversionResult>) -> ConversionView {
    let state = classify_amount(amount_text);
    let rate = result.and_then(ConversionResult::rate_f64);
    let is_valid_amount = matches!(state, AmountState::ValidNumeric(_));
    let converted_amount = match (state, rate) {
        (AmountState::ValidNumeric(a), Some(r)) => Some(a * r),
        _ => None,
    };
    ConversionView {
        converted_amount,
        is_valid_amount,
        rate,
    }
}

impl ConversionView {
    /// Applies the display policy: pending without a rate, a prompt without
    /// a valid amount, the formatted conversion otherwise.
    pub fn display(&self) -> ConversionDisplay {
        match (self.rate, self.converted_amount) {
            (None, _) => ConversionDisplay::Pending,
            (Some(_), None) => ConversionDisplay::EnterAmount,
            (Some(rate), Some(converted)) => ConversionDisplay::Converted {
                amount_label: format_grouped(converted),
                unit_rate_label: format_unit_rate(rate),
                strength: RateStrength::from_rate(rate),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(rate: RateValue) -> ConversionResult {
        ConversionResult { rate }
    }

    #[test]
    fn gate_accepts_digits_and_one_decimal_point() {
        assert!(amount_pattern_accepts(""));
        assert!(amount_pattern_accepts("12.5"));
        assert!(amount_pattern_accepts("."));
        assert!(amount_pattern_accepts("0"));
        assert!(!amount_pattern_accepts("12.5.6"));
        assert!(!amount_pattern_accepts("-3"));
        assert!(!amount_pattern_accepts("12a"));
    }

    #[test]
    fn rejected_edit_keeps_prior_text_and_raises_error() {
        let mut input = AmountInput::new("12.5");
        assert!(!input.apply_edit("12.5.6"));
        assert_eq!(input.text(), "12.5");
        assert_eq!(input.error(), Some(INVALID_AMOUNT_MESSAGE));
    }

    #[test]
    fn accepted_edit_replaces_text_and_clears_error() {
        let mut input = AmountInput::new("1");
        input.apply_edit("abc");
        assert!(input.apply_edit("42"));
        assert_eq!(input.text(), "42");
        assert_eq!(input.error(), None);
    }

    #[test]
    fn gated_but_unusable_text_classifies_invalid() {
        assert_eq!(classify_amount(""), AmountState::Empty);
        assert_eq!(classify_amount("."), AmountState::Invalid);
        assert_eq!(classify_amount("0"), AmountState::Invalid);
        assert_eq!(classify_amount("0.0"), AmountState::Invalid);
        assert_eq!(classify_amount("2"), AmountState::ValidNumeric(2.0));
    }

    #[test]
    fn converted_amount_needs_valid_amount_and_rate() {
        let r = result(RateValue::Number(3.5));
        let view = conversion_view("2", Some(&r));
        assert_eq!(view.converted_amount, Some(7.0));
        assert!(view.is_valid_amount);

        assert_eq!(conversion_view("0", Some(&r)).converted_amount, None);
        assert_eq!(conversion_view("", Some(&r)).converted_amount, None);
        assert_eq!(conversion_view("2", None).converted_amount, None);
    }

    #[test]
    fn display_is_pending_without_a_rate() {
        assert_eq!(conversion_view("2", None).display(), ConversionDisplay::Pending);
        assert_eq!(conversion_view("", None).display(), ConversionDisplay::Pending);
    }

    #[test]
    fn display_prompts_when_rate_known_but_amount_unusable() {
        let r = result(RateValue::Number(1.1));
        assert_eq!(conversion_view("", Some(&r)).display(), ConversionDisplay::EnterAmount);
        assert_eq!(conversion_view(".", Some(&r)).display(), ConversionDisplay::EnterAmount);
    }

    #[test]
    fn display_formats_conversion_and_strength() {
        let r = result(RateValue::Number(3.5));
        match conversion_view("2", Some(&r)).display() {
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
    }

    #[test]
    fn strength_threshold_is_exactly_one() {
        assert_eq!(RateStrength::from_rate(1.0001), RateStrength::Strong);
        assert_eq!(RateStrength::from_rate(1.0), RateStrength::Weak);
        assert_eq!(RateStrength::from_rate(0.92), RateStrength::Weak);
    }

    #[test]
    fn string_rates_parse_and_bad_strings_are_pending() {
        let numeric = result(RateValue::Text("0.92".to_string()));
        assert_eq!(numeric.rate_f64(), Some(0.92));

        let bad = result(RateValue::Text("n/a".to_string()));
        assert_eq!(bad.rate_f64(), None);
        assert_eq!(conversion_view("2", Some(&bad)).display(), ConversionDisplay::Pending);
    }

    #[test]
    fn non_finite_rates_are_unusable() {
        assert_eq!(result(RateValue::Number(f64::NAN)).rate_f64(), None);
        assert_eq!(result(RateValue::Text("inf".to_string())).rate_f64(), None);
    }

    #[test]
    fn seed_defaults_pass_the_same_gate() {
        assert_eq!(AmountInput::new("1").text(), "1");
        assert_eq!(AmountInput::new("-5").text(), "");
    }
}
