//! vitrine-core: display core for the paper result cards and the currency
//! converter (derivations, input gating, link bridge, session payload).
//!
//! Re-exports everything the add-ons need so the studio shell and the
//! terminal dashboard keep a consistent public API.

mod bridge;
mod config;
mod conversion;
mod error;
mod format;
mod paper;
mod payload;

// Link bridge (panels → open-link collaborator)
pub use bridge::{
    try_dispatch, vitrine_link_channel, LinkKind, LinkReceiver, LinkRequest, LinkSender,
};

// Configuration (env toggles + user preferences)
pub use config::{resolve_max_visible, resolve_payload_path, UserPrefs, VitrineConfig};

// Currency converter (input gate, derivation, display policy)
pub use conversion::{
    amount_pattern_accepts, classify_amount, conversion_view, AmountInput, AmountState,
    ConversionDisplay, ConversionRequest, ConversionResult, ConversionView, RateStrength,
    RateValue, INVALID_AMOUNT_MESSAGE,
};

// Errors
pub use error::{VitrineError, VitrineResult};

// Formatting helpers
pub use format::{format_grouped, format_long_date, format_unit_rate, parse_flexible_date};

// Paper cards (records, bounded view, per-card derivations)
pub use paper::{
    download_url, effective_domains, formatted_author, formatted_date, is_downloadable,
    papers_view, papers_view_with_domains, PaperCard, PaperRecord, PapersView,
    AUTHOR_TRUNCATION_MARKER, DEFAULT_MAX_VISIBLE, OPEN_REPOSITORY_DOMAINS,
};

// Session payload (external feed)
pub use payload::{ConversionScenario, SessionPayload, SAMPLE_SESSION};
