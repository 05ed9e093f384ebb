//! Session payload: the externally-supplied feed, decoded from JSON.
//!
//! Carries the paper results and an optional conversion scenario. Unknown
//! fields are ignored so upstream sources can grow without breaking us;
//! camelCase aliases accept feeds that kept their original key style.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::conversion::{ConversionRequest, ConversionResult};
use crate::error::VitrineResult;
use crate::paper::PaperRecord;

/// Bundled sample session so the shells run with no external files.
pub const SAMPLE_SESSION: &str = include_str!("../assets/session.json");

/// One conversion to display: the request and, once available, the rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionScenario {
    pub request: ConversionRequest,
    /// None until the external rate lookup resolves.
    #[serde(default)]
    pub result: Option<ConversionResult>,
}

/// Everything one render session needs, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    #[serde(default)]
    pub papers: Vec<PaperRecord>,
    /// Caller's cap on visible cards; None means the default.
    #[serde(default, alias = "maxVisible")]
    pub max_visible: Option<usize>,
    #[serde(default)]
    pub conversion: Option<ConversionScenario>,
}

impl SessionPayload {
    /// Decodes a payload from JSON text.
    pub fn from_json(s: &str) -> VitrineResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads a payload from a JSON file.
    pub fn load_from_path(path: &Path) -> VitrineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The bundled sample session. Falls back to an empty payload if the
    /// bundled asset is ever out of step with the types.
    pub fn sample() -> Self {
        match Self::from_json(SAMPLE_SESSION) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("bundled sample session failed to decode: {}", e);
                Self::default()
            }
        }
    }
}
