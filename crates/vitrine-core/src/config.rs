//! Runtime configuration loaded from `.env` plus a local preferences file.
//!
//! Env toggles change shell behavior without code edits; the preferences
//! file remembers per-user choices between dashboard runs.
//!
//! | Env | Default | Description |
//! |-----|---------|--------------|
//! | VITRINE_PAYLOAD_PATH | (unset) | JSON session payload to load instead of the bundled sample. |
//! | VITRINE_MAX_VISIBLE | 10 | Cap on visible paper cards (overrides the payload's own cap). |
//! | VITRINE_DOWNLOAD_DOMAINS | (unset) | Comma-separated extra open-repository domains. |
//! | VITRINE_OPEN_LINKS | true | When false, dispatched links are logged instead of opened. |

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::VitrineResult;

/// Shell configuration loaded from environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitrineConfig {
    /// VITRINE_PAYLOAD_PATH: session payload file for the shells.
    #[serde(default)]
    pub payload_path: Option<String>,
    /// VITRINE_MAX_VISIBLE: visible-card cap override for the shells.
    #[serde(default)]
    pub max_visible: Option<usize>,
    /// VITRINE_DOWNLOAD_DOMAINS: extra domains treated as open repositories.
    #[serde(default)]
    pub extra_download_domains: Vec<String>,
    /// VITRINE_OPEN_LINKS: actually open dispatched links in the browser.
    #[serde(default = "default_true")]
    pub open_links_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl VitrineConfig {
    /// Load toggles from environment. Unset or invalid => defaults (see
    /// struct field docs).
    pub fn from_env() -> Self {
        Self {
            payload_path: env_opt_string("VITRINE_PAYLOAD_PATH"),
            max_visible: env_opt_usize("VITRINE_MAX_VISIBLE"),
            extra_download_domains: env_list("VITRINE_DOWNLOAD_DOMAINS"),
            open_links_enabled: env_bool("VITRINE_OPEN_LINKS", true),
        }
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(v) => v.trim().eq_ignore_ascii_case("true") || (v.trim().is_empty() && default),
        Err(_) => default,
    }
}

fn env_opt_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_opt_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn env_list(name: &str) -> Vec<String> {
    match std::env::var(name) {
        Ok(v) => v
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Per-user preferences stored locally in `vitrine_prefs.toml`. Lets
/// dashboard users pin a payload file and a card cap without touching
/// environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    /// Preferred session payload file.
    #[serde(default)]
    pub payload_path: Option<String>,

    /// Preferred visible-card cap.
    #[serde(default)]
    pub max_visible: Option<usize>,
}

impl UserPrefs {
    /// Default path for the preferences file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("vitrine_prefs.toml")
    }

    /// Load preferences from the default path, creating the file with
    /// defaults on first run.
    pub fn load() -> VitrineResult<Self> {
        Self::load_from_path(&Self::default_path())
    }

    /// Load preferences from a specific path, creating the file with
    /// defaults when it does not exist yet.
    pub fn load_from_path(path: &Path) -> VitrineResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let prefs: UserPrefs = toml::from_str(&content)?;
            Ok(prefs)
        } else {
            let prefs = UserPrefs::default();
            prefs.save_to_path(path)?;
            Ok(prefs)
        }
    }

    /// Save preferences to the default path.
    pub fn save(&self) -> VitrineResult<()> {
        self.save_to_path(&Self::default_path())
    }

    /// Save preferences to a specific path, creating parent directories as
    /// needed.
    pub fn save_to_path(&self, path: &Path) -> VitrineResult<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }
}

/// Payload path resolution for the shells.
/// Priority: explicit argument > preferences file > environment > None
/// (None means the bundled sample).
pub fn resolve_payload_path(
    explicit: Option<&Path>,
    prefs: &UserPrefs,
    config: &VitrineConfig,
) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Some(p) = &prefs.payload_path {
        return Some(PathBuf::from(p));
    }
    config.payload_path.as_ref().map(PathBuf::from)
}

/// Visible-card cap resolution.
/// Priority: preferences file > environment > the payload's own cap; None
/// falls through to the list's default.
pub fn resolve_max_visible(
    payload_cap: Option<usize>,
    prefs: &UserPrefs,
    config: &VitrineConfig,
) -> Option<usize> {
    prefs
        .max_visible
        .or(config.max_visible)
        .or(payload_cap)
}
