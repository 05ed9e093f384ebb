//! Studio UI config: bundled default via include_str! (runs with no external files).

use serde::Deserialize;

/// Bundled default config so the app runs with no external files. Overridden by local file if present.
const DEFAULT_UI_CONFIG: &str = include_str!("../assets/ui_config.json");

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StudioConfig {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub theme_dark: bool,
    #[serde(default = "default_true")]
    pub show_summaries: bool,
    #[serde(default = "default_converter_width")]
    pub converter_width: f32,
}

fn default_window_width() -> f32 {
    980.0
}
fn default_window_height() -> f32 {
    660.0
}
fn default_converter_width() -> f32 {
    280.0
}
fn default_true() -> bool {
    true
}

impl StudioConfig {
    /// Load config: local file (relative to manifest or current_dir) if present, else bundled default.
    pub fn load() -> Self {
        let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("ui_config.json");
        let from_cwd = std::env::current_dir().ok().map(|p| {
            p.join("add-ons")
                .join("vitrine-studio-ui")
                .join("assets")
                .join("ui_config.json")
        });

        let on_disk = std::iter::once(manifest)
            .chain(from_cwd)
            .find(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(p).ok());

        let raw = on_disk.unwrap_or_else(|| DEFAULT_UI_CONFIG.to_string());
        serde_json::from_str(&raw).unwrap_or_default()
    }
}
