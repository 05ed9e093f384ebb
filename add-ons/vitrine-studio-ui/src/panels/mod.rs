//! Embeddable egui panels for the Vitrine display components.
//!
//! Each panel owns its local state and renders with `vitrine_ui(ui)` once
//! per frame. Link actions go out through the vitrine-core bridge
//! (tokio mpsc); panels never open URLs themselves.

mod converter;
mod papers;

pub use converter::ConverterPanel;
pub use papers::PapersPanel;
