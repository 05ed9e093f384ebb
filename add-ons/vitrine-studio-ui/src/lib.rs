//! vitrine-studio-ui: egui shells for the Vitrine display panels.
//!
//! Panels embed in any eframe app; link actions travel over the
//! vitrine-core bridge (tokio mpsc) to whatever opens URLs.

pub mod config;
pub mod panels;

pub use config::StudioConfig;
pub use panels::{ConverterPanel, PapersPanel};
