//! Vitrine Studio — standalone egui window for the paper cards and the
//! currency converter.
//!
//! Run with: cargo run -p vitrine-studio-ui
//! Card actions open in the system browser; set VITRINE_OPEN_LINKS=false
//! to log dispatched links instead.

use eframe::egui;
use vitrine_core::{
    resolve_max_visible, resolve_payload_path, vitrine_link_channel, LinkKind, SessionPayload,
    UserPrefs, VitrineConfig,
};
use vitrine_studio_ui::{ConverterPanel, PapersPanel, StudioConfig};

fn main() -> eframe::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = VitrineConfig::from_env();
    let prefs = UserPrefs::load().unwrap_or_default();
    let studio_config = StudioConfig::load();

    let payload = match resolve_payload_path(None, &prefs, &config) {
        Some(path) => match SessionPayload::load_from_path(&path) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("payload {} unusable ({}); using bundled sample", path.display(), e);
                SessionPayload::sample()
            }
        },
        None => SessionPayload::sample(),
    };
    let max_visible = resolve_max_visible(payload.max_visible, &prefs, &config);

    let (tx, mut rx) = vitrine_link_channel(64);

    // Drain bridge messages and open each link externally.
    let open_links = config.open_links_enabled;
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        rt.block_on(async move {
            while let Some(request) = rx.recv().await {
                let action = match request.kind {
                    LinkKind::View => "view",
                    LinkKind::Download => "download",
                };
                if !open_links {
                    tracing::info!("link dispatch ({}): {}", action, request.url);
                } else if let Err(e) = webbrowser::open(&request.url) {
                    tracing::warn!("failed to open {} link {}: {}", action, request.url, e);
                }
            }
        });
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([studio_config.window_width, studio_config.window_height])
            .with_title("Vitrine Studio — Papers & Currency"),
        ..Default::default()
    };

    eframe::run_native(
        "Vitrine Studio",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if studio_config.theme_dark {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });

            let papers = PapersPanel::new()
                .with_records(payload.papers.clone(), max_visible)
                .with_extra_domains(&config.extra_download_domains)
                .with_summaries(studio_config.show_summaries)
                .with_bridge(tx.clone());
            let converter = payload
                .conversion
                .as_ref()
                .map(|c| ConverterPanel::new(c.request.clone(), c.result.clone()));

            Ok(Box::new(VitrineStudioApp::new(
                papers,
                converter,
                studio_config.converter_width,
            )))
        }),
    )
}

struct VitrineStudioApp {
    papers: PapersPanel,
    converter: Option<ConverterPanel>,
    converter_width: f32,
}

impl VitrineStudioApp {
    fn new(papers: PapersPanel, converter: Option<ConverterPanel>, converter_width: f32) -> Self {
        Self {
            papers,
            converter,
            converter_width,
        }
    }
}

impl eframe::App for VitrineStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(converter) = &mut self.converter {
            egui::SidePanel::right("converter_panel")
                .default_width(self.converter_width)
                .show(ctx, |ui| {
                    converter.vitrine_ui(ui);
                });
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            self.papers.vitrine_ui(ui);
        });
    }
}
