//! Paper results panel: bounded card list with view/download actions.

use egui::{Color32, RichText, Ui};
use vitrine_core::{
    papers_view_with_domains, try_dispatch, LinkRequest, LinkSender, PaperCard, PaperRecord,
    PapersView,
};

/// Paper result cards with their derived badges and actions. Records and
/// cap come from the caller; the panel only renders and dispatches links.
#[derive(Debug, Clone)]
pub struct PapersPanel {
    /// Records as supplied by the external search source.
    pub records: Vec<PaperRecord>,
    /// Caller's cap on visible cards; None means the default of ten.
    pub max_visible: Option<usize>,
    /// Open-repository domains for the download action.
    pub domains: Vec<String>,
    /// Render the summary paragraph under each card.
    pub show_summaries: bool,
    /// Optional sender for the open-link collaborator.
    sender: Option<LinkSender>,
}

impl Default for PapersPanel {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            max_visible: None,
            domains: vitrine_core::effective_domains(&[]),
            show_summaries: true,
            sender: None,
        }
    }
}

impl PapersPanel {
    /// Creates an empty panel with the built-in repository domains.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the records and visible cap for this render session.
    pub fn with_records(mut self, records: Vec<PaperRecord>, max_visible: Option<usize>) -> Self {
        self.records = records;
        self.max_visible = max_visible;
        self
    }

    /// Extends the recognized open-repository domains.
    pub fn with_extra_domains(mut self, extra: &[String]) -> Self {
        self.domains = vitrine_core::effective_domains(extra);
        self
    }

    /// Attaches a bridge sender so card actions reach the link collaborator.
    pub fn with_bridge(mut self, sender: LinkSender) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Toggles the summary paragraph on the cards.
    pub fn with_summaries(mut self, show: bool) -> Self {
        self.show_summaries = show;
        self
    }

    /// Renders the panel (egui immediate mode). Call each frame from your eframe app.
    pub fn vitrine_ui(&mut self, ui: &mut Ui) {
        ui.heading(RichText::new("Papers").color(Color32::from_rgb(100, 180, 255)));
        ui.separator();

        match papers_view_with_domains(&self.records, self.max_visible, &self.domains) {
            PapersView::Empty => {
                ui.group(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(12.0);
                        ui.label(RichText::new("No papers found").strong());
                        ui.label(
                            RichText::new("Try a broader query, or check back once results arrive.")
                                .small(),
                        );
                        ui.add_space(12.0);
                    });
                });
            }
            PapersView::List(cards) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for card in &cards {
                        self.paper_card_ui(ui, card);
                    }
                });
            }
        }
    }

    fn paper_card_ui(&self, ui: &mut Ui, card: &PaperCard) {
        ui.group(|ui| {
            ui.label(RichText::new(&card.title).strong());
            if let Some(author) = &card.author_badge {
                ui.label(
                    RichText::new(author)
                        .small()
                        .color(Color32::from_rgb(100, 180, 255)),
                );
            }
            if let Some(date) = &card.date_label {
                ui.label(RichText::new(date).small().weak());
            }
            if self.show_summaries && !card.summary.is_empty() {
                ui.label(RichText::new(&card.summary).small());
            }
            ui.horizontal(|ui| {
                if ui.button("View").clicked() {
                    self.vitrine_try_send(LinkRequest::view(&card.url));
                }
                if let Some(pdf) = &card.download_url {
                    if ui.button("Download PDF").clicked() {
                        self.vitrine_try_send(LinkRequest::download(pdf));
                    }
                }
            });
        });
        ui.add_space(4.0);
    }

    fn vitrine_try_send(&self, request: LinkRequest) {
        if let Some(ref tx) = self.sender {
            try_dispatch(tx, request);
        }
    }
}
