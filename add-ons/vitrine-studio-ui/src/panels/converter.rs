//! Currency converter panel: gated amount input and the derived conversion.

use egui::{Color32, RichText, Ui};
use vitrine_core::{
    conversion_view, AmountInput, ConversionDisplay, ConversionRequest, ConversionResult,
    RateStrength,
};

/// The converter widget. Owns the editable amount; the request and the
/// (possibly pending) rate come from the caller.
#[derive(Debug, Clone)]
pub struct ConverterPanel {
    pub request: ConversionRequest,
    /// Local amount state, mutated only by this panel's edit handler.
    pub amount: AmountInput,
    /// Latest rate lookup outcome; None while the rate is still pending.
    pub result: Option<ConversionResult>,
}

impl ConverterPanel {
    /// Builds the panel from a caller-supplied request, seeding the amount
    /// field from the request's default.
    pub fn new(request: ConversionRequest, result: Option<ConversionResult>) -> Self {
        let amount = AmountInput::new(request.amount.as_deref().unwrap_or(""));
        Self {
            request,
            amount,
            result,
        }
    }

    /// Replaces the rate result (e.g. when the external lookup resolves).
    pub fn set_result(&mut self, result: Option<ConversionResult>) {
        self.result = result;
    }

    /// Renders the converter (egui immediate mode). Call each frame from your eframe app.
    pub fn vitrine_ui(&mut self, ui: &mut Ui) {
        ui.heading(
            RichText::new(format!(
                "{} → {}",
                self.request.from_currency, self.request.to_currency
            ))
            .color(Color32::from_rgb(100, 180, 255)),
        );
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Amount:");
            let mut candidate = self.amount.text().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut candidate)
                    .hint_text("0.00")
                    .desired_width(120.0),
            );
            if response.changed() {
                self.amount.apply_edit(&candidate);
            }
        });
        if let Some(error) = self.amount.error() {
            ui.label(RichText::new(error).small().color(Color32::RED));
        }
        ui.add_space(6.0);

        match conversion_view(self.amount.text(), self.result.as_ref()).display() {
            ConversionDisplay::Pending => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Fetching rate…");
                });
            }
            ConversionDisplay::EnterAmount => {
                ui.label(RichText::new("Enter a valid amount to convert.").weak());
            }
            ConversionDisplay::Converted {
                amount_label,
                unit_rate_label,
                strength,
            } => {
                ui.label(
                    RichText::new(format!("{} {}", amount_label, self.request.to_currency))
                        .strong()
                        .size(22.0),
                );
                ui.label(
                    RichText::new(format!(
                        "1 {} = {} {}",
                        self.request.from_currency, unit_rate_label, self.request.to_currency
                    ))
                    .small(),
                );
                let (label, color) = match strength {
                    RateStrength::Strong => ("strong", Color32::DARK_GREEN),
                    RateStrength::Weak => ("weak", Color32::RED),
                };
                ui.label(
                    RichText::new(format!("{} {}", self.request.from_currency, label))
                        .small()
                        .color(color),
                );
            }
        }
    }
}
