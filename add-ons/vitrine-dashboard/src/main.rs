//! **Vitrine Dashboard** — `vitrine session` prints the paper cards and the
//! conversion state of a session payload as terminal tables.
//!
//! ## Sections
//!
//! 1. **Papers** — bounded card list (author badge, date, download link)
//! 2. **Conversion** — amount state, rate, converted value, strength
//!
//! ## Usage
//!
//! ```text
//! vitrine session [path]  — full report from a payload file (default)
//! vitrine papers [path]   — papers table only
//! vitrine convert [path]  — conversion panel only
//! vitrine --help          — print usage
//! ```
//!
//! Without a path the payload comes from vitrine_prefs.toml,
//! VITRINE_PAYLOAD_PATH, or the bundled sample, in that order.

use chrono::Utc;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::path::Path;
use vitrine_core::{
    conversion_view, papers_view_with_domains, resolve_max_visible, resolve_payload_path,
    AmountState, ConversionDisplay, ConversionScenario, PapersView, RateStrength, SessionPayload,
    UserPrefs, VitrineConfig,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    dotenvy::dotenv().ok();
    let args: Vec<String> = std::env::args().collect();
    let sub = args.get(1).map(|s| s.as_str()).unwrap_or("session");

    match sub {
        "session" => {
            if let Err(e) = run_session(args.get(2)) {
                eprintln!("vitrine {}: {}", sub, e);
                std::process::exit(1);
            }
        }
        "papers" => {
            if let Err(e) = run_papers(args.get(2)) {
                eprintln!("vitrine {}: {}", sub, e);
                std::process::exit(1);
            }
        }
        "convert" => {
            if let Err(e) = run_convert(args.get(2)) {
                eprintln!("vitrine {}: {}", sub, e);
                std::process::exit(1);
            }
        }
        "--help" | "-h" | "help" => {
            println!("Vitrine Dashboard v{}", VERSION);
            println!();
            println!("Usage: vitrine [COMMAND] [payload.json]");
            println!();
            println!("Commands:");
            println!("  session  Papers and conversion report (default)");
            println!("  papers   Paper cards table only");
            println!("  convert  Conversion panel only");
            println!("  help     Print this help message");
            println!();
            println!("Payload resolution: explicit path, then vitrine_prefs.toml,");
            println!("then VITRINE_PAYLOAD_PATH, then the bundled sample session.");
        }
        other => {
            eprintln!(
                "Unknown subcommand '{}'. Use: vitrine session | vitrine papers | vitrine convert | vitrine --help",
                other
            );
            std::process::exit(1);
        }
    }
}

struct SessionContext {
    payload: SessionPayload,
    max_visible: Option<usize>,
    domains: Vec<String>,
}

fn load_session(explicit: Option<&String>) -> Result<SessionContext, String> {
    let config = VitrineConfig::from_env();
    let prefs = UserPrefs::load().unwrap_or_default();

    let payload = match resolve_payload_path(explicit.map(|s| Path::new(s.as_str())), &prefs, &config)
    {
        Some(path) => SessionPayload::load_from_path(&path)
            .map_err(|e| format!("Cannot load payload {}: {}", path.display(), e))?,
        None => SessionPayload::sample(),
    };

    let max_visible = resolve_max_visible(payload.max_visible, &prefs, &config);
    let domains = vitrine_core::effective_domains(&config.extra_download_domains);

    Ok(SessionContext {
        payload,
        max_visible,
        domains,
    })
}

fn run_session(explicit: Option<&String>) -> Result<(), String> {
    let session = load_session(explicit)?;

    let now = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    println!();
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║   VITRINE DASHBOARD v{}  —  Session Report                          ║", VERSION);
    println!("║   {}                                             ║", now);
    println!("╚══════════════════════════════════════════════════════════════════════╝");
    println!();

    print_papers(&session);
    print_conversion(session.payload.conversion.as_ref());

    println!("  Run `vitrine session` at any time to refresh this report.");
    println!();
    Ok(())
}

fn run_papers(explicit: Option<&String>) -> Result<(), String> {
    let session = load_session(explicit)?;
    println!();
    print_papers(&session);
    Ok(())
}

fn run_convert(explicit: Option<&String>) -> Result<(), String> {
    let session = load_session(explicit)?;
    println!();
    print_conversion(session.payload.conversion.as_ref());
    Ok(())
}

fn print_papers(session: &SessionContext) {
    println!("  ┌─ PAPERS ─ Bounded Card List ─────────────────────────────────────┐");
    println!();

    let view = papers_view_with_domains(&session.payload.papers, session.max_visible, &session.domains);
    let cards = match &view {
        PapersView::Empty => {
            println!("    ○ No papers in this session. Supply a payload with results.");
            println!();
            return;
        }
        PapersView::List(cards) => cards,
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#")
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Authors").add_attribute(Attribute::Bold),
            Cell::new("Published").add_attribute(Attribute::Bold),
            Cell::new("Download")
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold),
        ]);

    for (i, card) in cards.iter().enumerate() {
        let authors = card.author_badge.as_deref().unwrap_or("—");
        let published = card.date_label.as_deref().unwrap_or("—");
        let (download_text, download_color) = if card.download_url.is_some() {
            ("● PDF", Color::Green)
        } else {
            ("—", Color::DarkGrey)
        };

        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(&card.title),
            Cell::new(authors),
            Cell::new(published),
            Cell::new(download_text)
                .set_alignment(CellAlignment::Center)
                .fg(download_color),
        ]);
    }

    println!("{table}");
    let total = session.payload.papers.len();
    if cards.len() < total {
        println!("    Showing {} of {} results.", cards.len(), total);
    }
    println!();
}

fn print_conversion(scenario: Option<&ConversionScenario>) {
    println!("  ┌─ CONVERSION ─ Currency Widget State ─────────────────────────────┐");
    println!();

    let Some(scenario) = scenario else {
        println!("    ○ No conversion in this session.");
        println!();
        return;
    };

    let amount_text = scenario.request.amount.as_deref().unwrap_or("");
    let view = conversion_view(amount_text, scenario.result.as_ref());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Pair").add_attribute(Attribute::Bold),
            Cell::new("Amount")
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
            Cell::new("Unit Rate")
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
            Cell::new("Converted")
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
            Cell::new("Indicator")
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold),
        ]);

    let pair = format!(
        "{} → {}",
        scenario.request.from_currency, scenario.request.to_currency
    );
    let amount_cell = match view_amount_label(amount_text) {
        Some(label) => Cell::new(label).set_alignment(CellAlignment::Right),
        None => Cell::new("(empty)")
            .set_alignment(CellAlignment::Right)
            .fg(Color::DarkGrey),
    };

    let (rate_cell, converted_cell, indicator_cell) = match view.display() {
        ConversionDisplay::Pending => (
            Cell::new("… pending").fg(Color::Yellow),
            Cell::new("—").set_alignment(CellAlignment::Right),
            Cell::new("—").set_alignment(CellAlignment::Center),
        ),
        ConversionDisplay::EnterAmount => (
            Cell::new(format!("{:.4}", view.rate.unwrap_or_default()))
                .set_alignment(CellAlignment::Right),
            Cell::new("enter a valid amount")
                .set_alignment(CellAlignment::Right)
                .fg(Color::Yellow),
            Cell::new("—").set_alignment(CellAlignment::Center),
        ),
        ConversionDisplay::Converted {
            amount_label,
            unit_rate_label,
            strength,
        } => {
            let (text, color) = match strength {
                RateStrength::Strong => ("▲ strong", Color::Green),
                RateStrength::Weak => ("▼ weak", Color::Red),
            };
            (
                Cell::new(unit_rate_label).set_alignment(CellAlignment::Right),
                Cell::new(format!(
                    "{} {}",
                    amount_label, scenario.request.to_currency
                ))
                .set_alignment(CellAlignment::Right)
                .fg(Color::Green),
                Cell::new(text)
                    .set_alignment(CellAlignment::Center)
                    .fg(color),
            )
        }
    };

    table.add_row(vec![
        Cell::new(pair),
        amount_cell,
        rate_cell,
        converted_cell,
        indicator_cell,
    ]);

    println!("{table}");
    println!();
}

/// Amount column text: the accepted text, its eligibility glyph when it is
/// unusable, or None for an empty field.
fn view_amount_label(amount_text: &str) -> Option<String> {
    match vitrine_core::classify_amount(amount_text) {
        AmountState::Empty => None,
        AmountState::ValidNumeric(_) => Some(amount_text.to_string()),
        AmountState::Invalid => Some(format!("{} ✗", amount_text)),
    }
}
