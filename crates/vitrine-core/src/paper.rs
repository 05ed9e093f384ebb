//! Paper result cards: records, the bounded list view, and per-card derivations.
//!
//! Everything here is a pure function of the supplied records; the only
//! side effects (opening links) happen downstream via the link bridge.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::format::{format_long_date, parse_flexible_date};

/// Number of cards shown when the caller does not cap the list.
pub const DEFAULT_MAX_VISIBLE: usize = 10;

/// Marker appended when an author list is truncated to its first two names.
pub const AUTHOR_TRUNCATION_MARKER: &str = "et al.";

/// Hosts recognized as open repositories; matched case-insensitively as
/// substrings of the URL host. Extend at runtime via `effective_domains`.
pub const OPEN_REPOSITORY_DOMAINS: &[&str] = &["arxiv.org"];

/// A single academic paper as supplied by the external search source.
/// Immutable; identity is the `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    /// Absolute URL of the paper's landing page.
    pub url: String,
    /// Semicolon-delimited author names, when the source provides them.
    #[serde(default)]
    pub author: Option<String>,
    /// ISO-ish date string; rendered best-effort, never rejected.
    #[serde(default, alias = "publishedDate")]
    pub published_date: Option<String>,
    #[serde(default)]
    pub summary: String,
}

/// Fully derived card, ready for any renderer (egui panel, terminal table).
#[derive(Debug, Clone, PartialEq)]
pub struct PaperCard {
    pub title: String,
    pub url: String,
    /// Truncated author line; None when the record has no author.
    pub author_badge: Option<String>,
    /// "Month Day, Year" when the date parses, the raw string otherwise.
    pub date_label: Option<String>,
    pub summary: String,
    /// Present only for open-repository papers; already rewritten to the
    /// direct-download form.
    pub download_url: Option<String>,
}

/// The papers list as presented: an explicit empty state, or an ordered
/// bounded prefix of the input. An empty `List` means the caller asked for
/// zero visible cards, not that there were no results.
#[derive(Debug, Clone, PartialEq)]
pub enum PapersView {
    Empty,
    List(Vec<PaperCard>),
}

impl PapersView {
    /// True for the no-results state.
    pub fn is_empty_state(&self) -> bool {
        matches!(self, PapersView::Empty)
    }

    /// Visible cards; empty slice for the empty state.
    pub fn cards(&self) -> &[PaperCard] {
        match self {
            PapersView::Empty => &[],
            PapersView::List(cards) => cards,
        }
    }
}

/// Derives the bounded papers view with the built-in repository domains.
pub fn papers_view(records: &[PaperRecord], max_visible: Option<usize>) -> PapersView {
    papers_view_with_domains(records, max_visible, &effective_domains(&[]))
}

/// Derives the bounded papers view. Order is preserved; at most
/// `max_visible` (default 10) cards are produced. An empty input yields
/// the distinct `Empty` state.
pub fn papers_view_with_domains(
    records: &[PaperRecord],
    max_visible: Option<usize>,
    domains: &[String],
) -> PapersView {
    if records.is_empty() {
        return PapersView::Empty;
    }
    let cap = max_visible.unwrap_or(DEFAULT_MAX_VISIBLE);
    let cards = records
        .iter()
        .take(cap)
        .map(|r| derive_card(r, domains))
        .collect();
    PapersView::List(cards)
}

/// Built-in open-repository domains plus any runtime extensions, lowercased.
pub fn effective_domains(extra: &[String]) -> Vec<String> {
    OPEN_REPOSITORY_DOMAINS
        .iter()
        .map(|d| d.to_string())
        .chain(extra.iter().map(|d| d.trim().to_lowercase()))
        .filter(|d| !d.is_empty())
        .collect()
}

fn derive_card(record: &PaperRecord, domains: &[String]) -> PaperCard {
    let author_badge = record
        .author
        .as_deref()
        .map(formatted_author)
        .filter(|s| !s.is_empty());
    let date_label = record.published_date.as_deref().map(formatted_date);
    let download =
        is_downloadable(&record.url, domains).then(|| download_url(&record.url));

    PaperCard {
        title: record.title.clone(),
        url: record.url.clone(),
        author_badge,
        date_label,
        summary: record.summary.clone(),
        download_url: download,
    }
}

/// Author line for a card: semicolon-split, trimmed, empty segments dropped.
/// Up to two names are joined with ", "; longer lists keep the first two and
/// append the truncation marker.
pub fn formatted_author(author: &str) -> String {
    let names: Vec<&str> = author
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if names.len() <= 2 {
        names.join(", ")
    } else {
        format!("{} {}", names[..2].join(", "), AUTHOR_TRUNCATION_MARKER)
    }
}

/// Date label for a card: "Month Day, Year" when the string parses as a
/// date, otherwise the raw string unchanged.
pub fn formatted_date(raw: &str) -> String {
    match parse_flexible_date(raw) {
        Some(d) => format_long_date(d),
        None => raw.to_string(),
    }
}

/// True when the URL's host contains one of the open-repository domains
/// (case-insensitive). Unparseable URLs are never downloadable.
pub fn is_downloadable(url: &str, domains: &[String]) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_lowercase();
    domains.iter().any(|d| host.contains(d.as_str()))
}

/// Rewrites an abstract-page URL to its direct-download form by replacing
/// the first `/abs/` path segment with `/pdf/`. URLs without that segment
/// (or that fail to parse) come back unchanged.
pub fn download_url(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    let path = parsed.path();
    if !path.contains("/abs/") {
        return url.to_string();
    }
    let rewritten = path.replacen("/abs/", "/pdf/", 1);
    parsed.set_path(&rewritten);
    parsed.to_string()
}
