//! Bridge Dispatch Test: Verifies the panel → open-link channel
//!
//! This test validates that:
//! 1. View and download requests arrive in order with the right kind
//! 2. The download action carries the abs→pdf rewritten URL
//! 3. Dispatch degrades silently when the channel is full or closed
//!
//! Run with: `cargo test --test bridge_dispatch_test`

use vitrine_core::{
    download_url, try_dispatch, vitrine_link_channel, LinkKind, LinkRequest,
};

#[tokio::test]
async fn test_view_and_download_round_trip() {
    let (tx, mut rx) = vitrine_link_channel(8);

    try_dispatch(&tx, LinkRequest::view("https://arxiv.org/abs/1234"));
    try_dispatch(&tx, LinkRequest::download(download_url("https://arxiv.org/abs/1234")));

    let first = rx.recv().await.expect("view request");
    assert_eq!(first.kind, LinkKind::View);
    assert_eq!(first.url, "https://arxiv.org/abs/1234");

    let second = rx.recv().await.expect("download request");
    assert_eq!(second.kind, LinkKind::Download);
    assert_eq!(second.url, "https://arxiv.org/pdf/1234");

    println!("✓ Round trip: view then download, pdf rewrite carried through");
}

#[tokio::test]
async fn test_full_channel_drops_without_blocking() {
    let (tx, mut rx) = vitrine_link_channel(1);

    try_dispatch(&tx, LinkRequest::view("https://example.org/first"));
    // Capacity exhausted; this one is dropped, not queued.
    try_dispatch(&tx, LinkRequest::view("https://example.org/second"));

    let only = rx.recv().await.expect("first request");
    assert_eq!(only.url, "https://example.org/first");
    assert!(rx.try_recv().is_err());

    println!("✓ Full channel: overflow dropped, first request intact");
}

#[tokio::test]
async fn test_closed_channel_is_harmless() {
    let (tx, rx) = vitrine_link_channel(4);
    drop(rx);

    // No receiver left; the send must not panic or block.
    try_dispatch(&tx, LinkRequest::download("https://arxiv.org/pdf/1234"));

    println!("✓ Closed channel: dispatch dropped silently");
}
