//! Example: Clean up a generated playlist
//!
//! Run with: cargo run --package pipeline --example clean_playlist
//!
//! This example shows how to:
//! 1. Assemble a playlist of recordings (as an upstream source would)
//! 2. Compose a cleanup pipeline
//! 3. Run it and inspect what survived

use std::time::Instant;

use entities::{Artist, Recording};
use pipeline::filters::*;
use pipeline::FilterPipeline;

fn demo_playlist() -> Vec<Recording> {
    let bowie = Artist::new().with_credit_id(956).with_name("David Bowie");
    let eno = Artist::new().with_credit_id(413).with_name("Brian Eno");

    vec![
        Recording::new("e02e5b93-9149-4cd4-a441-5e877b4a0b6f")
            .with_name("Heroes")
            .with_year(1977)
            .with_ranking(0.95)
            .with_artist(bowie.clone()),
        Recording::new("e02e5b93-9149-4cd4-a441-5e877b4a0b6f")
            .with_name("Heroes")
            .with_year(1977)
            .with_ranking(0.95)
            .with_artist(bowie.clone()),
        Recording::new("15b16efc-0b0c-4a9d-a1a9-0e2e46dbfa1f")
            .with_year(1979)
            .with_artist(eno.clone()),
        Recording::new("4bf6ab0c-cc54-4b8b-a5ee-2f3a83b34b7e")
            .with_name("Ashes to Ashes")
            .with_year(1980)
            .with_ranking(0.90)
            .with_artist(bowie.clone()),
        Recording::new("a97d5a1a-8c0e-42ab-9c71-ed3f5ba7a4f8")
            .with_name("Station to Station")
            .with_year(1976)
            .with_ranking(0.85)
            .with_artist(bowie.clone()),
        Recording::new("f23b4f6a-14f9-4b6d-b2c1-9c2b5a7f4e11")
            .with_name("St. Elmo's Fire")
            .with_year(1975)
            .with_ranking(0.80)
            .with_artist(eno.clone()),
        Recording::new("0c1f6a8e-9b1f-4a2f-8f2e-6a9d4c3b2a10")
            .with_name("New Killer Star")
            .with_year(2003)
            .with_ranking(0.60)
            .with_artist(bowie),
    ]
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("debug")
        .init();

    println!("=== Playlist Cleanup Example ===\n");

    let playlist = demo_playlist();
    println!("Input playlist: {} recordings", playlist.len());

    // The cleanup chain: drop broken metadata, dedupe, pin to an era,
    // then cap each artist at two tracks keeping their best-ranked.
    let pipeline = FilterPipeline::new()
        .add_element(EmptyMetadataFilter)
        .add_element(DuplicateRecordingFilter)
        .add_element(ConsecutiveRecordingFilter)
        .add_element(YearRangeFilter::new(1970, 1989, false))
        .add_element(ArtistCreditLimiter::new(2, true));

    let start = Instant::now();
    let cleaned = pipeline.process(playlist)?;
    println!("Filtered down to {} recordings in {:?}\n", cleaned.len(), start.elapsed());

    for recording in &cleaned {
        let artist = recording
            .artist
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or("<unknown artist>");
        let name = recording.name.as_deref().unwrap_or("<unnamed>");
        println!(
            "  {} - {} ({})",
            artist,
            name,
            recording.year.map_or("----".to_string(), |y| y.to_string())
        );
    }

    Ok(())
}
