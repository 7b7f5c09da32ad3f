//! The `analyze` and `ranking` subcommands.

use chrono::Utc;
use storescout_core::{Config, Settings, StoreProfile};
use storescout_engine::{cache, explain, slow_day, Analyzer, BrandHeuristics};
use storescout_overpass::OverpassClient;

/// Run a full analysis and print the top picks.
///
/// With `use_cache`, a fresh (< 7 days) cache short-circuits the network
/// entirely; otherwise a fresh run is made and the cache overwritten.
pub async fn run(settings: &Settings, use_cache: bool) -> anyhow::Result<()> {
    let stores = fetch_ranked(settings, use_cache).await?;

    if stores.is_empty() {
        println!("No stores found. Try a larger radius (config set-radius).");
        return Ok(());
    }

    println!("Best options today:");
    for (position, store) in stores.iter().take(3).enumerate() {
        let reasons = explain(store).join(", ");
        println!(
            "{}. {} - score {} - {:.1} km - {}",
            position + 1,
            store.name,
            store.score,
            store.distance_km,
            reasons
        );
    }

    if slow_day(&stores) {
        println!();
        println!("Not worth going today: every store scored below 60.");
    }

    Ok(())
}

/// Print the full ranking, reusing the cache when possible.
pub async fn ranking(settings: &Settings) -> anyhow::Result<()> {
    let stores = fetch_ranked(settings, true).await?;

    if stores.is_empty() {
        println!("No analysis data. Run `storescout analyze` first.");
        return Ok(());
    }

    println!(
        "{:<4} {:<30} {:<16} {:>5} {:>8} {:>8} {:>7}",
        "#", "Store", "Type", "Score", "Dist", "Schools", "Rating"
    );
    for (position, store) in stores.iter().enumerate() {
        println!(
            "{:<4} {:<30} {:<16} {:>5} {:>6.1}km {:>8} {:>7.1}",
            position + 1,
            truncate(&store.name, 30),
            store.store_type.to_string(),
            store.score,
            store.distance_km,
            store.nearby_school_count,
            store.rating
        );
    }

    Ok(())
}

async fn fetch_ranked(settings: &Settings, use_cache: bool) -> anyhow::Result<Vec<StoreProfile>> {
    let config = Config::load(&settings.config_path);
    let cached = if use_cache {
        cache::load(&settings.cache_path, Utc::now())
    } else {
        None
    };
    let served_from_cache = cached.as_ref().is_some_and(|stores| !stores.is_empty());
    tracing::debug!(use_cache, served_from_cache, "starting analysis");

    let client = OverpassClient::new(
        &settings.overpass_url,
        settings.request_timeout_secs,
        &settings.user_agent,
    )?;
    let heuristics = BrandHeuristics::load(&settings.brands_path)?;
    let analyzer = Analyzer::new(client, heuristics, settings.inter_request_delay_ms);

    let stores = analyzer.analyze(&config, cached).await;

    // Only a fresh run refreshes the cache; replaying cached data must not
    // extend its lifetime.
    if !served_from_cache && !stores.is_empty() {
        cache::save(&settings.cache_path, &stores, Utc::now())?;
    }

    Ok(stores)
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
