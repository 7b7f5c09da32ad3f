//! The `visits` subcommands.

use chrono::Utc;
use storescout_core::{history, Settings, Visit};

/// Recent visits shown by `visits history`.
const HISTORY_DISPLAY_LIMIT: usize = 20;

pub fn log(settings: &Settings, store: &str, found: bool) -> anyhow::Result<()> {
    history::append(
        &settings.history_path,
        Visit {
            store: store.to_string(),
            date: Utc::now(),
            found,
        },
    )?;
    println!(
        "Visit to {store} recorded ({}).",
        if found { "found" } else { "nothing" }
    );
    Ok(())
}

pub fn history(settings: &Settings) {
    let visits = history::load(&settings.history_path);
    if visits.is_empty() {
        println!("No visits recorded yet.");
        return;
    }

    let start = visits.len().saturating_sub(HISTORY_DISPLAY_LIMIT);
    for visit in &visits[start..] {
        println!(
            "{}  {}  {}",
            visit.date.format("%Y-%m-%d %H:%M"),
            if visit.found { "found " } else { "missed" },
            visit.store
        );
    }

    let stats = history::stats(&visits);
    println!();
    println!(
        "Total visits: {}, found: {} ({:.1}%)",
        stats.total, stats.found, stats.success_rate_pct
    );
}
