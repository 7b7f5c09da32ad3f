//! The `hotlist` subcommands.

use storescout_core::Settings;
use storescout_hotlist::{format_entry, load_catalogue, SearchFilters};

/// At most this many entries are printed per listing.
const DISPLAY_LIMIT: usize = 50;

pub fn list(settings: &Settings, filters: &SearchFilters) {
    search(settings, "", filters);
}

pub fn search(settings: &Settings, query: &str, filters: &SearchFilters) {
    let entries = load_catalogue(&settings.hotlist_path);
    if entries.is_empty() {
        println!("No hotlist found at {}.", settings.hotlist_path.display());
        return;
    }

    let results = storescout_hotlist::search(&entries, query, filters);
    if results.is_empty() {
        println!("No matches.");
        return;
    }

    for entry in results.iter().take(DISPLAY_LIMIT) {
        println!("{}", format_entry(entry));
    }
    if results.len() > DISPLAY_LIMIT {
        println!("... showing first {DISPLAY_LIMIT} of {}", results.len());
    }
}

pub fn stats(settings: &Settings) {
    let entries = load_catalogue(&settings.hotlist_path);
    if entries.is_empty() {
        println!("No hotlist found at {}.", settings.hotlist_path.display());
        return;
    }

    let s = storescout_hotlist::stats(&entries);
    println!("Total castings: {}", s.total);
    println!("JDM: {}", s.jdm);
    println!("Premium: {}", s.premium);
    println!("Muscle: {}", s.muscle);
    println!("Treasure Hunts: {}", s.treasure_hunts);
    println!("Super Treasure Hunts: {}", s.super_treasure_hunts);
    println!();
    println!("Top brands:");
    for (brand, count) in &s.top_brands {
        println!("  {brand}: {count}");
    }
}
