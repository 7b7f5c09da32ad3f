//! The `weights`, `config`, and `clear-cache` subcommands.
//!
//! Every edit path loads the config, applies the change, and saves it back;
//! out-of-range input is rejected here, at the boundary, before anything is
//! persisted.

use storescout_core::weights::FACTOR_NAMES;
use storescout_core::{Config, Location, Settings};
use storescout_engine::cache;

pub fn show_weights(settings: &Settings) {
    let config = Config::load(&settings.config_path);
    println!("Scoring weights (negative = penalty, positive = bonus):");
    for factor in FACTOR_NAMES {
        // The names come from FACTOR_NAMES, so the lookup cannot miss.
        let value = config.weights.get(factor).unwrap_or_default();
        println!("  {factor:<16} {value:>5}");
    }
}

pub fn set_weight(settings: &Settings, factor: &str, value: i32) -> anyhow::Result<()> {
    let mut config = Config::load(&settings.config_path);
    if !config.weights.set(factor, value) {
        anyhow::bail!(
            "unknown factor '{factor}'; expected one of: {}",
            FACTOR_NAMES.join(", ")
        );
    }
    config.save(&settings.config_path)?;
    println!("Weight {factor} set to {value}.");
    Ok(())
}

pub fn show(settings: &Settings) {
    let config = Config::load(&settings.config_path);
    println!(
        "Location: {:.4}, {:.4}",
        config.location.lat, config.location.lng
    );
    println!("Radius: {:.1} km", f64::from(config.radius_meters) / 1000.0);
    println!("Config file: {}", settings.config_path.display());
    println!("Cache file: {}", settings.cache_path.display());
    println!("Overpass endpoint: {}", settings.overpass_url);
}

pub fn set_location(settings: &Settings, lat: f64, lng: f64) -> anyhow::Result<()> {
    let mut config = Config::load(&settings.config_path);
    config.location = Location::new(lat, lng)?;
    config.save(&settings.config_path)?;
    println!("Location updated to {lat:.4}, {lng:.4}.");
    println!("Note: the result cache is not location-aware; run clear-cache.");
    Ok(())
}

pub fn set_radius(settings: &Settings, km: u32) -> anyhow::Result<()> {
    if km == 0 {
        anyhow::bail!("radius must be at least 1 km");
    }
    let Some(radius_meters) = km.checked_mul(1000) else {
        anyhow::bail!("radius of {km} km is too large");
    };
    let mut config = Config::load(&settings.config_path);
    config.radius_meters = radius_meters;
    config.save(&settings.config_path)?;
    println!("Radius updated to {km} km.");
    Ok(())
}

pub fn clear_cache(settings: &Settings) -> anyhow::Result<()> {
    cache::clear(&settings.cache_path)?;
    println!("Cache cleared.");
    Ok(())
}
