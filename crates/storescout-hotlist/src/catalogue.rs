//! Catalogue persistence, search, and statistics.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::types::{HotlistEntry, HotlistError, HotlistStats, SearchFilters};

/// Number of brands reported by [`stats`].
const TOP_BRAND_COUNT: usize = 10;

#[derive(Debug, Serialize, Deserialize)]
struct HotlistFile {
    generated_at: DateTime<Utc>,
    total_cars: usize,
    cars: Vec<HotlistEntry>,
}

/// Load the catalogue; a missing or corrupt file behaves as empty.
///
/// Entries whose brand is unset are enriched via [`classify`], so older
/// catalogue files without classification flags stay searchable.
#[must_use]
pub fn load_catalogue(path: &Path) -> Vec<HotlistEntry> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    let file: HotlistFile = match serde_json::from_str(&content) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "hotlist file unreadable; treating as empty");
            return Vec::new();
        }
    };

    file.cars
        .into_iter()
        .map(|mut entry| {
            if entry.brand == "Unknown" {
                let c = classify(&entry.name);
                entry.brand = c.brand;
                entry.is_jdm = entry.is_jdm || c.is_jdm;
                entry.is_premium = entry.is_premium || c.is_premium;
                entry.is_muscle = entry.is_muscle || c.is_muscle;
            }
            entry
        })
        .collect()
}

/// Persist the catalogue wholesale.
///
/// # Errors
///
/// Returns `HotlistError` when serialization or the file write fails.
pub fn save_catalogue(path: &Path, entries: &[HotlistEntry]) -> Result<(), HotlistError> {
    let file = HotlistFile {
        generated_at: Utc::now(),
        total_cars: entries.len(),
        cars: entries.to_vec(),
    };
    let json = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, json).map_err(|e| HotlistError::Write {
        path: path.display().to_string(),
        source: e,
    })
}

/// Search by name substring (case-insensitive), then apply the filter
/// conjunction. An empty query matches every entry.
#[must_use]
pub fn search<'a>(
    entries: &'a [HotlistEntry],
    query: &str,
    filters: &SearchFilters,
) -> Vec<&'a HotlistEntry> {
    let query_lower = query.to_lowercase();

    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&query_lower))
        .filter(|entry| !filters.jdm || entry.is_jdm)
        .filter(|entry| !filters.premium || entry.is_premium)
        .filter(|entry| !filters.treasure_hunt || entry.is_th || entry.is_sth)
        .filter(|entry| !filters.super_treasure_hunt || entry.is_sth)
        .filter(|entry| {
            filters
                .brand
                .as_ref()
                .is_none_or(|brand| entry.brand.eq_ignore_ascii_case(brand))
        })
        .collect()
}

/// Aggregate statistics over the catalogue.
#[must_use]
pub fn stats(entries: &[HotlistEntry]) -> HotlistStats {
    let mut brand_counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *brand_counts.entry(entry.brand.as_str()).or_default() += 1;
    }

    let mut top_brands: Vec<(String, usize)> = brand_counts
        .into_iter()
        .map(|(brand, count)| (brand.to_string(), count))
        .collect();
    // Count descending, name ascending for a stable report.
    top_brands.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_brands.truncate(TOP_BRAND_COUNT);

    HotlistStats {
        total: entries.len(),
        jdm: entries.iter().filter(|e| e.is_jdm).count(),
        premium: entries.iter().filter(|e| e.is_premium).count(),
        muscle: entries.iter().filter(|e| e.is_muscle).count(),
        treasure_hunts: entries.iter().filter(|e| e.is_th).count(),
        super_treasure_hunts: entries.iter().filter(|e| e.is_sth).count(),
        top_brands,
    }
}

/// One-line display form: number, series, name, and flag tags.
#[must_use]
pub fn format_entry(entry: &HotlistEntry) -> String {
    let mut tags = Vec::new();
    if entry.is_sth {
        tags.push("STH");
    } else if entry.is_th {
        tags.push("TH");
    }
    if entry.is_jdm {
        tags.push("JDM");
    }
    if entry.is_premium {
        tags.push("Premium");
    }
    if entry.is_muscle {
        tags.push("Muscle");
    }

    if tags.is_empty() {
        format!("{} {} {}", entry.number, entry.series, entry.name)
    } else {
        format!(
            "{} {} {} [{}]",
            entry.number,
            entry.series,
            entry.name,
            tags.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, brand: &str) -> HotlistEntry {
        let c = classify(name);
        HotlistEntry {
            id: format!("2025-{name}"),
            number: "1/250".to_string(),
            name: name.to_string(),
            series: "HW Test".to_string(),
            year: 2025,
            brand: brand.to_string(),
            is_jdm: c.is_jdm,
            is_premium: c.is_premium,
            is_muscle: c.is_muscle,
            is_th: false,
            is_sth: false,
        }
    }

    fn sample_entries() -> Vec<HotlistEntry> {
        let mut skyline = entry("Nissan Skyline GT-R", "Nissan");
        skyline.is_th = true;
        let mut porsche = entry("Porsche 917", "Porsche");
        porsche.is_sth = true;
        vec![
            skyline,
            porsche,
            entry("'69 Camaro", "Chevrolet"),
            entry("Twin Mill", "Unknown"),
        ]
    }

    #[test]
    fn missing_catalogue_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_catalogue(&dir.path().join("none.json")).is_empty());
    }

    #[test]
    fn corrupt_catalogue_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotlist.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(load_catalogue(&path).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotlist.json");

        save_catalogue(&path, &sample_entries()).unwrap();
        let loaded = load_catalogue(&path);

        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded[0].name, "Nissan Skyline GT-R");
        assert!(loaded[0].is_th);
    }

    #[test]
    fn load_enriches_entries_without_brand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotlist.json");
        // A minimal file as an older pipeline would write it: no flags.
        std::fs::write(
            &path,
            r#"{
                "generated_at": "2025-06-01T00:00:00Z",
                "total_cars": 1,
                "cars": [{
                    "id": "2025-1",
                    "number": "1/250",
                    "name": "Mazda RX-7",
                    "series": "HW J-Imports",
                    "year": 2025
                }]
            }"#,
        )
        .unwrap();

        let loaded = load_catalogue(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].brand, "Mazda");
        assert!(loaded[0].is_jdm);
    }

    #[test]
    fn search_matches_name_substring_case_insensitively() {
        let entries = sample_entries();
        let results = search(&entries, "skyline", &SearchFilters::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Nissan Skyline GT-R");
    }

    #[test]
    fn empty_query_matches_everything() {
        let entries = sample_entries();
        assert_eq!(search(&entries, "", &SearchFilters::default()).len(), 4);
    }

    #[test]
    fn jdm_filter_narrows_results() {
        let entries = sample_entries();
        let filters = SearchFilters {
            jdm: true,
            ..SearchFilters::default()
        };
        let results = search(&entries, "", &filters);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_jdm);
    }

    #[test]
    fn treasure_hunt_filter_includes_sth() {
        let entries = sample_entries();
        let filters = SearchFilters {
            treasure_hunt: true,
            ..SearchFilters::default()
        };
        assert_eq!(search(&entries, "", &filters).len(), 2, "TH filter spans TH and STH");

        let sth_only = SearchFilters {
            super_treasure_hunt: true,
            ..SearchFilters::default()
        };
        let results = search(&entries, "", &sth_only);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Porsche 917");
    }

    #[test]
    fn brand_filter_is_case_insensitive() {
        let entries = sample_entries();
        let filters = SearchFilters {
            brand: Some("chevrolet".to_string()),
            ..SearchFilters::default()
        };
        let results = search(&entries, "", &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "'69 Camaro");
    }

    #[test]
    fn stats_counts_flags_and_ranks_brands() {
        let entries = sample_entries();
        let s = stats(&entries);
        assert_eq!(s.total, 4);
        assert_eq!(s.jdm, 1);
        assert_eq!(s.premium, 1);
        assert_eq!(s.muscle, 1);
        assert_eq!(s.treasure_hunts, 1);
        assert_eq!(s.super_treasure_hunts, 1);
        assert_eq!(s.top_brands.len(), 4);
        // All brands count 1; ties break alphabetically.
        assert_eq!(s.top_brands[0].0, "Chevrolet");
    }

    #[test]
    fn format_entry_includes_flag_tags() {
        let entries = sample_entries();
        let line = format_entry(&entries[0]);
        assert!(line.contains("Nissan Skyline GT-R"));
        assert!(line.contains("TH"));
        assert!(line.contains("JDM"));

        let plain = format_entry(&entries[3]);
        assert!(!plain.contains('['));
    }
}
