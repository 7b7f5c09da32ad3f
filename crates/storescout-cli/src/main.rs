//! `storescout`: find the calmest store for today's collectible hunt.

use clap::{Args, Parser, Subcommand};
use storescout_core::settings::load_settings;

mod analyze;
mod configure;
mod hotlist;
mod visits;

#[derive(Debug, Parser)]
#[command(name = "storescout")]
#[command(about = "Scores nearby stores for calm collectible hunting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyse stores around the configured location and show the top picks.
    Analyze {
        /// Ignore the result cache and query fresh data.
        #[arg(long)]
        no_cache: bool,
    },
    /// Show the full ranking from the last analysis.
    Ranking,
    /// Browse the collectible hotlist.
    Hotlist {
        #[command(subcommand)]
        command: HotlistCommands,
    },
    /// Record and review store visits.
    Visits {
        #[command(subcommand)]
        command: VisitCommands,
    },
    /// Show or adjust scoring weights.
    Weights {
        #[command(subcommand)]
        command: WeightCommands,
    },
    /// Show or change location and search radius.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Delete the result cache.
    ClearCache,
}

#[derive(Debug, Args, Default)]
struct HotlistFilterArgs {
    /// Only JDM castings.
    #[arg(long)]
    jdm: bool,
    /// Only premium marques.
    #[arg(long)]
    premium: bool,
    /// Only Treasure Hunts (includes STH).
    #[arg(long)]
    th: bool,
    /// Only Super Treasure Hunts.
    #[arg(long)]
    sth: bool,
    /// Only a specific manufacturer.
    #[arg(long)]
    brand: Option<String>,
}

#[derive(Debug, Subcommand)]
enum HotlistCommands {
    /// List catalogue entries, optionally filtered.
    List {
        #[command(flatten)]
        filters: HotlistFilterArgs,
    },
    /// Search the catalogue by name.
    Search {
        query: String,
        #[command(flatten)]
        filters: HotlistFilterArgs,
    },
    /// Catalogue statistics.
    Stats,
}

/// Exactly one outcome flag must be given; a visit is never recorded with an
/// implicit result.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct VisitOutcome {
    /// Something from the hotlist was found.
    #[arg(long)]
    found: bool,
    /// Nothing was found.
    #[arg(long)]
    not_found: bool,
}

#[derive(Debug, Subcommand)]
enum VisitCommands {
    /// Record a store visit.
    Log {
        /// Store name as shown in the ranking.
        store: String,
        #[command(flatten)]
        outcome: VisitOutcome,
    },
    /// Show recent visits and the overall success rate.
    History,
}

#[derive(Debug, Subcommand)]
enum WeightCommands {
    /// Print the current weight set.
    Show,
    /// Set one factor, e.g. `weights set pharmacy_bonus 25`.
    Set { factor: String, value: i32 },
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Print location, radius, and file paths.
    Show,
    /// Change the search origin.
    SetLocation { lat: f64, lng: f64 },
    /// Change the search radius, in kilometres.
    SetRadius { km: u32 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = load_settings()?;

    match cli.command {
        Commands::Analyze { no_cache } => analyze::run(&settings, !no_cache).await?,
        Commands::Ranking => analyze::ranking(&settings).await?,
        Commands::Hotlist { command } => match command {
            HotlistCommands::List { filters } => hotlist::list(&settings, &filters.into()),
            HotlistCommands::Search { query, filters } => {
                hotlist::search(&settings, &query, &filters.into());
            }
            HotlistCommands::Stats => hotlist::stats(&settings),
        },
        Commands::Visits { command } => match command {
            VisitCommands::Log { store, outcome } => {
                visits::log(&settings, &store, outcome.found)?;
            }
            VisitCommands::History => visits::history(&settings),
        },
        Commands::Weights { command } => match command {
            WeightCommands::Show => configure::show_weights(&settings),
            WeightCommands::Set { factor, value } => {
                configure::set_weight(&settings, &factor, value)?;
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show => configure::show(&settings),
            ConfigCommands::SetLocation { lat, lng } => {
                configure::set_location(&settings, lat, lng)?;
            }
            ConfigCommands::SetRadius { km } => configure::set_radius(&settings, km)?,
        },
        Commands::ClearCache => configure::clear_cache(&settings)?,
    }

    Ok(())
}

impl From<HotlistFilterArgs> for storescout_hotlist::SearchFilters {
    fn from(args: HotlistFilterArgs) -> Self {
        Self {
            jdm: args.jdm,
            premium: args.premium,
            treasure_hunt: args.th,
            super_treasure_hunt: args.sth,
            brand: args.brand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_accepts_no_cache_flag() {
        let cli = Cli::try_parse_from(["storescout", "analyze", "--no-cache"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyze { no_cache: true }));
    }

    #[test]
    fn visit_log_rejects_found_and_not_found_together() {
        let result = Cli::try_parse_from([
            "storescout", "visits", "log", "Soriana", "--found", "--not-found",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn visit_log_requires_an_outcome_flag() {
        let result = Cli::try_parse_from(["storescout", "visits", "log", "Soriana"]);
        assert!(result.is_err(), "an implicit outcome must not be accepted");
    }

    #[test]
    fn visit_log_records_a_miss_only_when_asked() {
        let cli =
            Cli::try_parse_from(["storescout", "visits", "log", "Soriana", "--not-found"])
                .unwrap();
        match cli.command {
            Commands::Visits {
                command: VisitCommands::Log { store, outcome },
            } => {
                assert_eq!(store, "Soriana");
                assert!(!outcome.found);
                assert!(outcome.not_found);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn hotlist_search_parses_filters() {
        let cli = Cli::try_parse_from([
            "storescout", "hotlist", "search", "skyline", "--jdm", "--th",
        ])
        .unwrap();
        match cli.command {
            Commands::Hotlist {
                command: HotlistCommands::Search { query, filters },
            } => {
                assert_eq!(query, "skyline");
                assert!(filters.jdm);
                assert!(filters.th);
                assert!(!filters.sth);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn weights_set_parses_negative_values() {
        let cli =
            Cli::try_parse_from(["storescout", "weights", "set", "nearby_schools", "--", "-20"])
                .unwrap();
        match cli.command {
            Commands::Weights {
                command: WeightCommands::Set { factor, value },
            } => {
                assert_eq!(factor, "nearby_schools");
                assert_eq!(value, -20);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}
