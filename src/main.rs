//! Star Diplomacy - ledger report
//!
//! Replays a scenario file into one player's diplomacy ledger and prints how
//! that player sees everyone else.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use star_diplomacy::core::config::{config, set_config, DiplomacyConfig};
use star_diplomacy::core::error::Result;
use star_diplomacy::render::{collect_relation_rows, describe_entry, Palette};
use star_diplomacy::scenario::Scenario;

/// Print the diplomatic standing recorded in a scenario
#[derive(Parser, Debug)]
#[command(name = "star-diplomacy")]
#[command(about = "Replay diplomatic events and report relations")]
struct Args {
    /// Scenario TOML file
    scenario: PathBuf,

    /// Diplomacy config TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the ledger and relation rows as JSON
    #[arg(long)]
    json: bool,

    /// List every recorded event under its relation row
    #[arg(long)]
    entries: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("star_diplomacy=info")),
        )
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let loaded = DiplomacyConfig::load(path)?;
        if set_config(loaded).is_err() {
            tracing::warn!("Config already initialized, ignoring {:?}", path);
        }
    }
    let config = config();

    let palette = match &config.palette_path {
        Some(path) => Palette::load(path)?,
        None => Palette::default(),
    };

    let scenario = Scenario::load(&args.scenario)?;
    tracing::info!(
        "Loaded scenario {:?}: {} events for player {}",
        args.scenario,
        scenario.events.len(),
        scenario.owner
    );

    let ledger = if config.expire_bonuses {
        scenario.build_expired_ledger()
    } else {
        scenario.build_ledger()
    };

    let mut rows = Vec::new();
    collect_relation_rows(&ledger, &palette, &mut rows);

    if args.json {
        let report = serde_json::json!({
            "turn": scenario.current_turn,
            "ledger": ledger,
            "relations": rows,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Diplomacy of player {} (turn {}) ===", scenario.owner, scenario.current_turn);
    println!("{:<8} {:>9} {:<10} {:<16} {}", "Player", "Sentiment", "Liking", "Relation", "Notes");
    for row in &rows {
        let notes = if row.border_trespasser { "repeated border crossings" } else { "" };
        println!(
            "{:<8} {:>9} {:<10} {:<16} {}",
            row.player, row.sentiment, row.liking_label, row.relation.label(), notes
        );
        if args.entries {
            for entry in ledger.list(row.player).into_iter().flat_map(|l| l.iter()) {
                println!("    {}", describe_entry(entry));
            }
        }
    }

    Ok(())
}
