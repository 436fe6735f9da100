//! Score a farm profile from the command line
//!
//! Usage:
//!   cargo run --bin score_farm -- [profile.json]
//!       [--csv out.csv] [--markdown out.md] [--json out.json]
//!
//! Without a profile path the Chennai sample farm is scored.
//! CATALOG_PATH and CONSTANTS_PATH override the builtin catalog and constants.

use anyhow::{Context, Result};
use clap::Parser;
use farm_scorer_rust::calendar::default_heatmap;
use farm_scorer_rust::explanation::{
    advise_or_fallback, CsvFormatter, FarmReport, JsonFormatter, MarkdownFormatter, OfflineAdvisor,
};
use farm_scorer_rust::profile::chennai_sample;
use farm_scorer_rust::{Catalog, FarmProfile, FarmScorer, ScoringConstants};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Score a farm profile and print the recommendation report.
#[derive(Parser)]
#[command(name = "score_farm", version, about = "Score a farm profile against the crop catalog")]
struct Args {
    /// Path to a farm profile JSON file (Chennai sample farm when omitted)
    profile: Option<PathBuf>,

    /// Export the ranked crop table as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the Markdown report to a file
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// Write the JSON report to a file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn load_scorer() -> Result<FarmScorer> {
    let catalog = match std::env::var("CATALOG_PATH") {
        Ok(path) => Catalog::load(Path::new(&path))?,
        Err(_) => Catalog::builtin(),
    };
    let constants = match std::env::var("CONSTANTS_PATH") {
        Ok(path) => ScoringConstants::load(Path::new(&path))?,
        Err(_) => ScoringConstants::default(),
    };
    Ok(FarmScorer::new(Arc::new(catalog), Arc::new(constants)))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let scorer = load_scorer()?;

    let profile = match &args.profile {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile: {:?}", path))?;
            FarmProfile::from_json(&json).with_context(|| format!("Invalid profile: {:?}", path))?
        }
        None => {
            tracing::info!("No profile given, scoring the Chennai sample farm");
            chennai_sample()
        }
    };

    let result = scorer.score(&profile)?;
    let report = FarmReport::new(&profile, &result);

    println!("{}", MarkdownFormatter::format(&report));

    match scorer.predict_yield_for(&profile, &result.recommended_crop.crop.name) {
        Ok(y) => println!(
            "Predicted yield for {}: {:.1} q/acre\n",
            result.recommended_crop.crop.name, y
        ),
        // Display policy: a negative prediction is shown as zero
        Err(e) => {
            tracing::warn!("{}", e);
            println!("Predicted yield for {}: 0.0 q/acre\n", result.recommended_crop.crop.name);
        }
    }

    println!("## Agronomist Recommendations\n");
    let advice = advise_or_fallback(&OfflineAdvisor, &profile, &result);
    for (i, tip) in advice.tips.iter().enumerate() {
        println!("{}. {}", i + 1, tip);
    }

    println!("\n## Planting Calendar (illustrative)\n");
    let heatmap = default_heatmap(&mut rand::thread_rng());
    println!("{:<10} {}", "", heatmap.months.join("  "));
    for (crop, row) in heatmap.crops.iter().zip(&heatmap.values) {
        let cells: Vec<String> = row.iter().map(|v| format!("{:>3}", v)).collect();
        println!("{:<10} {}", crop, cells.join("  "));
    }

    if let Some(path) = &args.csv {
        let file = fs::File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
        CsvFormatter::write(&result, file)?;
        tracing::info!("Farm report exported to {:?}", path);
    }
    if let Some(path) = &args.markdown {
        fs::write(path, MarkdownFormatter::format(&report))
            .with_context(|| format!("Failed to write {:?}", path))?;
        tracing::info!("Markdown report written to {:?}", path);
    }
    if let Some(path) = &args.json {
        fs::write(path, JsonFormatter::format(&report)?)
            .with_context(|| format!("Failed to write {:?}", path))?;
        tracing::info!("JSON report written to {:?}", path);
    }

    Ok(())
}
