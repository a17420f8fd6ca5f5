//! `sbom-reconcilr` — reconcile scanner reports into one license inventory.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Read the three scanner reports ([`normalizer::read_document`]).
//! 4. Normalize each schema into [`models::ComponentRecord`]s ([`normalizer`]).
//! 5. Reconcile: vulnerability license fill, registry enrichment, merge,
//!    dedup ([`reconcile`], [`registry`]).
//! 6. Emit CSV + JSON reports and a terminal summary ([`report`]).
//!
//! Only an unparseable SBOM or vulnerability report aborts the run; every
//! other failure degrades data quality instead of failing.

mod cli;
mod config;
mod models;
mod normalizer;
mod reconcile;
mod registry;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use config::load_config;
use registry::LicenseResolver;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // Output prefix: flag → environment → config default
    let prefix = cli
        .output_prefix
        .clone()
        .or_else(|| std::env::var("SBOM_RECONCILR_PREFIX").ok())
        .unwrap_or_else(|| config.output.prefix.clone());

    // SBOM and vulnerability reports must parse once present; the similarity
    // report is best-effort and degrades to an empty source.
    let sbom_doc = normalizer::read_document(&cli.sbom)?;
    let vulnerability_doc = normalizer::read_document(&cli.vulnerability)?;
    let similarity_doc = match normalizer::read_document(&cli.similarity) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("  {} similarity report ignored: {:#}", "!".yellow(), err);
            None
        }
    };

    let sbom_records = sbom_doc
        .as_ref()
        .map(normalizer::sbom::normalize)
        .unwrap_or_default();
    let vulnerability = vulnerability_doc
        .as_ref()
        .map(normalizer::vulnerability::normalize)
        .unwrap_or_default();
    let similarity_records = similarity_doc
        .as_ref()
        .map(normalizer::similarity::normalize)
        .unwrap_or_default();

    if !cli.quiet {
        eprintln!("  {} sbom {} components", "→".cyan(), sbom_records.len());
        eprintln!(
            "  {} vulnerability {} matches",
            "→".cyan(),
            vulnerability.records.len()
        );
        eprintln!(
            "  {} similarity {} components",
            "→".cyan(),
            similarity_records.len()
        );
    }

    let resolver = if cli.offline {
        None
    } else {
        let client = reqwest::Client::builder()
            .timeout(config.registry.timeout())
            .build()?;
        Some(LicenseResolver::new(client, config.registry.pacing()))
    };

    let inventories = reconcile::reconcile(
        resolver.as_ref(),
        sbom_records,
        vulnerability,
        similarity_records,
        cli.quiet,
    )
    .await;

    report::terminal::render(&inventories, cli.verbose, cli.quiet);

    let mut exported = report::csv::write_reports(&inventories, &prefix)?;
    exported.push(report::json::write_report(&inventories, &prefix)?);

    let names: Vec<String> = exported.iter().map(|p| p.display().to_string()).collect();
    println!(
        "{} Exported: {}, total components: {}",
        "✓".green(),
        names.join(", "),
        inventories.merged.len()
    );

    Ok(())
}
