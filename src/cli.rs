use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sbom-reconcilr",
    about = "Reconcile SBOM, vulnerability and source-similarity scans into one license inventory",
    version
)]
pub struct Cli {
    /// SBOM generator report (syft JSON); a missing file is an empty source
    pub sbom: PathBuf,

    /// Vulnerability scanner report (grype JSON); a missing file is an empty source
    pub vulnerability: PathBuf,

    /// Source-similarity scanner report (scanoss JSON); missing or malformed files are ignored
    pub similarity: PathBuf,

    /// Basename prefix for report files [fallback: $SBOM_RECONCILR_PREFIX, then config]
    #[arg(long, value_name = "PREFIX")]
    pub output_prefix: Option<String>,

    /// Skip registry license enrichment
    #[arg(long)]
    pub offline: bool,

    /// Config file [default: ./.sbom-reconcilr/config.toml, fallback ~/.config/sbom-reconcilr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the full merged inventory, not just the summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the final export line
    #[arg(short, long)]
    pub quiet: bool,
}
