use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::models::ComponentRecord;
use crate::reconcile::Inventories;

/// Render the colored run summary; with `verbose`, also the merged table.
pub fn render(inventories: &Inventories, verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let merged = &inventories.merged;
    let licensed = merged.iter().filter(|r| r.license.is_some()).count();
    let enriched = merged.iter().filter(|r| r.enriched_license.is_some()).count();
    let unknown = merged
        .iter()
        .filter(|r| r.license.is_none() && r.enriched_license.is_none())
        .count();

    println!(
        "\n {} v{}",
        "sbom-reconcilr".bold(),
        env!("CARGO_PKG_VERSION")
    );

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Merged components  : {}", merged.len())
    );
    println!(
        " │  {:<48} │",
        format!("  sbom / vuln / sim: {} / {} / {}",
            inventories.sbom.len(),
            inventories.vulnerability.len(),
            inventories.similarity.len()
        )
    );
    println!(
        " │  {:<48} │",
        format!("{}  Scanner license : {:>4}", "✓".green(), licensed)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Registry license: {:>4}", "✓".green(), enriched)
    );
    println!(
        " │  {:<48} │",
        format!("{}  No license      : {:>4}", "⚠".yellow(), unknown)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if verbose && !merged.is_empty() {
        render_table(merged);
        println!();
    }
}

fn render_table(records: &[ComponentRecord]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Component").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Attributed To").add_attribute(Attribute::Bold),
            Cell::new("Registry License").add_attribute(Attribute::Bold),
            Cell::new("URL").add_attribute(Attribute::Bold),
        ]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.component),
            Cell::new(record.version.as_deref().unwrap_or("")),
            Cell::new(record.source.to_string()),
            Cell::new(record.license.as_deref().unwrap_or("")),
            Cell::new(record.license_source.to_string()),
            Cell::new(record.enriched_license.as_deref().unwrap_or("")),
            Cell::new(&record.license_url),
        ]);
    }

    println!("{}", table);
}
