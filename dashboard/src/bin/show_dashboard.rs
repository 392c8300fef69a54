//! Render one dashboard bucket from a directory of snapshot files and
//! print the resulting view-models as text.
//!
//! Usage: `show_dashboard <data-dir> [bucket] [config.toml]`

use anyhow::{Context, Result};
use std::sync::Arc;

use pcp_dashboard::snapshot::FileRepository;
use pcp_dashboard::{DashboardConfig, DashboardSession};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let data_dir = args
        .get(1)
        .context("Usage: show_dashboard <data-dir> [bucket] [config.toml]")?;
    let bucket: usize = match args.get(2) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid bucket index {:?}", raw))?,
        None => 0,
    };
    let config = match args.get(3) {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::load_default(),
    };

    let repository = Arc::new(FileRepository::new(data_dir));
    let session = DashboardSession::new(repository, config);

    let view = session
        .show_bucket(bucket)
        .await?
        .context("Render was superseded")?;

    println!("{} [{}]", view.board.summary_text, view.board.bucket_label);
    for panel in &view.board.panels {
        let trend = panel
            .trend
            .map(|t| format!("{:?}", t))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<14} {:<16} {:<18} trend: {:<9} severity: {:?}",
            panel.name, panel.joining_text, panel.wait_text, trend, panel.severity
        );
    }

    println!("\nArrivals ({} flights):", view.arrivals.rows.len());
    for row in &view.arrivals.rows {
        println!("  {}", row.join(" | "));
    }

    println!("\nPassenger mix:");
    for segment in &view.mix.chart {
        println!("  {:<20} {}", segment.label, segment.count);
    }
    let counts = &view.mix.counts;
    println!(
        "  (transit {}, EEA machine-readable {}, non-machine-readable {})",
        counts.transit, counts.eea_machine_readable, counts.eea_non_machine_readable
    );

    Ok(())
}
