use clap::Args;
use serde_json::json;
use tracing::info;

use gramstay_core::config::AppConfig;
use gramstay_core::{Destination, SortKey};

use crate::commands::{load_catalog, CommandResult};

#[derive(Debug, Args)]
pub struct DestinationsArgs {
    /// Restrict the listing to one region.
    #[arg(long)]
    pub region: Option<String>,
    /// Ordering: featured, price, rating, or reviews.
    #[arg(long, default_value = "featured")]
    pub sort: SortKey,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

pub fn run(args: &DestinationsArgs, config: &AppConfig, correlation_id: &str) -> CommandResult {
    let catalog = match load_catalog(config) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure(
                "destinations",
                "catalog",
                format!("catalog issue: {error}"),
                3,
            );
        }
    };

    let mut listed = catalog.sorted(args.sort);
    if let Some(region) = &args.region {
        listed.retain(|destination| &destination.region == region);
    }

    info!(
        event_name = "cli.destinations.complete",
        correlation_id,
        listed_count = listed.len(),
        "catalog listing ready"
    );

    let output = if args.json {
        json!({
            "command": "destinations",
            "status": "ok",
            "count": listed.len(),
            "destinations": listed,
        })
        .to_string()
    } else {
        render_human(&listed)
    };

    CommandResult { exit_code: 0, output }
}

fn render_human(destinations: &[&Destination]) -> String {
    if destinations.is_empty() {
        return "No destinations in the catalog match that region.".to_string();
    }

    let mut lines = Vec::new();
    for destination in destinations {
        lines.push(format!(
            "{} ({}) — ₹{}/night, {}★ over {} reviews",
            destination.name,
            destination.region,
            destination.price,
            destination.rating,
            destination.reviews,
        ));
    }
    lines.join("\n")
}
