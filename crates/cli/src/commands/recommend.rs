use clap::Args;
use rust_decimal::Decimal;
use serde_json::json;
use tracing::info;

use gramstay_core::config::AppConfig;
use gramstay_core::{BudgetTier, Difficulty, Recommendation, RecommendationEngine, TripFilters};

use crate::commands::{load_catalog, CommandResult};

#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// Total trip budget in whole currency units.
    #[arg(long, required_unless_present = "query")]
    pub budget: Option<Decimal>,
    /// Number of travelers (default 2).
    #[arg(long)]
    pub group_size: Option<u32>,
    /// Month to travel in, e.g. "October".
    #[arg(long)]
    pub season: Option<String>,
    /// Interest to match; repeat for several.
    #[arg(long = "interest")]
    pub interests: Vec<String>,
    /// Preferred region; repeat for several.
    #[arg(long = "region")]
    pub regions: Vec<String>,
    /// Stay length label, e.g. "3-5 days".
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub difficulty: Option<Difficulty>,
    #[arg(long)]
    pub budget_tier: Option<BudgetTier>,
    /// Free-text request to extract filters from, instead of flags.
    #[arg(long)]
    pub query: Option<String>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

pub fn run(args: &RecommendArgs, config: &AppConfig, correlation_id: &str) -> CommandResult {
    let catalog = match load_catalog(config) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure(
                "recommend",
                "catalog",
                format!("catalog issue: {error}"),
                3,
            );
        }
    };

    let filters = match build_filters(args, catalog.regions()) {
        Ok(filters) => filters,
        Err(message) => {
            return CommandResult::failure("recommend", "filter_validation", message, 2);
        }
    };

    info!(
        event_name = "cli.recommend.start",
        correlation_id,
        destination_count = catalog.len(),
        group_size = filters.group_size,
        "scoring catalog against trip constraints"
    );

    let engine = RecommendationEngine::new();
    let recommendations = engine.recommend(&catalog, &filters);

    info!(
        event_name = "cli.recommend.complete",
        correlation_id,
        result_count = recommendations.len(),
        "ranked shortlist ready"
    );

    let output = if args.json {
        json!({
            "command": "recommend",
            "status": "ok",
            "count": recommendations.len(),
            "recommendations": recommendations,
        })
        .to_string()
    } else {
        render_human(&recommendations)
    };

    CommandResult { exit_code: 0, output }
}

fn build_filters(
    args: &RecommendArgs,
    known_regions: Vec<String>,
) -> Result<TripFilters, String> {
    let mut filters = if let Some(query) = &args.query {
        TripFilters::from_query(query, &known_regions)
    } else {
        let Some(budget) = args.budget else {
            return Err("either --budget or --query is required".to_string());
        };
        TripFilters::new(budget, 2)
    };

    if let Some(group_size) = args.group_size {
        filters.group_size = group_size;
    }
    if filters.group_size == 0 {
        return Err("group size must be at least 1".to_string());
    }

    if let Some(season) = &args.season {
        filters = filters.with_season(season.clone());
    }
    if !args.interests.is_empty() {
        filters = filters.with_interests(args.interests.clone());
    }
    if !args.regions.is_empty() {
        filters = filters.with_preferred_regions(args.regions.clone());
    }
    if let Some(duration) = &args.duration {
        filters = filters.with_duration(duration.clone());
    }
    if let Some(difficulty) = args.difficulty {
        filters = filters.with_difficulty(difficulty);
    }
    if let Some(tier) = args.budget_tier {
        filters = filters.with_budget_tier(tier);
    }

    Ok(filters)
}

fn render_human(recommendations: &[Recommendation<'_>]) -> String {
    if recommendations.is_empty() {
        return "No destinations cleared the confidence floor. Try a wider budget, another month, or fewer constraints.".to_string();
    }

    let mut lines = Vec::new();
    for (rank, rec) in recommendations.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({}) — {}/100 match",
            rank + 1,
            rec.destination.name,
            rec.destination.region,
            rec.match_score,
        ));
        lines.push(format!(
            "   est. total ₹{} (stay ₹{}, activities ₹{}, food ₹{}, transport ₹{})",
            rec.cost.total,
            rec.cost.accommodation,
            rec.cost.activities,
            rec.cost.food,
            rec.cost.transport,
        ));
        for reason in &rec.reasons {
            lines.push(format!("   • {reason}"));
        }
        lines.push(format!("   {}", rec.seasonal_advice));
    }
    lines.join("\n")
}
