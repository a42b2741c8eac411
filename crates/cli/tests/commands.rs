use std::io::Write;

use gramstay_cli::commands::{destinations, recommend, suggest};
use gramstay_core::config::AppConfig;
use serde_json::Value;

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|error| {
        panic!("expected JSON payload, got `{output}`: {error}");
    })
}

fn recommend_args() -> recommend::RecommendArgs {
    recommend::RecommendArgs {
        budget: None,
        group_size: None,
        season: None,
        interests: Vec::new(),
        regions: Vec::new(),
        duration: None,
        difficulty: None,
        budget_tier: None,
        query: None,
        json: true,
    }
}

#[test]
fn recommend_returns_ranked_payload_from_demo_catalog() {
    let mut args = recommend_args();
    args.budget = Some(20_000.into());
    args.season = Some("October".to_string());

    let result = recommend::run(&args, &AppConfig::default(), "test-correlation");
    assert_eq!(result.exit_code, 0, "expected successful recommend run");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "recommend");
    assert_eq!(payload["status"], "ok");

    let recommendations = payload["recommendations"].as_array().expect("array");
    assert!(!recommendations.is_empty());
    assert!(recommendations.len() <= 10);

    let mut previous = 101;
    for rec in recommendations {
        let score = rec["match_score"].as_u64().expect("score") as i64;
        assert!(score >= 30, "score {score} below confidence floor");
        assert!(score <= previous, "scores must be non-increasing");
        previous = score;
    }
}

#[test]
fn recommend_requires_budget_or_query() {
    let args = recommend_args();

    let result = recommend::run(&args, &AppConfig::default(), "test-correlation");
    assert_eq!(result.exit_code, 2, "expected filter validation failure code");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "filter_validation");
}

#[test]
fn recommend_rejects_zero_group_size() {
    let mut args = recommend_args();
    args.budget = Some(6_000.into());
    args.group_size = Some(0);

    let result = recommend::run(&args, &AppConfig::default(), "test-correlation");
    assert_eq!(result.exit_code, 2);
    assert_eq!(parse_payload(&result.output)["error_class"], "filter_validation");
}

#[test]
fn recommend_accepts_free_text_queries() {
    let mut args = recommend_args();
    args.query = Some("coffee and nature in karnataka around 25000".to_string());

    let result = recommend::run(&args, &AppConfig::default(), "test-correlation");
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let recommendations = payload["recommendations"].as_array().expect("array");
    assert!(!recommendations.is_empty());
    // Regional preference extracted from the query should surface Karnataka
    // first.
    assert_eq!(
        recommendations[0]["destination"]["region"],
        "Karnataka",
        "query-extracted region should rank first"
    );
}

#[test]
fn recommend_reports_unreadable_catalog_with_catalog_class() {
    let mut config = AppConfig::default();
    config.catalog.path = Some("does/not/exist.json".into());

    let mut args = recommend_args();
    args.budget = Some(6_000.into());

    let result = recommend::run(&args, &config, "test-correlation");
    assert_eq!(result.exit_code, 3, "expected catalog failure code");
    assert_eq!(parse_payload(&result.output)["error_class"], "catalog");
}

#[test]
fn recommend_loads_catalog_from_configured_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let raw = include_str!("../data/demo_catalog.json");
    file.write_all(raw.as_bytes()).expect("write catalog");

    let mut config = AppConfig::default();
    config.catalog.path = Some(file.path().to_path_buf());

    let mut args = recommend_args();
    args.budget = Some(20_000.into());

    let result = recommend::run(&args, &config, "test-correlation");
    assert_eq!(result.exit_code, 0);
    assert_eq!(parse_payload(&result.output)["status"], "ok");
}

#[test]
fn suggest_returns_keyword_phrases() {
    let result = suggest::run("budget trip", true, "test-correlation");
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "suggest");
    let suggestions = payload["suggestions"].as_array().expect("array");
    assert!(suggestions.len() <= 4);
    assert_eq!(suggestions[0], "Budget-friendly destinations under ₹3000");
}

#[test]
fn suggest_falls_back_for_unknown_fragments() {
    let result = suggest::run("I need something cheap", true, "test-correlation");
    let payload = parse_payload(&result.output);
    let suggestions = payload["suggestions"].as_array().expect("array");
    assert_eq!(suggestions.len(), 4);
    assert_eq!(suggestions[0], "Explore tribal cultures in Araku Valley");
}

#[test]
fn destinations_lists_and_sorts_the_catalog() {
    let args = destinations::DestinationsArgs {
        region: None,
        sort: "price".parse().expect("sort key"),
        json: true,
    };

    let result = destinations::run(&args, &AppConfig::default(), "test-correlation");
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let listed = payload["destinations"].as_array().expect("array");
    assert!(!listed.is_empty());

    let mut previous = 0i64;
    for destination in listed {
        let price = destination["price"]
            .as_str()
            .map(|raw| raw.parse::<f64>().expect("decimal string") as i64)
            .or_else(|| destination["price"].as_i64())
            .expect("price");
        assert!(price >= previous, "prices must ascend");
        previous = price;
    }
}

#[test]
fn destinations_filters_by_region() {
    let args = destinations::DestinationsArgs {
        region: Some("Telangana".to_string()),
        sort: "featured".parse().expect("sort key"),
        json: true,
    };

    let result = destinations::run(&args, &AppConfig::default(), "test-correlation");
    let payload = parse_payload(&result.output);
    let listed = payload["destinations"].as_array().expect("array");
    assert!(!listed.is_empty());
    for destination in listed {
        assert_eq!(destination["region"], "Telangana");
    }
}
