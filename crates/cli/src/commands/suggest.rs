use serde_json::json;
use tracing::info;

use gramstay_core::suggest;

use crate::commands::CommandResult;

pub fn run(query: &str, json_output: bool, correlation_id: &str) -> CommandResult {
    let phrases = suggest(query);

    info!(
        event_name = "cli.suggest.complete",
        correlation_id,
        phrase_count = phrases.len(),
        "suggestion lookup complete"
    );

    let output = if json_output {
        json!({
            "command": "suggest",
            "status": "ok",
            "count": phrases.len(),
            "suggestions": phrases,
        })
        .to_string()
    } else {
        phrases.join("\n")
    };

    CommandResult { exit_code: 0, output }
}
