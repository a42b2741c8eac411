pub mod destinations;
pub mod recommend;
pub mod suggest;

use gramstay_core::catalog::{Catalog, CatalogError};
use gramstay_core::config::AppConfig;
use serde::Serialize;

/// Demo catalog baked into the binary so every command works with no setup.
const DEMO_CATALOG: &str = include_str!("../../data/demo_catalog.json");

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Configured catalog when a path is set, the embedded demo catalog
/// otherwise.
pub(crate) fn load_catalog(config: &AppConfig) -> Result<Catalog, CatalogError> {
    match &config.catalog.path {
        Some(path) => Catalog::load(path),
        None => Catalog::from_json_str(DEMO_CATALOG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gramstay_core::config::AppConfig;

    #[test]
    fn embedded_demo_catalog_parses_and_validates() {
        let config = AppConfig::default();
        let catalog = load_catalog(&config).expect("demo catalog must be valid");
        assert!(!catalog.is_empty());
        assert!(catalog.regions().contains(&"Andhra Pradesh".to_string()));
    }

    #[test]
    fn missing_catalog_file_surfaces_read_error() {
        let mut config = AppConfig::default();
        config.catalog.path = Some("does/not/exist.json".into());
        assert!(matches!(
            load_catalog(&config),
            Err(CatalogError::ReadFile { .. })
        ));
    }
}
