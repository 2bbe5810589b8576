pub mod compare;
pub mod config;
pub mod list;
pub mod packages;
pub mod show;

use lapwise_core::catalog::Catalog;
use lapwise_core::config::{AppConfig, LoadOptions};
use lapwise_core::errors::{ApplicationError, DomainError};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_NOT_FOUND: u8 = 3;
pub const EXIT_INVALID_INPUT: u8 = 4;
pub const EXIT_INTERNAL: u8 = 1;

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
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn text(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    /// Success envelope carrying a structured `data` payload.
    pub fn success_with_data(
        command: &str,
        message: impl Into<String>,
        data: &impl Serialize,
    ) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => {
                let payload = CommandOutcome {
                    command: command.to_string(),
                    status: "ok".to_string(),
                    error_class: None,
                    message: message.into(),
                    data: Some(data),
                };
                Self { exit_code: 0, output: serialize_payload(payload) }
            }
            Err(error) => Self::failure(command, "serialization", error.to_string(), EXIT_INTERNAL),
        }
    }

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
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Maps a failure through the interface error layer into an envelope.
    pub fn application_failure(command: &str, error: impl Into<ApplicationError>) -> Self {
        let error = error.into();
        let (error_class, exit_code) = classify(&error);
        // Loader failures are already phrased for the operator.
        let summary = match &error {
            ApplicationError::Domain(_) => None,
            ApplicationError::Catalog(_) | ApplicationError::Configuration(_) => {
                Some(error.to_string())
            }
        };

        let interface = error.into_interface(format!("cli-{command}"));
        warn!(
            event_name = "cli.command.failed",
            command,
            error_class,
            correlation_id = interface.correlation_id(),
            error = %interface,
            "command failed"
        );

        let message = summary.unwrap_or_else(|| {
            format!("{} ({})", interface.user_message(), interface.message())
        });
        Self::failure(command, error_class, message, exit_code)
    }
}

fn classify(error: &ApplicationError) -> (&'static str, u8) {
    match error {
        ApplicationError::Configuration(_) => ("config_validation", EXIT_CONFIG),
        ApplicationError::Catalog(_) => ("catalog", EXIT_CONFIG),
        ApplicationError::Domain(DomainError::NotFound { .. }) => ("not_found", EXIT_NOT_FOUND),
        ApplicationError::Domain(_) => ("invalid_input", EXIT_INVALID_INPUT),
    }
}

/// Loaded configuration plus the catalog it points at.
#[derive(Debug)]
pub struct Session {
    pub config: AppConfig,
    pub catalog: Catalog,
}

impl Session {
    pub fn currency(&self) -> &str {
        &self.config.display.currency
    }
}

pub fn load_session(command: &str) -> Result<Session, CommandResult> {
    let config = AppConfig::load(LoadOptions::default())
        .map_err(|error| CommandResult::application_failure(command, error))?;

    let loaded = match &config.catalog.path {
        Some(path) => Catalog::load(path),
        None => Catalog::seeded(),
    };
    let catalog = loaded.map_err(|error| CommandResult::application_failure(command, error))?;

    debug!(
        event_name = "cli.catalog.loaded",
        command,
        products = catalog.len(),
        packages = catalog.packages().len(),
        source = config
            .catalog
            .path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "seed".to_string()),
        "catalog loaded"
    );

    Ok(Session { config, catalog })
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
