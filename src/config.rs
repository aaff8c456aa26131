use std::env;
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Target project and credential configuration with validation
#[derive(Clone, Debug, Validate)]
pub struct AdminConfig {
    /// Supabase project URL, e.g. `https://<ref>.supabase.co`
    #[validate(custom(function = validate_project_url))]
    pub project_url: String,

    /// Service-role API key (sent as both `apikey` and bearer token)
    #[validate(length(min = 1, message = "Service key cannot be empty"))]
    pub service_key: String,

    /// Name of the SQL-executing RPC function exposed through PostgREST
    #[validate(length(min = 1, message = "RPC function name cannot be empty"))]
    pub rpc_function: String,
}

/// Carrier for values parsed from the command line
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub project_url: String,
    pub service_key: String,
    pub rpc_function: String,
}

impl AdminConfig {
    /// Create configuration from environment variables with validation.
    ///
    /// The binary goes through [`AdminConfig::from_cli`] (clap fills the same
    /// variables in as flag fallbacks); this constructor is for library
    /// callers that have no command line to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            project_url: env::var("SUPABASE_URL")?,
            service_key: env::var("SUPABASE_SERVICE_KEY")?,
            rpc_function: env::var("SUPABASE_RPC_FUNCTION")
                .unwrap_or_else(|_| "exec_sql".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from CLI arguments with validation
    pub fn from_cli(cli: CliConfig) -> Result<Self, ConfigError> {
        let config = Self {
            project_url: cli.project_url,
            service_key: cli.service_key,
            rpc_function: cli.rpc_function,
        };

        config.validate()?;
        Ok(config)
    }
}

fn validate_project_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(ValidationError::new("project_url")
            .with_message("Project URL must start with http:// or https://".into()))
    }
}
