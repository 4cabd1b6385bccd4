use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Both actor names are non-empty
/// - Dataset base URL is non-empty
/// - Download timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.comparison.first_actor.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "comparison.first_actor cannot be empty".to_string(),
        ));
    }

    if config.comparison.second_actor.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "comparison.second_actor cannot be empty".to_string(),
        ));
    }

    if config.dataset.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "dataset.base_url cannot be empty".to_string(),
        ));
    }

    if config.dataset.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "dataset.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
