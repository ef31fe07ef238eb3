//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{CampusEventsError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;
    validate_listing_config(&settings.listing)?;
    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(CampusEventsError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(CampusEventsError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(CampusEventsError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CampusEventsError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CampusEventsError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if let Some(file_path) = &config.file_path {
        if file_path.is_empty() {
            return Err(CampusEventsError::Config(
                "Log file path cannot be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate listing limits
fn validate_listing_config(config: &super::ListingConfig) -> Result<()> {
    if config.default_page_size <= 0 {
        return Err(CampusEventsError::Config(
            "Default page size must be greater than 0".to_string()
        ));
    }

    if config.max_page_size < config.default_page_size {
        return Err(CampusEventsError::Config(
            "Max page size cannot be smaller than default page size".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn empty_database_url_is_rejected() {
        let mut settings = Settings::default();
        settings.database.url = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn page_size_ordering_is_enforced() {
        let mut settings = Settings::default();
        settings.listing.default_page_size = 500;
        assert!(validate_settings(&settings).is_err());
    }
}
