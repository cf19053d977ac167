//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidMetricsAddress(String),
    ZeroRequestTimeout,
    ZeroBodyLimit,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address is not a socket address: {}", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(
                    f,
                    "observability.metrics_address is not a socket address: {}",
                    addr
                )
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "timeouts.request_secs must be greater than zero")
            }
            ValidationError::ZeroBodyLimit => {
                write!(f, "limits.max_body_bytes must be greater than zero")
            }
        }
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&ServiceConfig::default()), Ok(()));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.timeouts.request_secs = 0;
        config.limits.max_body_bytes = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroRequestTimeout));
        assert!(errors.contains(&ValidationError::ZeroBodyLimit));
    }

    #[test]
    fn metrics_address_is_only_checked_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "nope".to_string();
        assert_eq!(validate_config(&config), Ok(()));

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
