//! API configuration

use domain_split::DiscountPolicy;
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Discount policy used when a request does not name one
    pub default_discount_policy: DiscountPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            default_discount_policy: DiscountPolicy::PostTax,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment variables with the `API_` prefix
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("log_level", "info")?
            .set_default("default_discount_policy", "post_tax")?
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();

        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.default_discount_policy, DiscountPolicy::PostTax);
    }

    #[test]
    fn test_from_env_uses_defaults_when_unset() {
        let config = ApiConfig::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.default_discount_policy, DiscountPolicy::PostTax);
    }
}
