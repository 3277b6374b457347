//! Configuration management for the household inventory server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with HOMEINV__ prefix
//! 4. The plain SECRET_KEY / APP_PASSWORD / DATABASE_PATH / APP_ENVIRONMENT
//!    variables used by existing deployments

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Password and session configuration
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Directory holding the browser frontend
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite database file, or `:memory:`
    pub path: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Secret used to sign session tokens
    pub secret_key: String,

    /// Shared household password
    pub app_password: String,

    /// Session lifetime in seconds
    pub session_ttl_secs: i64,

    /// Mark the session cookie `Secure` (requires HTTPS)
    pub secure_cookie: bool,

    /// bcrypt cost used to hash the password at startup
    pub bcrypt_cost: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("HOMEINV_ENVIRONMENT")
            .or_else(|_| std::env::var("APP_ENVIRONMENT"))
            .unwrap_or_else(|_| "production".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "frontend")?
            .set_default("database.path", "data/inventory.db")?
            .set_default("database.max_connections", 5)?
            .set_default("auth.secret_key", "")?
            .set_default("auth.app_password", "")?
            .set_default("auth.session_ttl_secs", 30 * 24 * 3600)?
            .set_default("auth.secure_cookie", false)?
            .set_default("auth.bcrypt_cost", bcrypt::DEFAULT_COST)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (HOMEINV__ prefix)
            .add_source(
                Environment::with_prefix("HOMEINV")
                    .separator("__")
                    .try_parsing(true),
            )
            // Plain variables used by existing deployments
            .set_override_option("auth.secret_key", std::env::var("SECRET_KEY").ok())?
            .set_override_option("auth.app_password", std::env::var("APP_PASSWORD").ok())?
            .set_override_option("database.path", std::env::var("DATABASE_PATH").ok())?
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check required settings, reporting every problem at once
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.auth.secret_key.is_empty() {
            errors.push("SECRET_KEY environment variable is required".to_string());
        }
        if self.auth.app_password.is_empty() {
            errors.push("APP_PASSWORD environment variable is required".to_string());
        } else if let Err(msg) = shared::validate_password(&self.auth.app_password) {
            errors.push(format!("APP_PASSWORD invalid: {}", msg));
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            errors.push("auth.bcrypt_cost must be between 4 and 31".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(format!(
                "Configuration error(s): {}",
                errors.join("; ")
            )))
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
            static_dir: "frontend".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(secret: &str, password: &str) -> Config {
        Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig {
                path: ":memory:".to_string(),
                max_connections: 1,
            },
            auth: AuthConfig {
                secret_key: secret.to_string(),
                app_password: password.to_string(),
                session_ttl_secs: 3600,
                secure_cookie: false,
                bcrypt_cost: 4,
            },
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config_with("secret", "password123").validate().is_ok());
    }

    #[test]
    fn test_reports_all_missing_values() {
        let err = config_with("", "").validate().unwrap_err().to_string();
        assert!(err.contains("SECRET_KEY"));
        assert!(err.contains("APP_PASSWORD"));
    }

    #[test]
    fn test_short_password_rejected() {
        let err = config_with("secret", "short").validate().unwrap_err().to_string();
        assert!(err.contains("at least 8 characters"));
    }
}
