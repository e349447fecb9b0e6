use crate::error::{AppError, AppResult};
use crate::services::RandomOptions;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub generator: GeneratorConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub key_characters: String,
    pub key_min_length: usize,
    pub key_max_length: usize,
    pub key_max_attempts: u32,
    pub value_characters: String,
    pub value_length: usize,
    pub params_min_amount: usize,
    pub params_max_amount: usize,
    pub strict_url_validation: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub requests_per_minute: u64,
    pub burst_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl GeneratorConfig {
    /// Server-wide fallback options, applied to requests that carry no
    /// explicit generation bounds.
    pub fn as_options(&self) -> RandomOptions {
        RandomOptions {
            key_characters: Some(self.key_characters.clone()),
            key_min_length: Some(self.key_min_length as i64),
            key_max_length: Some(self.key_max_length as i64),
            key_max_attempts: Some(i64::from(self.key_max_attempts)),
            value_characters: Some(self.value_characters.clone()),
            value_length: Some(self.value_length as i64),
            params_min_amount: Some(self.params_min_amount as i64),
            params_max_amount: Some(self.params_max_amount as i64),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;

        let key_characters = env::var("GENERATOR_KEY_CHARACTERS")
            .unwrap_or_else(|_| "abcdefghijklmnopqrstuvwxyz".to_string());
        let key_min_length = env::var("GENERATOR_KEY_MIN_LENGTH")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid GENERATOR_KEY_MIN_LENGTH".to_string()))?;
        let key_max_length = env::var("GENERATOR_KEY_MAX_LENGTH")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid GENERATOR_KEY_MAX_LENGTH".to_string()))?;
        let key_max_attempts = env::var("GENERATOR_KEY_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| {
                AppError::Configuration("Invalid GENERATOR_KEY_MAX_ATTEMPTS".to_string())
            })?;
        let value_characters = env::var("GENERATOR_VALUE_CHARACTERS")
            .unwrap_or_else(|_| "abcdefghijklmnopqrstuvwxyz1234567890".to_string());
        let value_length = env::var("GENERATOR_VALUE_LENGTH")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid GENERATOR_VALUE_LENGTH".to_string()))?;
        let params_min_amount = env::var("GENERATOR_PARAMS_MIN_AMOUNT")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| {
                AppError::Configuration("Invalid GENERATOR_PARAMS_MIN_AMOUNT".to_string())
            })?;
        let params_max_amount = env::var("GENERATOR_PARAMS_MAX_AMOUNT")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .map_err(|_| {
                AppError::Configuration("Invalid GENERATOR_PARAMS_MAX_AMOUNT".to_string())
            })?;
        let strict_url_validation = env::var("STRICT_URL_VALIDATION")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid STRICT_URL_VALIDATION".to_string()))?;

        // Rate limit config
        let requests_per_minute = env::var("RATE_LIMIT_PER_MINUTE")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid RATE_LIMIT_PER_MINUTE".to_string()))?;
        let burst_size = env::var("RATE_LIMIT_BURST")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid RATE_LIMIT_BURST".to_string()))?;

        // CORS config
        let allowed_origins_str = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let allowed_origins: Vec<String> = if allowed_origins_str == "*" {
            vec!["*".to_string()]
        } else {
            allowed_origins_str
                .split(',')
                .map(|s| s.trim().to_string())
                .collect()
        };

        let config = Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            generator: GeneratorConfig {
                key_characters,
                key_min_length,
                key_max_length,
                key_max_attempts,
                value_characters,
                value_length,
                params_min_amount,
                params_max_amount,
                strict_url_validation,
            },
            rate_limit: RateLimitConfig {
                requests_per_minute,
                burst_size,
            },
            cors: CorsConfig { allowed_origins },
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        // Validate generator settings
        if self.generator.key_characters.is_empty() {
            return Err(AppError::Configuration(
                "GENERATOR_KEY_CHARACTERS must not be empty".to_string(),
            ));
        }

        if self.generator.value_characters.is_empty() {
            return Err(AppError::Configuration(
                "GENERATOR_VALUE_CHARACTERS must not be empty".to_string(),
            ));
        }

        if self.generator.key_min_length < 1
            || self.generator.key_min_length > self.generator.key_max_length
        {
            return Err(AppError::Configuration(
                "GENERATOR_KEY_MIN_LENGTH must be at least 1 and no greater than GENERATOR_KEY_MAX_LENGTH"
                    .to_string(),
            ));
        }

        if self.generator.key_max_attempts < 1 || self.generator.key_max_attempts > 100 {
            return Err(AppError::Configuration(
                "GENERATOR_KEY_MAX_ATTEMPTS must be between 1 and 100".to_string(),
            ));
        }

        if self.generator.value_length < 1 {
            return Err(AppError::Configuration(
                "GENERATOR_VALUE_LENGTH must be at least 1".to_string(),
            ));
        }

        if self.generator.params_min_amount < 1
            || self.generator.params_min_amount > self.generator.params_max_amount
        {
            return Err(AppError::Configuration(
                "GENERATOR_PARAMS_MIN_AMOUNT must be at least 1 and no greater than GENERATOR_PARAMS_MAX_AMOUNT"
                    .to_string(),
            ));
        }

        // Validate rate limiting settings
        if self.rate_limit.requests_per_minute == 0 {
            return Err(AppError::Configuration(
                "RATE_LIMIT_PER_MINUTE must be greater than 0".to_string(),
            ));
        }

        if self.rate_limit.burst_size == 0 {
            return Err(AppError::Configuration(
                "RATE_LIMIT_BURST must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
