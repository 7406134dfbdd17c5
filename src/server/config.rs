//! Environment-based application configuration.

use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
const DEFAULT_RATE_LIMIT_BURST: u32 = 10;
const DEFAULT_MAX_BOOKINGS_PER_USER: u64 = 3;

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Marks the session cookie `Secure`; enable behind HTTPS.
    pub session_secure: bool,
    /// Allowed CORS origin. `None` allows any origin without credentials.
    pub cors_origin: Option<String>,

    /// One request is replenished every this many seconds per client IP.
    pub rate_limit_period_seconds: u64,
    pub rate_limit_burst: u32,

    pub max_bookings_per_user: u64,

    /// Seeded as the first admin when both are set and no admin exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - A numeric or boolean variable does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url: optional("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: parse_or("PORT", optional("PORT"), DEFAULT_PORT)?,
            session_secure: parse_or("SESSION_SECURE", optional("SESSION_SECURE"), false)?,
            cors_origin: optional("CORS_ORIGIN"),
            rate_limit_period_seconds: parse_or(
                "RATE_LIMIT_PERIOD_SECONDS",
                optional("RATE_LIMIT_PERIOD_SECONDS"),
                DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            )?,
            rate_limit_burst: parse_or(
                "RATE_LIMIT_BURST",
                optional("RATE_LIMIT_BURST"),
                DEFAULT_RATE_LIMIT_BURST,
            )?,
            max_bookings_per_user: parse_or(
                "MAX_BOOKINGS_PER_USER",
                optional("MAX_BOOKINGS_PER_USER"),
                DEFAULT_MAX_BOOKINGS_PER_USER,
            )?,
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = value else {
        return Ok(default);
    };

    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        })
}
