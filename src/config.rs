//! Runtime configuration from environment variables.

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Bootstrap admin credentials; both must be set for seeding to run.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    /// Public booking submission limiter tuning.
    pub rate_limit_max: u32,
    pub rate_limit_window_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let rate_limit_max = env_or("RATE_LIMIT_MAX", 20)?;
        let rate_limit_window_secs = env_or("RATE_LIMIT_WINDOW_SECS", 60)?;

        Ok(Self {
            database_url,
            bind_addr,
            admin_email: non_empty_var("ADMIN_EMAIL"),
            admin_password: non_empty_var("ADMIN_PASSWORD"),
            rate_limit_max,
            rate_limit_window_secs,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} is not a valid value: {raw}")),
        Err(_) => Ok(default),
    }
}
