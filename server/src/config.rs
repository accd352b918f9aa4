use std::env;
use std::time::Duration;

use derive_more::Display;
use urlencoding::encode;

#[derive(Debug, Display, PartialEq)]
pub enum ConfigError {
    #[display(fmt = "{} must be a positive number, got {:?}", _0, _1)]
    InvalidNumber(&'static str, String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
    pub connect_timeout: Duration,
    pub client_host: Option<String>,
}

fn positive<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialOrd,
{
    match value.parse::<T>() {
        Ok(number) if number > T::default() => Ok(number),
        _ => Err(ConfigError::InvalidNumber(key, value)),
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// `DATABASE_URL` wins over the individual `DB_*` settings. The user and
    /// password are percent-encoded when composing the URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                encode(&var("DB_USER", "postgres")),
                encode(&var("DB_PASSWORD", "password")),
                var("DB_HOST", "localhost"),
                var("DB_PORT", "5432"),
                var("DB_NAME", "qna_db"),
            ),
        };

        let port: u16 = positive("SERVER_PORT", var("SERVER_PORT", "8080"))?;
        let pool_size: u32 = positive("DB_POOL_SIZE", var("DB_POOL_SIZE", "10"))?;
        let connect_timeout: u64 =
            positive("DB_CONNECT_TIMEOUT", var("DB_CONNECT_TIMEOUT", "30"))?;

        Ok(Config {
            database_url,
            host: var("SERVER_HOST", "0.0.0.0"),
            port,
            pool_size,
            connect_timeout: Duration::from_secs(connect_timeout),
            client_host: lookup("CLIENT_HOST"),
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
