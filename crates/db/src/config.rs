//! Database connection and pool configuration.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Default maximum pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
/// Default wait for a free pooled connection, in seconds.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;
/// Default idle connection lifetime, in seconds.
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;
/// Default server-side statement timeout, in seconds.
const DEFAULT_STATEMENT_TIMEOUT_SECS: u64 = 30;

/// Where to connect.
#[derive(Debug, Clone)]
pub enum ConnectTarget {
    /// A complete `postgres://` URL.
    Url(String),
    /// Individual connection parts.
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
        ssl_mode: PgSslMode,
    },
}

/// Pool sizing and timeouts.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    /// Applied as the Postgres `statement_timeout` on every connection.
    pub statement_timeout: Duration,
}

impl PoolSettings {
    /// Longest a caller can wait on storage when it acquires one connection
    /// and runs `statements` queries on it.
    pub fn storage_budget(&self, statements: u32) -> Duration {
        self.acquire_timeout + self.statement_timeout * statements
    }
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            statement_timeout: Duration::from_secs(DEFAULT_STATEMENT_TIMEOUT_SECS),
        }
    }
}

/// Database configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub target: ConnectTarget,
    pub pool: PoolSettings,
    /// Whether to apply `db/migrations` at startup.
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Load database configuration from environment variables.
    ///
    /// `DATABASE_URL` wins when set; otherwise the `PG_*` parts are used.
    ///
    /// | Env Var                     | Default     |
    /// |-----------------------------|-------------|
    /// | `DATABASE_URL`              | --          |
    /// | `PG_HOST`                   | `localhost` |
    /// | `PG_PORT`                   | `5432`      |
    /// | `PG_USER`                   | `postgres`  |
    /// | `PG_PASS`                   | empty       |
    /// | `PG_DATABASE`               | `postgres`  |
    /// | `PG_SSL_MODE`               | `prefer`    |
    /// | `DB_MAX_CONNECTIONS`        | `20`        |
    /// | `DB_ACQUIRE_TIMEOUT_SECS`   | `10`        |
    /// | `DB_IDLE_TIMEOUT_SECS`      | `30`        |
    /// | `DB_STATEMENT_TIMEOUT_SECS` | `30`        |
    /// | `RUN_MIGRATIONS`            | `true`      |
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable does not parse or `PG_SSL_MODE` is not
    /// one of `disable`, `prefer`, `require`.
    pub fn from_env() -> Self {
        let target = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => ConnectTarget::Url(url),
            _ => ConnectTarget::Parts {
                host: env_or("PG_HOST", "localhost"),
                port: parse_env("PG_PORT", 5432),
                user: env_or("PG_USER", "postgres"),
                password: env_or("PG_PASS", ""),
                database: env_or("PG_DATABASE", "postgres"),
                ssl_mode: parse_ssl_mode(&env_or("PG_SSL_MODE", "prefer")),
            },
        };

        let pool = PoolSettings {
            max_connections: parse_env("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
            acquire_timeout: Duration::from_secs(parse_env(
                "DB_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )),
            idle_timeout: Duration::from_secs(parse_env(
                "DB_IDLE_TIMEOUT_SECS",
                DEFAULT_IDLE_TIMEOUT_SECS,
            )),
            statement_timeout: Duration::from_secs(parse_env(
                "DB_STATEMENT_TIMEOUT_SECS",
                DEFAULT_STATEMENT_TIMEOUT_SECS,
            )),
        };

        Self {
            target,
            pool,
            run_migrations: parse_env("RUN_MIGRATIONS", true),
        }
    }

    /// Build connect options for the configured target.
    ///
    /// The statement timeout is attached here so every pooled connection
    /// carries it.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let options = match &self.target {
            ConnectTarget::Url(url) => PgConnectOptions::from_str(url)?,
            ConnectTarget::Parts {
                host,
                port,
                user,
                password,
                database,
                ssl_mode,
            } => PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(database)
                .ssl_mode(*ssl_mode),
        };

        Ok(with_statement_timeout(options, self.pool.statement_timeout))
    }
}

/// Attach a server-side `statement_timeout` (in milliseconds).
pub fn with_statement_timeout(options: PgConnectOptions, timeout: Duration) -> PgConnectOptions {
    let millis = timeout.as_millis().to_string();
    options.options([("statement_timeout", millis)])
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid value: {e}")),
        Err(_) => default,
    }
}

fn parse_ssl_mode(raw: &str) -> PgSslMode {
    match raw.trim().to_ascii_lowercase().as_str() {
        "disable" => PgSslMode::Disable,
        "prefer" => PgSslMode::Prefer,
        "require" => PgSslMode::Require,
        other => panic!("PG_SSL_MODE must be one of disable, prefer, require (got '{other}')"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_defaults_match_documented_values() {
        let settings = PoolSettings::default();
        assert_eq!(settings.max_connections, 20);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(10));
        assert_eq!(settings.idle_timeout, Duration::from_secs(30));
        assert_eq!(settings.statement_timeout, Duration::from_secs(30));
    }

    #[test]
    fn storage_budget_covers_acquire_and_every_statement() {
        let settings = PoolSettings::default();
        assert_eq!(settings.storage_budget(3), Duration::from_secs(100));
        assert_eq!(settings.storage_budget(0), settings.acquire_timeout);
    }

    #[test]
    fn ssl_modes_parse_case_insensitively() {
        assert!(matches!(parse_ssl_mode("disable"), PgSslMode::Disable));
        assert!(matches!(parse_ssl_mode("Prefer"), PgSslMode::Prefer));
        assert!(matches!(parse_ssl_mode(" REQUIRE "), PgSslMode::Require));
    }

    #[test]
    #[should_panic(expected = "PG_SSL_MODE")]
    fn unknown_ssl_mode_panics() {
        parse_ssl_mode("verify-everything");
    }

    #[test]
    fn parts_target_builds_options() {
        let config = DatabaseConfig {
            target: ConnectTarget::Parts {
                host: "db.internal".into(),
                port: 6543,
                user: "reader".into(),
                password: "secret".into(),
                database: "land".into(),
                ssl_mode: PgSslMode::Require,
            },
            pool: PoolSettings::default(),
            run_migrations: false,
        };

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "reader");
        assert_eq!(options.get_database(), Some("land"));
    }

    #[test]
    fn malformed_url_is_an_error() {
        let config = DatabaseConfig {
            target: ConnectTarget::Url("not a url".into()),
            pool: PoolSettings::default(),
            run_migrations: false,
        };
        assert!(config.connect_options().is_err());
    }
}
