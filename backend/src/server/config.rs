//! Command-line configuration for the API server.

use clap::Parser;

/// Environment variable consulted when `--db-dsn` is not given.
pub const DB_DSN_ENV: &str = "TODOLIST_DB_DSN";

/// API server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "backend", about = "Todolist CRUD API server")]
pub struct Config {
    /// API server port.
    #[arg(long, default_value_t = 3001)]
    pub port: u16,

    /// Environment reported by the healthcheck (dev|stage|prod).
    #[arg(long, default_value = "dev")]
    pub env: String,

    /// PostgreSQL DSN; falls back to the TODOLIST_DB_DSN environment
    /// variable.
    #[arg(long = "db-dsn")]
    pub db_dsn: Option<String>,

    /// PostgreSQL connection pool maximum size.
    #[arg(long = "db-max-conns", default_value_t = 25)]
    pub db_max_conns: u32,

    /// PostgreSQL connection idle timeout in seconds.
    #[arg(long = "db-idle-timeout-secs", default_value_t = 900)]
    pub db_idle_timeout_secs: u64,
}

impl Config {
    /// Resolve the DSN from the flag or the environment.
    pub fn dsn(&self) -> Option<String> {
        self.db_dsn
            .clone()
            .or_else(|| std::env::var(DB_DSN_ENV).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_mirror_the_service_contract() {
        let config = Config::try_parse_from(["backend"]).expect("parse");
        assert_eq!(config.port, 3001);
        assert_eq!(config.env, "dev");
        assert_eq!(config.db_max_conns, 25);
        assert_eq!(config.db_idle_timeout_secs, 900);
        assert!(config.db_dsn.is_none());
    }

    #[rstest]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "backend",
            "--port",
            "8080",
            "--env",
            "prod",
            "--db-dsn",
            "postgres://localhost/todolist",
            "--db-max-conns",
            "5",
            "--db-idle-timeout-secs",
            "60",
        ])
        .expect("parse");

        assert_eq!(config.port, 8080);
        assert_eq!(config.env, "prod");
        assert_eq!(config.dsn().as_deref(), Some("postgres://localhost/todolist"));
        assert_eq!(config.db_max_conns, 5);
        assert_eq!(config.db_idle_timeout_secs, 60);
    }

    #[rstest]
    fn flag_takes_precedence_over_environment() {
        let config =
            Config::try_parse_from(["backend", "--db-dsn", "postgres://flag/db"]).expect("parse");
        assert_eq!(config.dsn().as_deref(), Some("postgres://flag/db"));
    }
}
