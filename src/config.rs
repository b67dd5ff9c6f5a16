use std::net::SocketAddr;
use std::path::PathBuf;

/// Default database file, relative to the working directory.
const DEFAULT_DB_PATH: &str = "todos.db";

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub db_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `TODO_DB_PATH` (optional, default `todos.db`) — SQLite database file
    /// - `TODO_BIND_ADDR` (optional, default `127.0.0.1:3000`) — listen address
    pub fn from_env() -> Result<Self, String> {
        let db_path = std::env::var("TODO_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        let bind_addr = match std::env::var("TODO_BIND_ADDR") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|_| {
                "TODO_BIND_ADDR must be a socket address like 127.0.0.1:3000".to_string()
            })?,
            Err(_) => DEFAULT_BIND_ADDR
                .parse()
                .expect("default bind address must parse"),
        };

        Ok(Self { db_path, bind_addr })
    }
}
