//! Server configuration.
//!
//! Read from environment variables, falling back to defaults suitable for
//! local use:
//!
//! - `BOOKTRACK_ADDR` — bind address, default `127.0.0.1:3000`
//! - `BOOKTRACK_DATA_DIR` — data directory, default `./data`

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the booktrack server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub addr: String,
    /// Root directory of the JSON file store.
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl Config {
    /// Load configuration from the environment, using defaults for any
    /// variable that is unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            addr: env::var("BOOKTRACK_ADDR").unwrap_or(defaults.addr),
            data_dir: env::var("BOOKTRACK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        }
    }
}
