use std::net::SocketAddr;

use crate::domain::collection::DEFAULT_RECENT_LIMIT;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid GROCY_ADDR {0:?}")]
    Addr(String),
    #[error("invalid GROCY_SEED {0:?} (expected `sample` or `empty`)")]
    Seed(String),
    #[error("invalid GROCY_RECENT_LIMIT {0:?} (expected a positive integer)")]
    RecentLimit(String),
}

/// Data the collection starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Sample,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub seed: Seed,
    pub recent_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("GROCY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr.parse::<SocketAddr>().map_err(|_| ConfigError::Addr(addr))?;

        let seed = match lookup("GROCY_SEED").as_deref().map(str::trim) {
            None | Some("sample") => Seed::Sample,
            Some("empty") => Seed::Empty,
            Some(other) => return Err(ConfigError::Seed(other.to_string())),
        };

        let recent_limit = match lookup("GROCY_RECENT_LIMIT") {
            None => DEFAULT_RECENT_LIMIT,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::RecentLimit(raw)),
            },
        };

        Ok(Self { addr, seed, recent_limit })
    }
}
