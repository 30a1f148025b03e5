//! Runtime settings, read from the environment (and `.env` when present).
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `INVENTORY_NODE_ID` | `1` | node id for this process's [`IdGenerator`](crate::id_gen::IdGenerator) |
//! | `INVENTORY_CHANNEL_CAPACITY` | `32` | product actor mailbox size |

use std::env;

use crate::id_gen::{ConfigError, MAX_NODES};

pub const NODE_ID_VAR: &str = "INVENTORY_NODE_ID";
pub const CHANNEL_CAPACITY_VAR: &str = "INVENTORY_CHANNEL_CAPACITY";

pub const DEFAULT_NODE_ID: i64 = 1;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub node_id: i64,
    pub channel_capacity: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            node_id: DEFAULT_NODE_ID,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl InventoryConfig {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Missing keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let node_id = match lookup(NODE_ID_VAR) {
            Some(raw) => {
                let node_id = parse(NODE_ID_VAR, &raw)?;
                if !(0..MAX_NODES).contains(&node_id) {
                    return Err(ConfigError::InvalidNodeId { node_id });
                }
                node_id
            }
            None => DEFAULT_NODE_ID,
        };

        let channel_capacity = match lookup(CHANNEL_CAPACITY_VAR) {
            Some(raw) => match parse::<usize>(CHANNEL_CAPACITY_VAR, &raw)? {
                0 => return Err(invalid(CHANNEL_CAPACITY_VAR, &raw)),
                capacity => capacity,
            },
            None => DEFAULT_CHANNEL_CAPACITY,
        };

        Ok(Self {
            node_id,
            channel_capacity,
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| invalid(key, raw))
}

fn invalid(key: &'static str, raw: &str) -> ConfigError {
    ConfigError::InvalidSetting {
        key,
        value: raw.to_string(),
    }
}
