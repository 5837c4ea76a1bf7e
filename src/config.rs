//! Application Configuration

use log::LevelFilter;

/// Storage key holding the active list
pub const ACTIVE_KEY: &str = "todos";
/// Storage key holding the removed list
pub const REMOVED_KEY: &str = "removedTodos";

/// Keys the two lists are stored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub active: String,
    pub removed: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            active: ACTIVE_KEY.to_string(),
            removed: REMOVED_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_keys: StorageKeys,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self {
            storage_keys: StorageKeys::default(),
            log_level,
        }
    }
}
