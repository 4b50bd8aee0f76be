use gloo_storage::{LocalStorage, Storage};
use serde::{Serialize, de::DeserializeOwned};

use crate::models::error::AppError;

pub const THEME_KEY: &str = "theme";
pub const PREFERENCES_KEY: &str = "preferences";

/// Reads a saved value, or `None` if it is missing or unreadable.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    match LocalStorage::get(key) {
        Ok(value) => Some(value),
        Err(e) => {
            gloo::console::warn!(format!("No saved {key}, using defaults: {e}"));
            None
        }
    }
}

pub fn save<T: Serialize>(key: &str, value: &T) -> Result<(), AppError> {
    LocalStorage::set(key, value).map_err(|e| AppError::Storage(format!("{key}: {e}")))
}
