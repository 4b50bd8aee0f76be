use yew::prelude::*;

use crate::models::{error::AppError, settings::Preferences};
use crate::services::storage::{self, PREFERENCES_KEY};

/// Handle returned by `use_preferences` hook
#[derive(Clone, PartialEq)]
pub struct PreferencesHandle {
    pub preferences: Preferences,
    pub save: Callback<Preferences, Result<(), AppError>>,
}

/// Saved settings, loaded from localStorage. `save` writes through to
/// storage and only updates state once the write succeeds.
/// Callers validate before emitting on `save`.
#[hook]
pub fn use_preferences() -> PreferencesHandle {
    let preferences = use_state(|| storage::load::<Preferences>(PREFERENCES_KEY).unwrap_or_default());

    let save = {
        let preferences = preferences.clone();
        Callback::from(move |next: Preferences| {
            if let Err(e) = storage::save(PREFERENCES_KEY, &next) {
                gloo::console::warn!(format!("Failed to save preferences: {e}"));
                return Err(e);
            }
            preferences.set(next);
            Ok(())
        })
    };

    PreferencesHandle {
        preferences: (*preferences).clone(),
        save,
    }
}
