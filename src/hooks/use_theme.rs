use gloo::events::EventListener;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::services::storage::{self, THEME_KEY};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Colour scheme preference
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto, // Follow system preference
}

impl Theme {
    /// Resolves `Auto` against the system scheme.
    pub fn resolve(self, system: Theme) -> Theme {
        match self {
            Theme::Auto => system,
            other => other,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Handle returned by use_theme hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub effective_theme: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| storage::load::<Theme>(THEME_KEY).unwrap_or_default());
    let system_preference = use_state(detect_system_preference);

    let effective_theme = theme.resolve(*system_preference);

    use_effect_with(effective_theme, move |theme| {
        apply_theme_to_dom(*theme);
        || ()
    });

    {
        let system_preference = system_preference.clone();
        use_effect_with((), move |_| {
            let listener = watch_system_preference(system_preference.setter());
            move || drop(listener)
        });
    }

    use_effect_with(*theme, move |theme| {
        if let Err(e) = storage::save(THEME_KEY, theme) {
            gloo::console::warn!(e.to_string());
        }
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        let system = *system_preference;
        Callback::from(move |()| theme.set(theme.resolve(system).toggled()))
    };

    ThemeHandle {
        theme: *theme,
        effective_theme,
        toggle,
    }
}

fn detect_system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map_or(Theme::Light, |mq| {
            if mq.matches() { Theme::Dark } else { Theme::Light }
        })
}

/// Sets `data-theme` on <html> so the stylesheet can switch palettes
fn apply_theme_to_dom(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let value = if theme.is_dark() { "dark" } else { "light" };
    if let Err(e) = html.set_attribute("data-theme", value) {
        gloo::console::warn!(format!("Failed to apply theme: {e:?}"));
    }
}

fn watch_system_preference(setter: UseStateSetter<Theme>) -> Option<EventListener> {
    let query = web_sys::window()?.match_media(DARK_QUERY).ok().flatten()?;
    let target = query.dyn_into::<web_sys::EventTarget>().ok()?;
    Some(EventListener::new(&target, "change", move |_| {
        setter.set(detect_system_preference());
    }))
}
