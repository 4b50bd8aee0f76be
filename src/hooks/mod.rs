pub mod use_date_range;
pub mod use_preferences;
pub mod use_store;
pub mod use_theme;
pub mod use_toast;
