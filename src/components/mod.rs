pub mod chart;
pub mod date_range_picker;
pub mod dialog;
pub mod form;
pub mod header;
pub mod range_calendar;
pub mod recent_activities;
pub mod sidebar;
pub mod stat_card;
pub mod theme_toggle;
pub mod toast;
pub mod today_stats;

pub use chart::{Chart, ChartSeries, ChartSpec};
pub use date_range_picker::DateRangePicker;
pub use dialog::Dialog;
pub use header::Header;
pub use sidebar::Sidebar;
pub use stat_card::{StatCard, StatVariant};
pub use toast::ToastStack;
