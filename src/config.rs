/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Preset applied at mount and by the picker's Reset control
    pub const DEFAULT_PRESET_DAYS: u32 = 7;

    /// Number of months rendered side by side in the range calendar
    pub const CALENDAR_MONTHS: usize = 2;

    /// How long a toast stays on screen in milliseconds
    pub const TOAST_DURATION_MS: u32 = 4_000;

    /// Required length of a customer mobile number
    pub const MOBILE_NUMBER_LEN: usize = 10;

    /// Rows shown in the recent activity feed
    pub const RECENT_ACTIVITY_LIMIT: usize = 8;

    /// Delay before charts re-render after a window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Point-of-sale URL shared with staff devices
    pub const POS_URL: &'static str = "https://pos.example.com/r/825d91c2";
}
