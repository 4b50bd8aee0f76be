use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use super::error::AppError;
use crate::config::Config;

const LAST_INSTANT: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// Current local wall-clock time, the reference point for presets
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(LAST_INSTANT)
}

/// A quick-select window of `days` calendar days ending today (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Preset {
    label: &'static str,
    days: u32,
}

impl Preset {
    pub const LAST_7_DAYS: Self = Self {
        label: "7 Days",
        days: 7,
    };
    pub const LAST_30_DAYS: Self = Self {
        label: "30 Days",
        days: 30,
    };
    pub const LAST_90_DAYS: Self = Self {
        label: "90 Days",
        days: 90,
    };

    /// Button text, e.g. "7 Days"
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Window length in days, always at least one
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// The fixed preset catalog, in display order.
    pub fn all() -> &'static [Preset] {
        &[Self::LAST_7_DAYS, Self::LAST_30_DAYS, Self::LAST_90_DAYS]
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.days == days)
    }

    /// Interval from the start of `days - 1` days ago to the end of today.
    pub fn interval_at(&self, now: NaiveDateTime) -> DateInterval {
        let today = now.date();
        let first = today - Duration::days(i64::from(self.days) - 1);
        DateInterval {
            from: Some(start_of_day(first)),
            to: Some(end_of_day(today)),
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::from_days(Config::DEFAULT_PRESET_DAYS).unwrap_or(Self::LAST_7_DAYS)
    }
}

/// Reporting window. Both ends absent means nothing is selected yet; `from`
/// alone is a selection in progress. When both are present `from <= to`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateInterval {
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
}

impl DateInterval {
    pub const EMPTY: Self = Self {
        from: None,
        to: None,
    };

    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self, AppError> {
        if from > to {
            return Err(AppError::InvalidRange);
        }
        Ok(Self {
            from: Some(from),
            to: Some(to),
        })
    }

    /// Whole-day interval covering `first` through `last`.
    pub fn between_dates(first: NaiveDate, last: NaiveDate) -> Result<Self, AppError> {
        Self::new(start_of_day(first), end_of_day(last))
    }

    /// Interval between two instants given in either order.
    pub fn spanning(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        Self {
            from: Some(a.min(b)),
            to: Some(a.max(b)),
        }
    }

    /// A selection with only its start chosen.
    pub const fn starting_at(from: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    pub const fn from(&self) -> Option<NaiveDateTime> {
        self.from
    }

    pub const fn to(&self) -> Option<NaiveDateTime> {
        self.to
    }

    pub const fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub const fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Inclusive number of calendar days, `None` unless both ends are set.
    pub fn day_count(&self) -> Option<u32> {
        let (from, to) = (self.from?, self.to?);
        u32::try_from((to - from).num_days() + 1).ok()
    }

    /// Whether `date` falls inside the window. A start-only selection
    /// covers its single day.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from.date() <= date && date <= to.date(),
            (Some(from), None) => from.date() == date,
            _ => false,
        }
    }

    /// Every calendar day in the window, oldest first.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let Some(first) = self.from.map(|f| f.date()) else {
            return Vec::new();
        };
        let last = self.to.map_or(first, |t| t.date());
        first.iter_days().take_while(|d| *d <= last).collect()
    }

    /// The window of equal length that ends the day before this one starts.
    pub fn previous_period(&self) -> Option<Self> {
        let days = self.day_count()?;
        let last = self.from?.date().pred_opt()?;
        let first = last - Duration::days(i64::from(days) - 1);
        Self::between_dates(first, last).ok()
    }
}

/// Provenance of the current interval. A custom range whose span happens
/// to equal a preset's is still `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Preset(Preset),
    Custom,
}

/// The interval together with the mode that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeSelection {
    mode: SelectionMode,
    interval: DateInterval,
}

impl DateRangeSelection {
    /// Default selection: the default preset relative to `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self::with_preset(Preset::default(), now)
    }

    pub fn with_preset(preset: Preset, now: NaiveDateTime) -> Self {
        Self {
            mode: SelectionMode::Preset(preset),
            interval: preset.interval_at(now),
        }
    }

    pub fn select_preset(&mut self, preset: Preset, now: NaiveDateTime) {
        *self = Self::with_preset(preset, now);
    }

    /// Calendar edit. Always leaves preset mode, whatever the range.
    pub fn select_custom_range(&mut self, range: Option<DateInterval>) {
        self.mode = SelectionMode::Custom;
        self.interval = range.unwrap_or_default();
    }

    pub fn reset(&mut self, now: NaiveDateTime) {
        self.select_preset(Preset::default(), now);
    }

    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub const fn interval(&self) -> DateInterval {
        self.interval
    }

    pub const fn active_preset(&self) -> Option<Preset> {
        match self.mode {
            SelectionMode::Preset(preset) => Some(preset),
            SelectionMode::Custom => None,
        }
    }

    pub const fn is_custom(&self) -> bool {
        matches!(self.mode, SelectionMode::Custom)
    }

    /// Text for the picker's trigger button.
    pub fn display_label(&self) -> String {
        if let Some(preset) = self.active_preset() {
            return format!("Last {} Days", preset.days());
        }
        match (self.interval.from, self.interval.to) {
            (Some(from), Some(to)) => {
                format!("{} - {}", from.format("%b %-d"), to.format("%b %-d, %Y"))
            }
            (Some(from), None) => from.format("%b %-d, %Y").to_string(),
            _ => "Select dates".to_string(),
        }
    }

    pub fn selected_day_count(&self) -> Option<u32> {
        self.interval.day_count()
    }
}
