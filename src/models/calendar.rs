use chrono::{Datelike, Duration, Months, NaiveDate};

use super::date_range::{DateInterval, start_of_day};

/// Column headers for the Sunday-first grid
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const GRID_WEEKS: i64 = 6;

/// A month shown in the range calendar, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub in_month: bool,
}

/// How a day relates to the current selection, for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Unselected,
    Single,
    RangeStart,
    RangeMiddle,
    RangeEnd,
}

impl DayState {
    pub fn css_class(&self) -> &'static str {
        match self {
            DayState::Unselected => "",
            DayState::Single => "day-selected",
            DayState::RangeStart => "day-selected day-range-start",
            DayState::RangeMiddle => "day-range-middle",
            DayState::RangeEnd => "day-selected day-range-end",
        }
    }
}

impl CalendarMonth {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - Duration::days(i64::from(date.day0())),
        }
    }

    /// Month the calendar opens on: the month of the selection's start, or
    /// the month before `today` so that today's month sits on the right.
    pub fn initial(range: &DateInterval, today: NaiveDate) -> Self {
        match range.from() {
            Some(from) => Self::containing(from.date()),
            None => Self::containing(today).prev(),
        }
    }

    pub const fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(*self, |first| Self { first })
    }

    pub fn prev(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(*self, |first| Self { first })
    }

    /// `count` consecutive months starting with this one.
    pub fn run(&self, count: usize) -> Vec<Self> {
        std::iter::successors(Some(*self), |m| Some(m.next()))
            .take(count)
            .collect()
    }

    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.first.year() && date.month() == self.first.month()
    }

    /// Six Sunday-first weeks covering the month.
    pub fn weeks(&self) -> Vec<[CalendarDay; 7]> {
        let offset = i64::from(self.first.weekday().num_days_from_sunday());
        let grid_start = self.first - Duration::days(offset);

        (0..GRID_WEEKS)
            .map(|week| {
                std::array::from_fn(|weekday| {
                    let date = grid_start + Duration::days(week * 7 + weekday as i64);
                    CalendarDay {
                        date,
                        in_month: self.contains(date),
                    }
                })
            })
            .collect()
    }
}

/// Forward-dated days cannot be picked.
pub fn is_selectable(day: NaiveDate, today: NaiveDate) -> bool {
    day <= today
}

/// Applies a range-mode click on `day` to `range`. `None` clears the
/// selection. Produced bounds sit at the start of their day.
pub fn add_to_range(range: &DateInterval, day: NaiveDate) -> Option<DateInterval> {
    let point = |d: NaiveDate| DateInterval::starting_at(start_of_day(d));
    let span = |a: NaiveDate, b: NaiveDate| DateInterval::spanning(start_of_day(a), start_of_day(b));

    let from = range.from().map(|f| f.date());
    let to = range.to().map(|t| t.date());

    match (from, to) {
        (Some(from), Some(to)) => {
            if from == day && to == day {
                None
            } else if to == day {
                Some(point(to))
            } else if from == day {
                None
            } else if day < from {
                Some(span(day, to))
            } else {
                Some(span(from, day))
            }
        }
        (Some(from), None) => Some(span(from, day)),
        (None, Some(to)) => Some(span(day, to)),
        (None, None) => Some(point(day)),
    }
}

pub fn day_state(day: NaiveDate, range: &DateInterval) -> DayState {
    let from = range.from().map(|f| f.date());
    let to = range.to().map(|t| t.date());

    match (from, to) {
        (Some(from), Some(to)) if from == to && day == from => DayState::Single,
        (Some(from), Some(_)) if day == from => DayState::RangeStart,
        (Some(_), Some(to)) if day == to => DayState::RangeEnd,
        (Some(from), Some(to)) if from < day && day < to => DayState::RangeMiddle,
        (Some(from), None) if day == from => DayState::Single,
        _ => DayState::Unselected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_starts_on_sunday() {
        // 1 Jan 2026 is a Thursday
        let weeks = CalendarMonth::containing(date(2026, 1, 15)).weeks();
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][0].date, date(2025, 12, 28));
        assert!(!weeks[0][0].in_month);
        assert_eq!(weeks[0][4].date, date(2026, 1, 1));
        assert!(weeks[0][4].in_month);
    }

    #[test]
    fn test_month_navigation_crosses_year() {
        let december = CalendarMonth::containing(date(2025, 12, 31));
        assert_eq!(december.next().first_day(), date(2026, 1, 1));
        assert_eq!(december.next().prev(), december);
        assert_eq!(december.title(), "December 2025");
    }

    #[test]
    fn test_initial_month_without_selection() {
        let month = CalendarMonth::initial(&DateInterval::EMPTY, date(2026, 3, 10));
        assert_eq!(month.first_day(), date(2026, 2, 1));
    }

    #[test]
    fn test_day_state_for_range() {
        let range = DateInterval::spanning(start_of_day(date(2026, 1, 1)), start_of_day(date(2026, 1, 5)));
        assert_eq!(day_state(date(2026, 1, 1), &range), DayState::RangeStart);
        assert_eq!(day_state(date(2026, 1, 3), &range), DayState::RangeMiddle);
        assert_eq!(day_state(date(2026, 1, 5), &range), DayState::RangeEnd);
        assert_eq!(day_state(date(2026, 1, 6), &range), DayState::Unselected);
    }
}
