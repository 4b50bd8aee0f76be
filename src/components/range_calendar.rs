use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

use crate::config::Config;
use crate::models::{
    calendar::{CalendarDay, CalendarMonth, WEEKDAY_LABELS, add_to_range, day_state, is_selectable},
    date_range::DateInterval,
};

#[derive(Properties, PartialEq)]
pub struct RangeCalendarProps {
    pub range: DateInterval,
    pub today: NaiveDate,
    /// Receives the range after each click; `None` clears the selection
    pub on_select: Callback<Option<DateInterval>>,
}

/// Side-by-side month grids in range mode. Days after `today` are disabled.
#[function_component(RangeCalendar)]
pub fn range_calendar(props: &RangeCalendarProps) -> Html {
    let first_month = {
        let range = props.range;
        let today = props.today;
        use_state(move || CalendarMonth::initial(&range, today))
    };

    let months = first_month.run(Config::CALENDAR_MONTHS);
    let can_go_next = months
        .last()
        .is_some_and(|last| *last < CalendarMonth::containing(props.today));

    let on_prev = {
        let first_month = first_month.clone();
        Callback::from(move |_: MouseEvent| first_month.set(first_month.prev()))
    };
    let on_next = {
        let first_month = first_month.clone();
        Callback::from(move |_: MouseEvent| first_month.set(first_month.next()))
    };

    html! {
        <div class="range-calendar">
            <div class="calendar-nav">
                <button type="button" class="calendar-nav-button" onclick={on_prev} aria-label="Previous month">
                    {"‹"}
                </button>
                <button
                    type="button"
                    class="calendar-nav-button"
                    onclick={on_next}
                    disabled={!can_go_next}
                    aria-label="Next month"
                >
                    {"›"}
                </button>
            </div>
            <div class="calendar-months">
                { for months.iter().map(|month| render_month(month, props)) }
            </div>
        </div>
    }
}

fn render_month(month: &CalendarMonth, props: &RangeCalendarProps) -> Html {
    html! {
        <div class="calendar-month" key={month.title()}>
            <div class="calendar-caption">{ month.title() }</div>
            <table class="calendar-table">
                <thead>
                    <tr>
                        { for WEEKDAY_LABELS.iter().map(|label| html! {
                            <th class="calendar-head-cell">{ *label }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    { for month.weeks().iter().map(|week| html! {
                        <tr>{ for week.iter().map(|day| render_day(day, props)) }</tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn render_day(day: &CalendarDay, props: &RangeCalendarProps) -> Html {
    // Neighbouring months' days are placeholders; each date is clickable in one grid only
    if !day.in_month {
        return html! {
            <td class="calendar-cell">
                <span class="day day-outside">{ day.date.day() }</span>
            </td>
        };
    }

    let selectable = is_selectable(day.date, props.today);
    let mut class = format!("day {}", day_state(day.date, &props.range).css_class());
    if day.date == props.today {
        class.push_str(" day-today");
    }

    let onclick = selectable.then(|| {
        let on_select = props.on_select.clone();
        let range = props.range;
        let date = day.date;
        Callback::from(move |_: MouseEvent| on_select.emit(add_to_range(&range, date)))
    });

    html! {
        <td class="calendar-cell">
            <button type="button" {class} {onclick} disabled={!selectable}>
                { day.date.day() }
            </button>
        </td>
    }
}
