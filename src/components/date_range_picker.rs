use yew::prelude::*;

use crate::components::range_calendar::RangeCalendar;
use crate::models::date_range::{DateInterval, DateRangeSelection, Preset, local_now};

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    pub selection: DateRangeSelection,
    pub on_change: Callback<DateRangeSelection>,
}

/// Preset buttons plus a popover with a two-month range calendar.
///
/// The picker holds no selection of its own: every edit is emitted through
/// `on_change` and the owner passes the result back in `selection`. Only
/// whether the popover is open lives here.
#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let is_open = use_state(|| false);
    let selection = props.selection;

    let select_preset = {
        let on_change = props.on_change.clone();
        Callback::from(move |preset: Preset| {
            let mut next = selection;
            next.select_preset(preset, local_now());
            on_change.emit(next);
        })
    };

    let select_custom = {
        let on_change = props.on_change.clone();
        Callback::from(move |range: Option<DateInterval>| {
            let mut next = selection;
            next.select_custom_range(range);
            on_change.emit(next);
        })
    };

    let reset = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = selection;
            next.reset(local_now());
            on_change.emit(next);
        })
    };

    let toggle_open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    // Inside the popover a preset pick also closes it
    let preset_buttons = |class: &'static str, closes: bool| -> Html {
        Preset::all()
            .iter()
            .map(|&preset| {
                let active = selection.active_preset() == Some(preset);
                let class = format!("{class}{}", if active { " active" } else { "" });
                let onclick = {
                    let select_preset = select_preset.clone();
                    let is_open = is_open.clone();
                    Callback::from(move |_: MouseEvent| {
                        select_preset.emit(preset);
                        if closes {
                            is_open.set(false);
                        }
                    })
                };
                html! {
                    <button type="button" key={preset.days()} {class} {onclick}>
                        { preset.label() }
                    </button>
                }
            })
            .collect()
    };

    let trigger_class = if selection.interval().is_empty() {
        "date-range-trigger placeholder"
    } else if selection.is_custom() {
        "date-range-trigger custom"
    } else {
        "date-range-trigger"
    };

    let today = local_now().date();

    html! {
        <div class="date-range-picker">
            <div class="preset-group">
                { preset_buttons("preset-button", false) }
            </div>

            <button type="button" class={trigger_class} onclick={toggle_open}>
                <span class="date-range-icon">{"📅"}</span>
                <span>{ selection.display_label() }</span>
            </button>

            if *is_open {
                <div class="popover-backdrop" onclick={close.clone()} />
                <div class="date-range-popover">
                    <div class="preset-group preset-group-mobile">
                        { preset_buttons("preset-button", true) }
                    </div>
                    <div class="popover-header">
                        <p class="popover-title">{"Custom Range"}</p>
                        <p class="popover-subtitle">{"Select start and end dates"}</p>
                    </div>
                    <RangeCalendar
                        range={selection.interval()}
                        {today}
                        on_select={select_custom}
                    />
                    <div class="popover-footer">
                        <span class="selected-count">
                            if let Some(count) = selection.selected_day_count() {
                                { format!("{count} days selected") }
                            }
                        </span>
                        <div class="popover-actions">
                            <button type="button" class="button button-outline" onclick={reset}>
                                {"Reset"}
                            </button>
                            <button type="button" class="button button-primary" onclick={close}>
                                {"Apply"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
