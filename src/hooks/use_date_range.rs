use yew::prelude::*;

use crate::models::date_range::{DateRangeSelection, local_now};

/// Handle returned by `use_date_range`
#[derive(Clone, PartialEq)]
pub struct DateRangeHandle {
    pub selection: DateRangeSelection,
    pub on_change: Callback<DateRangeSelection>,
}

/// Page-owned reporting window, starting on the default preset. Lives as
/// long as the page and is never persisted.
#[hook]
pub fn use_date_range() -> DateRangeHandle {
    let selection = use_state(|| DateRangeSelection::new(local_now()));

    let on_change = {
        let selection = selection.clone();
        Callback::from(move |next: DateRangeSelection| {
            gloo::console::log!(format!("Date range: {}", next.display_label()));
            selection.set(next);
        })
    };

    DateRangeHandle {
        selection: *selection,
        on_change,
    }
}
