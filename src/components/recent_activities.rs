use yew::prelude::*;

use crate::models::activity::Activity;
use crate::utils::format::{format_currency, group_thousands};

#[derive(Properties, PartialEq)]
pub struct RecentActivitiesProps {
    pub activities: Vec<Activity>,
}

#[function_component(RecentActivities)]
pub fn recent_activities(props: &RecentActivitiesProps) -> Html {
    html! {
        <div class="card recent-activities">
            <h3 class="card-title">{"Recent Activity"}</h3>
            if props.activities.is_empty() {
                <p class="empty-state">{"No activity yet"}</p>
            } else {
                <ul class="activity-list">
                    { for props.activities.iter().map(activity_row) }
                </ul>
            }
        </div>
    }
}

fn activity_row(activity: &Activity) -> Html {
    let detail = match (&activity.item_name, activity.amount) {
        (Some(item), _) => item.clone(),
        (None, Some(amount)) => format!("Bill of {}", format_currency(f64::from(amount))),
        (None, None) => String::new(),
    };

    html! {
        <li class={format!("activity-row {}", activity.action.css_class())} key={activity.id}>
            <span class="avatar">{ &activity.customer_initials }</span>
            <div class="activity-body">
                <p class="activity-title">
                    <span class="activity-icon">{ activity.action.icon() }</span>
                    { activity.action.label() }
                </p>
                <p class="activity-meta">{ format!("{} · {detail}", activity.customer_mobile) }</p>
            </div>
            <div class="activity-side">
                <p class="activity-points">
                    { format!("{}{} pts", activity.action.points_sign(), group_thousands(u64::from(activity.points))) }
                </p>
                <p class="activity-time" title={activity.timestamp.clone()}>{ &activity.time_ago }</p>
            </div>
        </li>
    }
}
