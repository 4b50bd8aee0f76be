use yew::prelude::*;

use crate::utils::format::{format_currency, group_thousands};

#[derive(Properties, PartialEq)]
pub struct TodayStatsProps {
    pub total_customers: usize,
    /// Today's bills settled without a loyalty scan
    pub unverified_orders: u32,
    pub rewards_value: f64,
}

#[function_component(TodayStats)]
pub fn today_stats(props: &TodayStatsProps) -> Html {
    let stats = [
        ("👥", "Total Customers", group_thousands(props.total_customers as u64), "today-stat today-stat-primary"),
        ("🧾", "Bills Without QR Scan", group_thousands(u64::from(props.unverified_orders)), "today-stat today-stat-warning"),
        ("🎁", "Rewards Redeemed", format_currency(props.rewards_value), "today-stat today-stat-success"),
    ];

    html! {
        <div class="card today-stats">
            <h3 class="card-title">{"Today's Snapshot"}</h3>
            <div class="today-stats-grid">
                { for stats.into_iter().map(|(icon, label, value, class)| html! {
                    <div {class} key={label}>
                        <span class="today-stat-icon">{ icon }</span>
                        <div>
                            <p class="today-stat-label">{ label }</p>
                            <p class="today-stat-value">{ value }</p>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
