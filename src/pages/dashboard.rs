use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{
    Chart, ChartSeries, ChartSpec, DateRangePicker, StatCard, StatVariant,
    recent_activities::RecentActivities, today_stats::TodayStats,
};
use crate::config::Config;
use crate::hooks::{use_date_range::use_date_range, use_store::StoreHandle, use_toast::Toaster};
use crate::models::{
    date_range::{DateInterval, local_now, start_of_day},
    metrics::DailyMetric,
    settings::LoyaltySettings,
};
use crate::services::{
    clipboard,
    repository::{ActivityRepository, CustomerRepository, MetricsRepository},
};
use crate::utils::format::{day_axis_label, format_currency, group_thousands};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub store: StoreHandle,
    pub toaster: Toaster,
    pub loyalty: LoyaltySettings,
    pub dark_mode: bool,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let date_range = use_date_range();
    let interval = date_range.selection.interval();

    let metrics = use_memo((props.store.clone(), interval), |(store, interval)| {
        store.daily_metrics(interval)
    });
    let comparison = props.store.compare_with_previous(&interval);
    let summary = comparison
        .as_ref()
        .map(|c| c.current.clone())
        .unwrap_or_else(|| props.store.summarize(&interval));

    let today = local_now().date();
    let unverified_orders = props
        .store
        .daily_metrics(&DateInterval::starting_at(start_of_day(today)))
        .first()
        .map_or(0, |day| day.orders - day.scanned_orders);
    let rewards_value = props
        .loyalty
        .redemption_value(props.store.redeemed_points());

    let visits_chart = use_memo(metrics.clone(), |metrics| visits_spec(metrics));
    let customer_mix = use_memo(props.store.clone(), |store| {
        ChartSpec::Donut {
            slices: store.customer_mix(),
        }
    });

    let copy_pos_url = {
        let toaster = props.toaster.clone();
        Callback::from(move |_: MouseEvent| {
            let toaster = toaster.clone();
            spawn_local(async move {
                match clipboard::copy_text(Config::POS_URL).await {
                    Ok(()) => toaster.success("POS URL copied to clipboard!"),
                    Err(e) => toaster.error(e.to_string()),
                }
            });
        })
    };

    let pos_suffix = Config::POS_URL.rsplit('/').next().unwrap_or(Config::POS_URL);

    html! {
        <div class="page dashboard">
            <div class="page-toolbar">
                <DateRangePicker
                    selection={date_range.selection}
                    on_change={date_range.on_change.clone()}
                />
                <button type="button" class="button button-outline pos-link" onclick={copy_pos_url}>
                    <span class="pos-url">{ format!("POS: ...{pos_suffix}") }</span>
                    <span>{"📋 Copy"}</span>
                </button>
            </div>

            <div class="stat-grid">
                <StatCard
                    title="Customer Visits"
                    value={group_thousands(summary.visits)}
                    subtitle={date_range.selection.display_label()}
                    icon="👣"
                    variant={StatVariant::Primary}
                    trend={comparison.as_ref().and_then(|c| c.visits_change())}
                />
                <StatCard
                    title="Revenue"
                    value={format_currency(summary.revenue as f64)}
                    subtitle={date_range.selection.display_label()}
                    icon="₹"
                    variant={StatVariant::Success}
                    trend={comparison.as_ref().and_then(|c| c.revenue_change())}
                />
                <StatCard
                    title="Orders"
                    value={group_thousands(summary.orders)}
                    subtitle={format!("{} scanned with QR", group_thousands(summary.scanned_orders))}
                    icon="🛒"
                    variant={StatVariant::Accent}
                    trend={comparison.as_ref().and_then(|c| c.orders_change())}
                />
                <StatCard
                    title="Avg Order Value"
                    value={format_currency(summary.average_order_value())}
                    icon="📊"
                    variant={StatVariant::Warning}
                    trend={comparison.as_ref().and_then(|c| c.average_order_value_change())}
                />
            </div>

            <TodayStats
                total_customers={props.store.list_customers().len()}
                {unverified_orders}
                {rewards_value}
            />

            <div class="chart-grid">
                <div class="card chart-card chart-card-wide">
                    <h3 class="card-title">{"Customer Visits"}</h3>
                    if metrics.is_empty() {
                        <p class="empty-state">{"Select a date range to see visits"}</p>
                    } else {
                        <Chart id="visits-chart" spec={visits_chart} dark_mode={props.dark_mode} />
                    }
                </div>
                <div class="card chart-card">
                    <h3 class="card-title">{"Customer Mix"}</h3>
                    <Chart id="customer-mix-chart" spec={customer_mix} dark_mode={props.dark_mode} />
                </div>
            </div>

            <RecentActivities
                activities={props.store.recent_activities(Config::RECENT_ACTIVITY_LIMIT).to_vec()}
            />
        </div>
    }
}

fn visits_spec(metrics: &[DailyMetric]) -> ChartSpec {
    ChartSpec::Trend {
        labels: metrics
            .iter()
            .map(|day| day_axis_label(day.date, metrics.len()))
            .collect(),
        area: ChartSeries {
            name: "Visits",
            values: metrics.iter().map(|day| f64::from(day.visits)).collect(),
            color: "hsl(24, 95%, 53%)",
        },
        line: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_visits_spec_uses_weekday_labels_for_a_week() {
        let metrics: Vec<DailyMetric> = NaiveDate::from_ymd_opt(2026, 2, 2)
            .unwrap()
            .iter_days()
            .take(7)
            .map(|date| DailyMetric {
                date,
                visits: 3,
                revenue: 100,
                orders: 2,
                scanned_orders: 2,
            })
            .collect();

        let ChartSpec::Trend { labels, area, line } = visits_spec(&metrics) else {
            panic!("expected a trend chart");
        };
        assert_eq!(labels.first().map(String::as_str), Some("Mon"));
        assert_eq!(area.values, vec![3.0; 7]);
        assert!(line.is_none());
    }
}
