use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{Chart, ChartSeries, ChartSpec, DateRangePicker, StatCard, StatVariant};
use crate::hooks::{use_date_range::use_date_range, use_store::StoreHandle, use_toast::Toaster};
use crate::models::metrics::{DailyMetric, HourlyOrders};
use crate::services::{clipboard, export, repository::MetricsRepository};
use crate::utils::format::{day_axis_label, format_currency, group_thousands};

#[derive(Properties, PartialEq)]
pub struct AnalyticsProps {
    pub store: StoreHandle,
    pub toaster: Toaster,
    pub dark_mode: bool,
}

#[function_component(Analytics)]
pub fn analytics(props: &AnalyticsProps) -> Html {
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

    let revenue_chart = use_memo(metrics.clone(), |metrics| revenue_spec(metrics));
    let category_chart = use_memo(props.store.clone(), |store| ChartSpec::Donut {
        slices: store.category_share(),
    });
    let peak_hours_chart = use_memo(props.store.clone(), |store| {
        peak_hours_spec(&store.hourly_orders())
    });

    let on_export = {
        let toaster = props.toaster.clone();
        let metrics = metrics.clone();
        Callback::from(move |_: MouseEvent| {
            let json = match export::metrics_to_json(&interval, &metrics) {
                Ok(json) => json,
                Err(e) => {
                    toaster.error(e.to_string());
                    return;
                }
            };

            let toaster = toaster.clone();
            let days = metrics.len();
            spawn_local(async move {
                match clipboard::copy_text(&json).await {
                    Ok(()) => toaster.success(format!("Exported {days} days of metrics to clipboard")),
                    Err(e) => toaster.error(e.to_string()),
                }
            });
        })
    };

    html! {
        <div class="page analytics">
            <div class="page-toolbar">
                <DateRangePicker
                    selection={date_range.selection}
                    on_change={date_range.on_change.clone()}
                />
                <button type="button" class="button button-outline" onclick={on_export}>
                    {"⬇ Export"}
                </button>
            </div>

            <div class="stat-grid">
                <StatCard
                    title="Total Revenue"
                    value={format_currency(summary.revenue as f64)}
                    icon="₹"
                    variant={StatVariant::Success}
                    trend={comparison.as_ref().and_then(|c| c.revenue_change())}
                />
                <StatCard
                    title="Avg Order Value"
                    value={format_currency(summary.average_order_value())}
                    icon="📊"
                    variant={StatVariant::Primary}
                    trend={comparison.as_ref().and_then(|c| c.average_order_value_change())}
                />
                <StatCard
                    title="Total Orders"
                    value={group_thousands(summary.orders)}
                    icon="🛒"
                    variant={StatVariant::Accent}
                    trend={comparison.as_ref().and_then(|c| c.orders_change())}
                />
                <StatCard
                    title="Customer Visits"
                    value={group_thousands(summary.visits)}
                    icon="👣"
                    variant={StatVariant::Warning}
                    trend={comparison.as_ref().and_then(|c| c.visits_change())}
                />
            </div>

            <div class="chart-grid">
                <div class="card chart-card chart-card-wide">
                    <h3 class="card-title">{"Revenue & Orders"}</h3>
                    if metrics.is_empty() {
                        <p class="empty-state">{"Select a date range to see revenue"}</p>
                    } else {
                        <Chart id="revenue-chart" spec={revenue_chart} dark_mode={props.dark_mode} />
                    }
                </div>
                <div class="card chart-card">
                    <h3 class="card-title">{"Sales by Category"}</h3>
                    <Chart id="category-chart" spec={category_chart} dark_mode={props.dark_mode} />
                </div>
            </div>

            <div class="card chart-card">
                <h3 class="card-title">{"Peak Hours"}</h3>
                <Chart id="peak-hours-chart" spec={peak_hours_chart} dark_mode={props.dark_mode} />
            </div>
        </div>
    }
}

fn revenue_spec(metrics: &[DailyMetric]) -> ChartSpec {
    ChartSpec::Trend {
        labels: metrics
            .iter()
            .map(|day| day_axis_label(day.date, metrics.len()))
            .collect(),
        area: ChartSeries {
            name: "Revenue",
            values: metrics.iter().map(|day| f64::from(day.revenue)).collect(),
            color: "hsl(24, 95%, 53%)",
        },
        line: Some(ChartSeries {
            name: "Orders",
            values: metrics.iter().map(|day| f64::from(day.orders)).collect(),
            color: "hsl(262, 83%, 58%)",
        }),
    }
}

fn peak_hours_spec(hours: &[HourlyOrders]) -> ChartSpec {
    ChartSpec::Bars {
        labels: hours.iter().map(|h| h.hour.to_string()).collect(),
        series: ChartSeries {
            name: "Orders",
            values: hours.iter().map(|h| f64::from(h.orders)).collect(),
            color: "hsl(24, 95%, 53%)",
        },
    }
}
