use chrono::NaiveDate;
use serde::Serialize;

/// Activity recorded for a single day
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub visits: u32,
    pub revenue: u32,
    pub orders: u32,
    pub scanned_orders: u32,
}

/// Totals over a window of days
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricSummary {
    pub days: usize,
    pub visits: u64,
    pub revenue: u64,
    pub orders: u64,
    pub scanned_orders: u64,
}

impl MetricSummary {
    pub fn from_metrics(metrics: &[DailyMetric]) -> Self {
        metrics.iter().fold(
            Self {
                days: metrics.len(),
                ..Self::default()
            },
            |mut summary, day| {
                summary.visits += u64::from(day.visits);
                summary.revenue += u64::from(day.revenue);
                summary.orders += u64::from(day.orders);
                summary.scanned_orders += u64::from(day.scanned_orders);
                summary
            },
        )
    }

    pub fn average_order_value(&self) -> f64 {
        if self.orders == 0 {
            0.0
        } else {
            self.revenue as f64 / self.orders as f64
        }
    }
}

/// A window's totals next to those of the window right before it
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodComparison {
    pub current: MetricSummary,
    pub previous: MetricSummary,
}

impl PeriodComparison {
    pub fn revenue_change(&self) -> Option<f64> {
        percent_change(self.current.revenue as f64, self.previous.revenue as f64)
    }

    pub fn orders_change(&self) -> Option<f64> {
        percent_change(self.current.orders as f64, self.previous.orders as f64)
    }

    pub fn average_order_value_change(&self) -> Option<f64> {
        percent_change(
            self.current.average_order_value(),
            self.previous.average_order_value(),
        )
    }

    pub fn visits_change(&self) -> Option<f64> {
        percent_change(self.current.visits as f64, self.previous.visits as f64)
    }
}

/// Relative change in percent; `None` when there is no baseline
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// One slice of a pie chart
#[derive(Clone, Debug, PartialEq)]
pub struct Share {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HourlyOrders {
    pub hour: &'static str,
    pub orders: u32,
}
