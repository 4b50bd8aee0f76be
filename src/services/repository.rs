//! Data-access boundary between the pages and wherever the data lives.
//!
//! Pages only talk to these traits. [`InMemoryStore`](super::store::InMemoryStore)
//! is the implementation used by the app; a backend-backed one would slot in
//! behind the same methods.

use chrono::NaiveDate;

use crate::models::{
    activity::{Activity, ActivityAction},
    customer::{Customer, NewCustomer},
    date_range::DateInterval,
    error::AppError,
    menu::{MenuCategory, MenuItem, NewMenuItem},
    metrics::{DailyMetric, HourlyOrders, MetricSummary, PeriodComparison, Share},
    order::{Order, OrderFilter, OrderSummary},
};

pub trait CustomerRepository {
    fn list_customers(&self) -> &[Customer];

    fn search_customers(&self, query: &str) -> Vec<&Customer> {
        self.list_customers()
            .iter()
            .filter(|c| c.matches(query))
            .collect()
    }

    /// Rejects a mobile number that already has an account.
    fn ensure_unique(&self, customer: &NewCustomer) -> Result<(), AppError> {
        if self
            .list_customers()
            .iter()
            .any(|c| c.mobile == customer.mobile())
        {
            return Err(AppError::Validation(
                "A customer with this mobile number already exists".to_string(),
            ));
        }
        Ok(())
    }

    fn add_customer(&mut self, customer: NewCustomer, joined: NaiveDate)
    -> Result<Customer, AppError>;

    fn remove_customer(&mut self, id: u32) -> Result<Customer, AppError>;
}

pub trait OrderRepository {
    fn list_orders(&self) -> &[Order];

    fn filter_orders(&self, filter: &OrderFilter) -> Vec<&Order> {
        self.list_orders()
            .iter()
            .filter(|o| o.matches(filter))
            .collect()
    }

    fn order_summary(&self) -> OrderSummary {
        OrderSummary::tally(self.list_orders())
    }
}

pub trait MenuRepository {
    fn list_menu(&self) -> &[MenuItem];

    /// `None` for `category` means every category.
    fn filter_menu(&self, query: &str, category: Option<MenuCategory>) -> Vec<&MenuItem> {
        self.list_menu()
            .iter()
            .filter(|item| item.matches(query, category))
            .collect()
    }

    fn add_menu_item(&mut self, item: NewMenuItem) -> MenuItem;

    /// Flips availability and returns the new value.
    fn toggle_availability(&mut self, id: u32) -> Result<bool, AppError>;

    fn remove_menu_item(&mut self, id: u32) -> Result<MenuItem, AppError>;
}

pub trait ActivityRepository {
    /// Newest first.
    fn activities(&self) -> &[Activity];

    fn recent_activities(&self, limit: usize) -> &[Activity] {
        let activities = self.activities();
        &activities[..limit.min(activities.len())]
    }

    fn redeemed_points(&self) -> u32 {
        self.activities()
            .iter()
            .filter(|a| a.action == ActivityAction::Redeemed)
            .map(|a| a.points)
            .sum()
    }
}

pub trait MetricsRepository {
    /// One entry per day of `interval`, oldest first.
    fn daily_metrics(&self, interval: &DateInterval) -> Vec<DailyMetric>;

    fn summarize(&self, interval: &DateInterval) -> MetricSummary {
        MetricSummary::from_metrics(&self.daily_metrics(interval))
    }

    /// Totals for `interval` and the equally long window before it. `None`
    /// while the selection is incomplete.
    fn compare_with_previous(&self, interval: &DateInterval) -> Option<PeriodComparison> {
        let previous = interval.previous_period()?;
        Some(PeriodComparison {
            current: self.summarize(interval),
            previous: self.summarize(&previous),
        })
    }

    fn category_share(&self) -> Vec<Share>;

    fn hourly_orders(&self) -> Vec<HourlyOrders>;

    fn customer_mix(&self) -> Vec<Share>;
}
