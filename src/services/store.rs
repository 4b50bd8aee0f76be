use chrono::{Datelike, NaiveDate};

use super::fixtures;
use super::repository::{
    ActivityRepository, CustomerRepository, MenuRepository, MetricsRepository, OrderRepository,
};
use crate::models::{
    activity::Activity,
    customer::{Customer, NewCustomer},
    date_range::DateInterval,
    error::AppError,
    menu::{MenuItem, NewMenuItem},
    metrics::{DailyMetric, HourlyOrders, Share},
    order::Order,
};

/// In-memory implementation of every repository, seeded from fixtures.
#[derive(Clone, Debug, PartialEq)]
pub struct InMemoryStore {
    customers: Vec<Customer>,
    orders: Vec<Order>,
    menu: Vec<MenuItem>,
    activities: Vec<Activity>,
    next_id: u32,
}

impl InMemoryStore {
    pub fn empty() -> Self {
        Self {
            customers: Vec::new(),
            orders: Vec::new(),
            menu: Vec::new(),
            activities: Vec::new(),
            next_id: 1,
        }
    }

    pub fn seeded() -> Self {
        let customers = fixtures::customers();
        let menu = fixtures::menu_items();
        let next_id = customers
            .iter()
            .map(|c| c.id)
            .chain(menu.iter().map(|m| m.id))
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            customers,
            orders: fixtures::orders(),
            menu,
            activities: fixtures::activities(),
            next_id,
        }
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn menu_item_mut(&mut self, id: u32) -> Result<&mut MenuItem, AppError> {
        self.menu
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))
    }
}

/// Writes the pages can make against the store
#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    AddCustomer(NewCustomer, NaiveDate),
    RemoveCustomer(u32),
    AddMenuItem(NewMenuItem),
    ToggleAvailability(u32),
    RemoveMenuItem(u32),
}

impl InMemoryStore {
    /// Applies one action in place.
    pub fn apply(&mut self, action: StoreAction) -> Result<(), AppError> {
        match action {
            StoreAction::AddCustomer(customer, joined) => {
                self.add_customer(customer, joined).map(|_| ())
            }
            StoreAction::RemoveCustomer(id) => self.remove_customer(id).map(|_| ()),
            StoreAction::AddMenuItem(item) => {
                self.add_menu_item(item);
                Ok(())
            }
            StoreAction::ToggleAvailability(id) => self.toggle_availability(id).map(|_| ()),
            StoreAction::RemoveMenuItem(id) => self.remove_menu_item(id).map(|_| ()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CustomerRepository for InMemoryStore {
    fn list_customers(&self) -> &[Customer] {
        &self.customers
    }

    fn add_customer(
        &mut self,
        customer: NewCustomer,
        joined: NaiveDate,
    ) -> Result<Customer, AppError> {
        self.ensure_unique(&customer)?;

        let customer = Customer {
            id: self.allocate_id(),
            mobile: customer.mobile().to_string(),
            total_spent: 0,
            total_points: 0,
            last_visit: joined,
            visits: 0,
        };
        self.customers.push(customer.clone());
        Ok(customer)
    }

    fn remove_customer(&mut self, id: u32) -> Result<Customer, AppError> {
        let index = self
            .customers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("customer {id}")))?;
        Ok(self.customers.remove(index))
    }
}

impl OrderRepository for InMemoryStore {
    fn list_orders(&self) -> &[Order] {
        &self.orders
    }
}

impl MenuRepository for InMemoryStore {
    fn list_menu(&self) -> &[MenuItem] {
        &self.menu
    }

    fn add_menu_item(&mut self, item: NewMenuItem) -> MenuItem {
        let item = MenuItem {
            id: self.allocate_id(),
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            is_available: true,
            is_veg: item.is_veg,
        };
        self.menu.push(item.clone());
        item
    }

    fn toggle_availability(&mut self, id: u32) -> Result<bool, AppError> {
        let item = self.menu_item_mut(id)?;
        item.is_available = !item.is_available;
        Ok(item.is_available)
    }

    fn remove_menu_item(&mut self, id: u32) -> Result<MenuItem, AppError> {
        let index = self
            .menu
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))?;
        Ok(self.menu.remove(index))
    }
}

impl ActivityRepository for InMemoryStore {
    fn activities(&self) -> &[Activity] {
        &self.activities
    }
}

impl MetricsRepository for InMemoryStore {
    // Every day follows its weekday's profile; a quarter of orders skip the QR scan.
    fn daily_metrics(&self, interval: &DateInterval) -> Vec<DailyMetric> {
        interval
            .dates()
            .into_iter()
            .map(|date| {
                let (visits, revenue, orders) = fixtures::weekday_profile(date.weekday());
                DailyMetric {
                    date,
                    visits,
                    revenue,
                    orders,
                    scanned_orders: orders - orders / 4,
                }
            })
            .collect()
    }

    fn category_share(&self) -> Vec<Share> {
        fixtures::category_share()
    }

    fn hourly_orders(&self) -> Vec<HourlyOrders> {
        fixtures::hourly_orders()
    }

    fn customer_mix(&self) -> Vec<Share> {
        fixtures::customer_mix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_ids_continue_after_fixtures() {
        let mut store = InMemoryStore::seeded();
        let customer = NewCustomer::parse("9000000001").unwrap();
        let added = store
            .add_customer(customer, NaiveDate::from_ymd_opt(2026, 2, 6).unwrap())
            .unwrap();
        assert_eq!(added.id, 7);
    }

    #[test]
    fn test_empty_store_has_no_rows() {
        let store = InMemoryStore::empty();
        assert!(store.list_customers().is_empty());
        assert!(store.list_menu().is_empty());
        assert!(store.recent_activities(5).is_empty());
    }
}
