pub mod activity;
pub mod calendar;
pub mod customer;
pub mod date_range;
pub mod error;
pub mod menu;
pub mod metrics;
pub mod order;
pub mod settings;
