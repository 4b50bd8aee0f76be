use chrono::NaiveTime;
use serde::Serialize;

use super::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }

    /// Value used in the status filter select
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge badge-outline",
            OrderStatus::Preparing => "badge badge-secondary",
            OrderStatus::Ready | OrderStatus::Completed => "badge badge-success",
            OrderStatus::Cancelled => "badge badge-destructive",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::all()
            .iter()
            .copied()
            .find(|status| status.code() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown order status: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    DineIn,
    Takeaway,
    Delivery,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::DineIn => "dine-in",
            OrderType::Takeaway => "takeaway",
            OrderType::Delivery => "delivery",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderType::DineIn => "order-type order-type-dine-in",
            OrderType::Takeaway => "order-type order-type-takeaway",
            OrderType::Delivery => "order-type order-type-delivery",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Order {
    pub id: u32,
    pub order_no: String,
    pub customer: String,
    pub items: u32,
    pub total: u32,
    pub status: OrderStatus,
    pub time: NaiveTime,
    pub order_type: OrderType,
}

impl Order {
    pub fn matches(&self, filter: &OrderFilter) -> bool {
        let query = filter.query.to_lowercase();
        let matches_search =
            self.order_no.to_lowercase().contains(&query) || self.customer.contains(&filter.query);

        matches_search && filter.status.accepts(self.status)
    }

    /// Time of day as shown in the table, e.g. "10:30 AM"
    pub fn time_label(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}

/// Status select value: everything, or one status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.code(),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub query: String,
    pub status: StatusFilter,
}

/// Per-status order counts for the quick stats row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl OrderSummary {
    pub fn tally<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        orders
            .into_iter()
            .fold(Self::default(), |mut summary, order| {
                match order.status {
                    OrderStatus::Pending => summary.pending += 1,
                    OrderStatus::Preparing => summary.preparing += 1,
                    OrderStatus::Ready => summary.ready += 1,
                    OrderStatus::Completed => summary.completed += 1,
                    OrderStatus::Cancelled => summary.cancelled += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.pending + self.preparing + self.ready + self.completed + self.cancelled
    }
}
