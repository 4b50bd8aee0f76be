//! Seed data for the in-memory store.

use chrono::{NaiveDate, NaiveTime, Weekday};

use crate::models::{
    activity::{Activity, ActivityAction},
    customer::Customer,
    menu::{MenuCategory, MenuItem},
    metrics::{HourlyOrders, Share},
    order::{Order, OrderStatus, OrderType},
};

const PRIMARY: &str = "hsl(24, 95%, 53%)";
const SUCCESS: &str = "hsl(142, 76%, 36%)";
const ACCENT: &str = "hsl(262, 83%, 58%)";
const WARNING: &str = "hsl(45, 93%, 47%)";

/// Typical day by weekday: (visits, revenue, orders)
pub fn weekday_profile(weekday: Weekday) -> (u32, u32, u32) {
    match weekday {
        Weekday::Mon => (1, 4500, 12),
        Weekday::Tue => (0, 5200, 18),
        Weekday::Wed => (5, 4800, 15),
        Weekday::Thu => (12, 6800, 24),
        Weekday::Fri => (0, 8200, 32),
        Weekday::Sat => (0, 9500, 38),
        Weekday::Sun => (0, 7200, 28),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 1,
            mobile: "8146056898".to_string(),
            total_spent: 7100,
            total_points: 770,
            last_visit: date(2026, 2, 5),
            visits: 8,
        },
        Customer {
            id: 2,
            mobile: "8146313492".to_string(),
            total_spent: 3225,
            total_points: 540,
            last_visit: date(2026, 2, 5),
            visits: 2,
        },
    ]
}

pub fn orders() -> Vec<Order> {
    let order = |id: u32, customer: &str, items, total, status, at, order_type| Order {
        id,
        order_no: format!("ORD-{id:03}"),
        customer: customer.to_string(),
        items,
        total,
        status,
        time: at,
        order_type,
    };

    vec![
        order(1, "8146056898", 3, 850, OrderStatus::Completed, time(10, 30), OrderType::DineIn),
        order(2, "8146313492", 2, 450, OrderStatus::Preparing, time(11, 15), OrderType::Takeaway),
        order(3, "9876543210", 5, 1200, OrderStatus::Pending, time(11, 45), OrderType::Delivery),
        order(4, "8765432109", 1, 280, OrderStatus::Ready, time(12, 0), OrderType::DineIn),
        order(5, "7654321098", 4, 920, OrderStatus::Cancelled, time(12, 30), OrderType::Takeaway),
    ]
}

pub fn menu_items() -> Vec<MenuItem> {
    let item = |id, name: &str, description: &str, price, category, is_available, is_veg| MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        is_available,
        is_veg,
    };

    vec![
        item(1, "Butter Chicken", "Creamy tomato-based curry with tender chicken pieces", 350.0, MenuCategory::MainCourse, true, false),
        item(2, "Paneer Tikka", "Grilled cottage cheese with Indian spices", 280.0, MenuCategory::Starters, true, true),
        item(3, "Dal Makhani", "Slow-cooked black lentils in creamy gravy", 220.0, MenuCategory::MainCourse, true, true),
        item(4, "Chicken Biryani", "Aromatic basmati rice with spiced chicken", 320.0, MenuCategory::Rice, false, false),
        item(5, "Gulab Jamun", "Deep-fried milk dumplings in sugar syrup", 120.0, MenuCategory::Desserts, true, true),
        item(6, "Masala Dosa", "Crispy rice crepe with spiced potato filling", 180.0, MenuCategory::SouthIndian, true, true),
    ]
}

pub fn activities() -> Vec<Activity> {
    let activity = |id, mobile: &str, initials: &str, action, amount, points, item: Option<&str>, timestamp: &str, time_ago: &str| Activity {
        id,
        customer_mobile: mobile.to_string(),
        customer_initials: initials.to_string(),
        action,
        amount,
        points,
        item_name: item.map(str::to_string),
        timestamp: timestamp.to_string(),
        time_ago: time_ago.to_string(),
    };

    vec![
        activity(1, "8146056898", "AK", ActivityAction::Verified, Some(1250), 125, None, "2:45 PM", "2 min ago"),
        activity(2, "8146313492", "RS", ActivityAction::Redeemed, None, 200, Some("Free Dessert"), "2:30 PM", "17 min ago"),
        activity(3, "9876543210", "PK", ActivityAction::Verified, Some(890), 89, None, "1:15 PM", "1 hr ago"),
        activity(4, "8765432109", "MJ", ActivityAction::Earned, None, 50, Some("Bonus Points"), "12:45 PM", "2 hrs ago"),
        activity(5, "7654321098", "VK", ActivityAction::Verified, Some(2100), 210, None, "11:30 AM", "3 hrs ago"),
        activity(6, "6543210987", "SK", ActivityAction::Redeemed, None, 500, Some("20% Off Meal"), "10:00 AM", "5 hrs ago"),
        activity(7, "5432109876", "NG", ActivityAction::Verified, Some(750), 75, None, "Yesterday", "1 day ago"),
        activity(8, "4321098765", "RB", ActivityAction::Earned, None, 100, Some("First Order Bonus"), "Yesterday", "1 day ago"),
    ]
}

pub fn category_share() -> Vec<Share> {
    vec![
        Share { label: "Main Course", value: 45.0, color: PRIMARY },
        Share { label: "Starters", value: 25.0, color: SUCCESS },
        Share { label: "Desserts", value: 15.0, color: ACCENT },
        Share { label: "Beverages", value: 15.0, color: WARNING },
    ]
}

pub fn customer_mix() -> Vec<Share> {
    vec![
        Share { label: "Return Customers", value: 65.0, color: PRIMARY },
        Share { label: "New Customers", value: 35.0, color: WARNING },
    ]
}

pub fn hourly_orders() -> Vec<HourlyOrders> {
    [
        ("9AM", 3),
        ("10AM", 5),
        ("11AM", 8),
        ("12PM", 15),
        ("1PM", 22),
        ("2PM", 18),
        ("3PM", 8),
        ("4PM", 6),
        ("5PM", 10),
        ("6PM", 14),
        ("7PM", 25),
        ("8PM", 32),
        ("9PM", 28),
        ("10PM", 15),
    ]
    .into_iter()
    .map(|(hour, orders)| HourlyOrders { hour, orders })
    .collect()
}
