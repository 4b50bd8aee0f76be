use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::error::AppError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSettings {
    pub restaurant_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub opening_time: String,
    pub closing_time: String,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            restaurant_name: "My Restaurant".to_string(),
            email: "owner@restaurant.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "123 Main Street, Mumbai 400001".to_string(),
            opening_time: "09:00".to_string(),
            closing_time: "22:00".to_string(),
        }
    }
}

impl RestaurantSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.restaurant_name.trim().is_empty() {
            return Err(AppError::Validation(
                "Restaurant name is required".to_string(),
            ));
        }
        if !self.email.contains('@') {
            return Err(AppError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }

        let opening = parse_time(&self.opening_time)?;
        let closing = parse_time(&self.closing_time)?;
        if closing <= opening {
            return Err(AppError::Validation(
                "Closing time must be after opening time".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::Validation(format!("Invalid time: {value}")))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub two_factor: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            first_name: "Gaurav".to_string(),
            last_name: "Sharma".to_string(),
            email: "gaurav@restaurant.com".to_string(),
            two_factor: false,
        }
    }
}

impl ProfileSettings {
    /// Initials for the avatar, e.g. "GS"
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Email,
    Push,
    Sms,
    OrderAlerts,
    Marketing,
}

impl NotificationKind {
    pub fn all() -> &'static [NotificationKind] {
        &[
            NotificationKind::Email,
            NotificationKind::Push,
            NotificationKind::Sms,
            NotificationKind::OrderAlerts,
            NotificationKind::Marketing,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Email => "Email Notifications",
            NotificationKind::Push => "Push Notifications",
            NotificationKind::Sms => "SMS Notifications",
            NotificationKind::OrderAlerts => "Order Alerts",
            NotificationKind::Marketing => "Marketing Updates",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NotificationKind::Email => "Receive notifications via email",
            NotificationKind::Push => "Browser push notifications",
            NotificationKind::Sms => "Text messages for urgent alerts",
            NotificationKind::OrderAlerts => "New orders and updates",
            NotificationKind::Marketing => "Tips and product updates",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub order_alerts: bool,
    pub marketing: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
            order_alerts: true,
            marketing: false,
        }
    }
}

impl NotificationPrefs {
    pub fn is_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Push => self.push,
            NotificationKind::Sms => self.sms,
            NotificationKind::OrderAlerts => self.order_alerts,
            NotificationKind::Marketing => self.marketing,
        }
    }

    pub fn set(&mut self, kind: NotificationKind, enabled: bool) {
        let flag = match kind {
            NotificationKind::Email => &mut self.email,
            NotificationKind::Push => &mut self.push,
            NotificationKind::Sms => &mut self.sms,
            NotificationKind::OrderAlerts => &mut self.order_alerts,
            NotificationKind::Marketing => &mut self.marketing,
        };
        *flag = enabled;
    }
}

/// Rewards programme parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoyaltySettings {
    pub points_per_hundred: u32,
    pub min_redemption_points: u32,
    pub point_value: f64,
}

impl Default for LoyaltySettings {
    fn default() -> Self {
        Self {
            points_per_hundred: 10,
            min_redemption_points: 100,
            point_value: 1.0,
        }
    }
}

impl LoyaltySettings {
    /// Points earned on a bill of `amount` rupees
    pub fn points_for(&self, amount: u32) -> u32 {
        amount * self.points_per_hundred / 100
    }

    /// Rupee value of `points` when redeemed
    pub fn redemption_value(&self, points: u32) -> f64 {
        f64::from(points) * self.point_value
    }

    pub fn can_redeem(&self, points: u32) -> bool {
        points >= self.min_redemption_points
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.points_per_hundred == 0 {
            return Err(AppError::Validation(
                "Points per ₹100 must be greater than zero".to_string(),
            ));
        }
        if !(self.point_value.is_finite() && self.point_value > 0.0) {
            return Err(AppError::Validation(
                "Point value must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything the Settings page saves in one go
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub restaurant: RestaurantSettings,
    pub profile: ProfileSettings,
    pub notifications: NotificationPrefs,
    pub loyalty: LoyaltySettings,
}

impl Preferences {
    pub fn validate(&self) -> Result<(), AppError> {
        self.restaurant.validate()?;
        self.loyalty.validate()
    }

    /// Validates, then hands the preferences to `persist`. Invalid
    /// preferences never reach it.
    pub fn save_with<F>(&self, persist: F) -> Result<(), AppError>
    where
        F: FnOnce(&Self) -> Result<(), AppError>,
    {
        self.validate()?;
        persist(self)
    }
}
