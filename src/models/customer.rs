use chrono::NaiveDate;
use serde::Serialize;

use super::error::AppError;
use crate::config::Config;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Customer {
    pub id: u32,
    pub mobile: String,
    pub total_spent: u32,
    pub total_points: u32,
    pub last_visit: NaiveDate,
    pub visits: u32,
}

impl Customer {
    /// Substring match on the mobile number
    pub fn matches(&self, query: &str) -> bool {
        self.mobile.contains(query)
    }
}

/// A mobile number that passed validation and can open a loyalty account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    mobile: String,
}

impl NewCustomer {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let mobile = input.trim();
        let valid = mobile.len() == Config::MOBILE_NUMBER_LEN
            && mobile.chars().all(|c| c.is_ascii_digit());

        if !valid {
            return Err(AppError::Validation(
                "Please enter a valid mobile number".to_string(),
            ));
        }

        Ok(Self {
            mobile: mobile.to_string(),
        })
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }
}
