#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    Verified,
    Redeemed,
    Earned,
}

impl ActivityAction {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityAction::Verified => "Order Verified",
            ActivityAction::Redeemed => "Reward Redeemed",
            ActivityAction::Earned => "Points Earned",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ActivityAction::Verified => "activity-verified",
            ActivityAction::Redeemed => "activity-redeemed",
            ActivityAction::Earned => "activity-earned",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityAction::Verified => "✔",
            ActivityAction::Redeemed => "🎁",
            ActivityAction::Earned => "✨",
        }
    }

    /// Redemptions spend points, everything else adds them
    pub fn points_sign(&self) -> &'static str {
        match self {
            ActivityAction::Redeemed => "-",
            ActivityAction::Verified | ActivityAction::Earned => "+",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub id: u32,
    pub customer_mobile: String,
    pub customer_initials: String,
    pub action: ActivityAction,
    pub amount: Option<u32>,
    pub points: u32,
    pub item_name: Option<String>,
    pub timestamp: String,
    pub time_ago: String,
}
