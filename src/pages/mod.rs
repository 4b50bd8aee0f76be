pub mod analytics;
pub mod customers;
pub mod dashboard;
pub mod menu;
pub mod orders;
pub mod settings;

pub use analytics::Analytics;
pub use customers::Customers;
pub use dashboard::Dashboard;
pub use menu::Menu;
pub use orders::Orders;
pub use settings::Settings;

/// Top-level screens reachable from the sidebar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    Customers,
    Orders,
    Menu,
    Analytics,
    Settings,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Customers,
            Page::Orders,
            Page::Menu,
            Page::Analytics,
            Page::Settings,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Customers => "Customers",
            Page::Orders => "Orders",
            Page::Menu => "Menu",
            Page::Analytics => "Analytics",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "▦",
            Page::Customers => "👥",
            Page::Orders => "🛒",
            Page::Menu => "🍽",
            Page::Analytics => "📈",
            Page::Settings => "⚙",
        }
    }

    /// Line under the page heading
    pub fn subtitle(&self) -> &'static str {
        match self {
            Page::Dashboard => "Welcome back! Here's what's happening at your restaurant.",
            Page::Customers => "Manage your loyalty program members",
            Page::Orders => "Track and manage customer orders",
            Page::Menu => "Manage your restaurant menu items",
            Page::Analytics => "Track your restaurant performance",
            Page::Settings => "Manage your restaurant and account settings",
        }
    }
}
