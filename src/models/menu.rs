use serde::Serialize;

use super::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum MenuCategory {
    Starters,
    #[default]
    MainCourse,
    Rice,
    SouthIndian,
    Desserts,
    Beverages,
}

impl MenuCategory {
    pub fn all() -> &'static [MenuCategory] {
        &[
            MenuCategory::Starters,
            MenuCategory::MainCourse,
            MenuCategory::Rice,
            MenuCategory::SouthIndian,
            MenuCategory::Desserts,
            MenuCategory::Beverages,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Starters => "Starters",
            MenuCategory::MainCourse => "Main Course",
            MenuCategory::Rice => "Rice",
            MenuCategory::SouthIndian => "South Indian",
            MenuCategory::Desserts => "Desserts",
            MenuCategory::Beverages => "Beverages",
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for MenuCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuCategory::all()
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown category: {s}")))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    pub is_available: bool,
    pub is_veg: bool,
}

impl MenuItem {
    /// Case-insensitive name search combined with an optional category
    pub fn matches(&self, query: &str, category: Option<MenuCategory>) -> bool {
        let matches_search = self.name.to_lowercase().contains(&query.to_lowercase());
        let matches_category = category.is_none_or(|c| c == self.category);
        matches_search && matches_category
    }
}

/// Raw field values from the "Add Menu Item" dialog
#[derive(Clone, Debug, PartialEq)]
pub struct MenuDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: MenuCategory,
    pub is_veg: bool,
}

impl Default for MenuDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: MenuCategory::MainCourse,
            is_veg: true,
        }
    }
}

/// Draft that passed validation
#[derive(Clone, Debug, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    pub is_veg: bool,
}

impl MenuDraft {
    pub fn validate(&self) -> Result<NewMenuItem, AppError> {
        let name = self.name.trim();
        let price = self.price.trim();

        if name.is_empty() || price.is_empty() {
            return Err(AppError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }

        let price = price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or_else(|| AppError::Validation("Please enter a valid price".to_string()))?;

        Ok(NewMenuItem {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            category: self.category,
            is_veg: self.is_veg,
        })
    }
}
