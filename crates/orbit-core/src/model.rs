//! Domain records that cross the boundary between the views and the host.

use serde::{Deserialize, Serialize};

/// Spending category chosen with the slingshot dial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Travel,
    Gear,
    Fun,
    Health,
    /// Anything a host hands us that we do not recognise.
    #[serde(other)]
    Other,
}

impl Category {
    /// Dial order, left to right.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Gear,
        Category::Fun,
        Category::Health,
    ];

    /// Dial slot `index`, clamped to the last slot.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn id(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Gear => "gear",
            Category::Fun => "fun",
            Category::Health => "health",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Gear => "Gear",
            Category::Fun => "Fun",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Category::Food => "\u{1F355}",
            Category::Travel => "\u{2708}\u{FE0F}",
            Category::Gear => "\u{2699}\u{FE0F}",
            Category::Fun => "\u{1F3AE}",
            Category::Health => "\u{1F49A}",
            Category::Other => "\u{2B50}",
        }
    }

    /// `#RRGGBB`
    pub fn color(self) -> &'static str {
        match self {
            Category::Food => "#FF6B6B",
            Category::Travel => "#4ECDC4",
            Category::Gear => "#45B7D1",
            Category::Fun => "#96CEB4",
            Category::Health => "#FFEAA7",
            Category::Other => "#FFFFFF",
        }
    }
}

/// A committed expense. Always fully populated when emitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: u32,
    pub category: Category,
    /// Wall-clock ms since the Unix epoch.
    pub timestamp: f64,
    /// Landing position in universe space, 0..1 on each axis.
    pub x: f32,
    pub y: f32,
}

pub type UserId = String;

/// A member of a spending group. Negative balance owes, positive is owed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupUser {
    pub id: UserId,
    pub name: String,
    pub balance: f64,
    pub color: String,
}

impl GroupUser {
    pub fn new(id: &str, name: &str, balance: f64, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            balance,
            color: color.to_string(),
        }
    }
}

/// The four-person group the gravity well shows when a host supplies none.
pub fn demo_group() -> Vec<GroupUser> {
    vec![
        GroupUser::new("1", "You", -80.0, "#FF6B6B"),
        GroupUser::new("2", "Alex", 30.0, "#4ECDC4"),
        GroupUser::new("3", "Sam", 25.0, "#45B7D1"),
        GroupUser::new("4", "Jo", 25.0, "#FFEAA7"),
    ]
}
