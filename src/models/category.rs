//! Category model
//!
//! Categories label transactions and budgets. Each carries an icon reference
//! and a display color for the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use crate::error::ValidationError;

/// A spending or income category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Icon reference understood by the presentation layer
    pub icon: String,

    /// Display color as `#RRGGBB`
    pub color: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyCategoryName);
        }

        if name.chars().count() > 50 {
            return Err(ValidationError::CategoryNameTooLong(name.chars().count()));
        }

        if !is_hex_color(&self.color) {
            return Err(ValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn is_hex_color(color: &str) -> bool {
    color
        .strip_prefix('#')
        .map(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// The built-in categories seeded on first run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Food,
    Transport,
    Housing,
    Entertainment,
    Utilities,
    Income,
    Health,
    Education,
}

impl DefaultCategory {
    /// All defaults in seeding order
    pub fn all() -> &'static [DefaultCategory] {
        &[
            Self::Food,
            Self::Transport,
            Self::Housing,
            Self::Entertainment,
            Self::Utilities,
            Self::Income,
            Self::Health,
            Self::Education,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Income => "Income",
            Self::Health => "Health",
            Self::Education => "Education",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "fork.knife",
            Self::Transport => "car.fill",
            Self::Housing => "house.fill",
            Self::Entertainment => "film.fill",
            Self::Utilities => "bolt.fill",
            Self::Income => "dollarsign.circle.fill",
            Self::Health => "heart.fill",
            Self::Education => "book.fill",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#FF9500",
            Self::Transport => "#007AFF",
            Self::Housing => "#AF52DE",
            Self::Entertainment => "#FF2D55",
            Self::Utilities => "#FFCC00",
            Self::Income => "#34C759",
            Self::Health => "#FF3B30",
            Self::Education => "#5AC8FA",
        }
    }

    /// Build a fresh category record for this default
    pub fn to_category(&self) -> Category {
        Category::new(self.name(), self.icon(), self.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = Category::new("Groceries", "cart", "#00AA00");
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.icon, "cart");
        assert_eq!(category.color, "#00AA00");
        assert_eq!(category.created_at, category.updated_at);
    }

    #[test]
    fn test_validation() {
        assert!(Category::new("Food", "fork.knife", "#FF9500").validate().is_ok());

        assert_eq!(
            Category::new("   ", "x", "#000000").validate(),
            Err(ValidationError::EmptyCategoryName)
        );
        assert_eq!(
            Category::new("a".repeat(51), "x", "#000000").validate(),
            Err(ValidationError::CategoryNameTooLong(51))
        );
        assert_eq!(
            Category::new("Food", "x", "orange").validate(),
            Err(ValidationError::InvalidColor("orange".into()))
        );
        assert!(Category::new("Food", "x", "#12345G").validate().is_err());
    }

    #[test]
    fn test_defaults_are_valid_and_unique() {
        let defaults = DefaultCategory::all();
        assert_eq!(defaults.len(), 8);

        let mut names: Vec<_> = defaults.iter().map(|d| d.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);

        for default in defaults {
            assert!(default.to_category().validate().is_ok());
        }
    }

    #[test]
    fn test_serialization_keeps_icon_and_color() {
        let category = DefaultCategory::Health.to_category();
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
        assert_eq!(deserialized.icon, "heart.fill");
        assert_eq!(deserialized.color, "#FF3B30");
    }
}
