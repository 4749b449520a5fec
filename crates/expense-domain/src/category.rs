//! Expense categories and their display badges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of categories the tracker knows how to badge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
        Category::General,
    ];

    /// Matches a stored category label exactly; `None` for anything outside the closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label)
    }

    /// Classifies a stored label for display, falling back to [`Category::General`].
    pub fn classify(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Category::General)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::General => "General",
        }
    }

    pub fn badge(self) -> BadgeClass {
        BadgeClass(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display tag derived from a category (`category-food`, `category-general`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BadgeClass(Category);

impl BadgeClass {
    pub fn category(self) -> Category {
        self.0
    }

    pub fn as_str(self) -> &'static str {
        match self.0 {
            Category::Food => "category-food",
            Category::Travel => "category-travel",
            Category::Shopping => "category-shopping",
            Category::Bills => "category-bills",
            Category::General => "category-general",
        }
    }
}

impl fmt::Display for BadgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_their_badge() {
        assert_eq!(Category::classify("Food").badge().as_str(), "category-food");
        assert_eq!(Category::classify("Bills").badge().as_str(), "category-bills");
    }

    #[test]
    fn unknown_and_case_mismatched_labels_fall_back_to_general() {
        assert_eq!(Category::classify("Misc"), Category::General);
        assert_eq!(Category::classify("food"), Category::General);
        assert_eq!(Category::classify(""), Category::General);
    }
}
