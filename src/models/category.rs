//! The fixed set of tour categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TourError;

/// Top-level grouping of locations. Closed set, not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Museums,
    Parks,
    Restaurants,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Museums, Category::Parks, Category::Restaurants];

    /// Display name, also the exact string accepted by catalog queries
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Museums => "Museums",
            Category::Parks => "Parks",
            Category::Restaurants => "Restaurants",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Category::Museums => "🏛️",
            Category::Parks => "🌳",
            Category::Restaurants => "🍽️",
        }
    }

    /// Short teaser shown on the category card
    #[must_use]
    pub fn blurb(self) -> String {
        format!("Explore Boston's finest {}", self.name().to_lowercase())
    }

    /// Exact-match lookup by display name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }

    /// Case-insensitive lookup for user-typed input
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| TourError::invalid_route(s, format!("unknown category '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Museums", Some(Category::Museums))]
    #[case("Parks", Some(Category::Parks))]
    #[case("Restaurants", Some(Category::Restaurants))]
    #[case("museums", None)]
    #[case("Zoos", None)]
    #[case("", None)]
    fn test_from_name_is_exact(#[case] name: &str, #[case] expected: Option<Category>) {
        assert_eq!(Category::from_name(name), expected);
    }

    #[rstest]
    #[case("museums", Some(Category::Museums))]
    #[case("  PARKS ", Some(Category::Parks))]
    #[case("Zoos", None)]
    fn test_from_input_ignores_case(#[case] input: &str, #[case] expected: Option<Category>) {
        assert_eq!(Category::from_input(input), expected);
    }

    #[test]
    fn test_blurb_uses_lowercase_name() {
        assert_eq!(Category::Parks.blurb(), "Explore Boston's finest parks");
    }

    #[test]
    fn test_parse_unknown_category_fails() {
        let err = "Beaches".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("unknown category 'Beaches'"));
    }
}
