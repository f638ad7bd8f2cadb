//! Location model for a single point of interest

use serde::{Deserialize, Serialize};

use super::Category;

/// Highest rating a location can carry
pub const MAX_RATING: f32 = 5.0;

/// One point of interest inside a category
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Identifier, unique only within `category`
    pub id: u32,
    /// Category this location is listed under
    pub category: Category,
    pub name: String,
    pub description: String,
    /// Street address or landmark
    pub address: String,
    /// Visitor rating in `[0.0, 5.0]`
    pub rating: f32,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(
        id: u32,
        category: Category,
        name: &str,
        description: &str,
        address: &str,
        rating: f32,
    ) -> Self {
        Self {
            id,
            category,
            name: name.to_string(),
            description: description.to_string(),
            address: address.to_string(),
            rating,
        }
    }

    /// Rating as shown on the detail screen, e.g. `4.5 / 5.0`
    #[must_use]
    pub fn format_rating(&self) -> String {
        format!("{} / {MAX_RATING:.1}", self.rating)
    }

    /// Check the record against the data-model invariants
    pub fn check(&self) -> Result<(), String> {
        if self.id == 0 {
            return Err(format!("location '{}' must have a positive id", self.name));
        }
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(format!(
                    "{} location {} has an empty {field}",
                    self.category, self.id
                ));
            }
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(format!(
                "{} location {} has rating {} outside 0.0..=5.0",
                self.category, self.id, self.rating
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Location {
        Location::new(
            1,
            Category::Museums,
            "MIT Museum",
            "Explore cutting-edge science and technology exhibits",
            "265 Massachusetts Ave",
            4.5,
        )
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(sample().format_rating(), "4.5 / 5.0");
    }

    #[test]
    fn test_check_accepts_valid_record() {
        assert!(sample().check().is_ok());
    }

    #[test]
    fn test_check_rejects_bad_records() {
        let mut location = sample();
        location.rating = 5.1;
        assert!(location.check().unwrap_err().contains("outside"));

        let mut location = sample();
        location.address = "  ".to_string();
        assert!(location.check().unwrap_err().contains("empty address"));

        let mut location = sample();
        location.id = 0;
        assert!(location.check().unwrap_err().contains("positive id"));
    }
}
