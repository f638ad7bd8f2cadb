//! Screen rendering
//!
//! Turns a [`Screen`] into a [`ScreenView`] by querying the catalog. Views are
//! plain data: the terminal shell prints them through `Display`, the HTTP API
//! serializes them to JSON.

use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{Category, Location};
use crate::navigation::Screen;

pub const APP_TITLE: &str = "Boston City Tour";
pub const NOT_FOUND_MESSAGE: &str = "Location not found";

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCard {
    pub category: Category,
    pub icon: &'static str,
    pub blurb: String,
}

impl From<Category> for CategoryCard {
    fn from(category: Category) -> Self {
        Self {
            category,
            icon: category.icon(),
            blurb: category.blurb(),
        }
    }
}

/// Everything needed to draw one screen
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenView {
    Home {
        title: &'static str,
        headline: &'static str,
        tagline: &'static str,
        action: &'static str,
    },
    Categories {
        title: &'static str,
        prompt: &'static str,
        cards: Vec<CategoryCard>,
    },
    LocationList {
        title: String,
        summary: String,
        locations: Vec<Location>,
    },
    LocationDetail {
        title: &'static str,
        icon: &'static str,
        rating: String,
        location: Location,
        action: &'static str,
    },
    NotFound {
        title: &'static str,
        message: &'static str,
    },
}

impl ScreenView {
    /// Render `screen` against `catalog`. A detail screen whose location is
    /// missing renders as [`ScreenView::NotFound`].
    #[must_use]
    pub fn render(screen: &Screen, catalog: &Catalog) -> Self {
        match *screen {
            Screen::Home => ScreenView::Home {
                title: APP_TITLE,
                headline: "Welcome to Boston",
                tagline: "Discover the best museums, parks, and restaurants in the city",
                action: "Start Your Tour",
            },
            Screen::Categories => ScreenView::Categories {
                title: "Choose a Category",
                prompt: "What would you like to explore?",
                cards: catalog
                    .categories()
                    .iter()
                    .copied()
                    .map(CategoryCard::from)
                    .collect(),
            },
            Screen::LocationList { category } => {
                let locations = catalog.locations(category).to_vec();
                ScreenView::LocationList {
                    title: category.name().to_string(),
                    summary: format!(
                        "Found {} {}",
                        locations.len(),
                        category.name().to_lowercase()
                    ),
                    locations,
                }
            }
            Screen::LocationDetail {
                category,
                location_id,
            } => match catalog.location(category, location_id) {
                Some(location) => ScreenView::LocationDetail {
                    title: "Details",
                    icon: category.icon(),
                    rating: location.format_rating(),
                    location: location.clone(),
                    action: "Return to Home",
                },
                None => ScreenView::NotFound {
                    title: "Details",
                    message: NOT_FOUND_MESSAGE,
                },
            },
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match *self {
            ScreenView::Home { title, .. }
            | ScreenView::Categories { title, .. }
            | ScreenView::LocationDetail { title, .. }
            | ScreenView::NotFound { title, .. } => title,
            ScreenView::LocationList { ref title, .. } => title.as_str(),
        }
    }

    /// Number of numbered choices the screen offers
    #[must_use]
    pub fn choice_count(&self) -> usize {
        match self {
            ScreenView::Categories { cards, .. } => cards.len(),
            ScreenView::LocationList { locations, .. } => locations.len(),
            _ => 0,
        }
    }
}

impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title())?;
        match self {
            ScreenView::Home {
                headline,
                tagline,
                action,
                ..
            } => {
                writeln!(f, "{headline}")?;
                writeln!(f, "{tagline}")?;
                writeln!(f)?;
                writeln!(f, "[start] {action}")?;
            }
            ScreenView::Categories { prompt, cards, .. } => {
                writeln!(f, "{prompt}")?;
                for (index, card) in cards.iter().enumerate() {
                    writeln!(f, "  {}. {} {}", index + 1, card.icon, card.category)?;
                    writeln!(f, "     {}", card.blurb)?;
                }
            }
            ScreenView::LocationList {
                summary, locations, ..
            } => {
                writeln!(f, "{summary}")?;
                for (index, location) in locations.iter().enumerate() {
                    writeln!(
                        f,
                        "  {}. {}  ⭐ {}",
                        index + 1,
                        location.name,
                        location.rating
                    )?;
                    writeln!(f, "     {}", location.description)?;
                }
            }
            ScreenView::LocationDetail {
                icon,
                rating,
                location,
                action,
                ..
            } => {
                writeln!(f, "{icon}  {}", location.name)?;
                writeln!(f, "   ⭐ {rating}")?;
                writeln!(f, "   About: {}", location.description)?;
                writeln!(f, "   📍 Address: {}", location.address)?;
                writeln!(f)?;
                writeln!(f, "[home] {action}")?;
            }
            ScreenView::NotFound { message, .. } => {
                writeln!(f, "{message}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn test_home_view() {
        let view = ScreenView::render(&Screen::Home, catalog());
        let text = view.to_string();
        assert!(text.contains("== Boston City Tour =="));
        assert!(text.contains("Start Your Tour"));
        assert_eq!(view.choice_count(), 0);
    }

    #[test]
    fn test_categories_view_lists_all_categories_in_order() {
        let view = ScreenView::render(&Screen::Categories, catalog());
        let text = view.to_string();
        assert_eq!(view.choice_count(), 3);
        let museums = text.find("1. 🏛️ Museums").unwrap();
        let parks = text.find("2. 🌳 Parks").unwrap();
        let restaurants = text.find("3. 🍽️ Restaurants").unwrap();
        assert!(museums < parks && parks < restaurants);
        assert!(text.contains("Explore Boston's finest restaurants"));
    }

    #[test]
    fn test_location_list_view() {
        let screen = Screen::LocationList {
            category: Category::Museums,
        };
        let view = ScreenView::render(&screen, catalog());
        let text = view.to_string();
        assert!(text.contains("== Museums =="));
        assert!(text.contains("Found 4 museums"));
        assert!(text.contains("1. MIT Museum  ⭐ 4.5"));
        assert!(text.contains("4. Boston Tea Party Ships  ⭐ 4.4"));
    }

    #[test]
    fn test_detail_view() {
        let screen = Screen::LocationDetail {
            category: Category::Parks,
            location_id: 7,
        };
        let text = ScreenView::render(&screen, catalog()).to_string();
        assert!(text.contains("🌳  Arnold Arboretum"));
        assert!(text.contains("⭐ 4.8 / 5.0"));
        assert!(text.contains("Address: 125 Arborway"));
        assert!(text.contains("Return to Home"));
    }

    #[test]
    fn test_missing_location_renders_placeholder() {
        let screen = Screen::LocationDetail {
            category: Category::Museums,
            location_id: 99,
        };
        let view = ScreenView::render(&screen, catalog());
        assert!(matches!(view, ScreenView::NotFound { .. }));
        assert_eq!(view.to_string(), "== Details ==\nLocation not found\n");
    }

    #[test]
    fn test_view_serializes_with_kind_tag() {
        let screen = Screen::LocationDetail {
            category: Category::Restaurants,
            location_id: 12,
        };
        let json = serde_json::to_value(ScreenView::render(&screen, catalog())).unwrap();
        assert_eq!(json["kind"], "location_detail");
        assert_eq!(json["location"]["name"], "Toro");
        assert_eq!(json["rating"], "4.5 / 5.0");
    }
}
