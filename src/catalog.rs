//! The static location catalog
//!
//! Locations are partitioned by [`Category`] and kept in declaration order,
//! which is also the order lists are displayed in. The catalog is built once
//! and only handed out by shared reference.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use tracing::debug;

use crate::models::{Category, Location};
use crate::{Result, TourError};

static BOSTON: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(boston_locations()).expect("built-in Boston catalog violates its invariants")
});

/// Process-wide read-only catalog with the built-in Boston data
pub fn catalog() -> &'static Catalog {
    &BOSTON
}

/// Immutable mapping from category to its ordered locations
#[derive(Debug)]
pub struct Catalog {
    entries: HashMap<Category, Vec<Location>>,
}

impl Catalog {
    /// Build a catalog, keeping the order of `locations` within each category.
    ///
    /// Fails when a record breaks the location invariants or an id repeats
    /// inside its category.
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        let mut entries: HashMap<Category, Vec<Location>> = Category::ALL
            .into_iter()
            .map(|category| (category, Vec::new()))
            .collect();
        let mut seen = HashSet::new();

        for location in locations {
            location.check().map_err(TourError::validation)?;
            if !seen.insert((location.category, location.id)) {
                return Err(TourError::validation(format!(
                    "duplicate id {} in {}",
                    location.id, location.category
                )));
            }
            entries.entry(location.category).or_default().push(location);
        }

        debug!("Catalog built with {} locations", seen.len());
        Ok(Self { entries })
    }

    /// Categories in display order
    #[must_use]
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Locations of a category given by name; empty for unknown names
    #[must_use]
    pub fn locations_by_category(&self, category: &str) -> &[Location] {
        Category::from_name(category)
            .map(|category| self.locations(category))
            .unwrap_or_default()
    }

    /// First location with `id` in the named category
    #[must_use]
    pub fn location_by_id(&self, category: &str, id: u32) -> Option<&Location> {
        Category::from_name(category).and_then(|category| self.location(category, id))
    }

    #[must_use]
    pub fn locations(&self, category: Category) -> &[Location] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn location(&self, category: Category, id: u32) -> Option<&Location> {
        self.locations(category)
            .iter()
            .find(|location| location.id == id)
    }

    /// Total number of locations across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn boston_locations() -> Vec<Location> {
    use Category::{Museums, Parks, Restaurants};

    vec![
        Location::new(
            1,
            Museums,
            "MIT Museum",
            "Explore cutting-edge science and technology exhibits",
            "265 Massachusetts Ave",
            4.5,
        ),
        Location::new(
            2,
            Museums,
            "Museum of Fine Arts",
            "World-class art collection spanning centuries",
            "465 Huntington Ave",
            4.7,
        ),
        Location::new(
            3,
            Museums,
            "Isabella Stewart Gardner Museum",
            "Venetian-style palace with stunning art",
            "25 Evans Way",
            4.6,
        ),
        Location::new(
            4,
            Museums,
            "Boston Tea Party Ships",
            "Interactive museum of American history",
            "306 Congress St",
            4.4,
        ),
        Location::new(
            5,
            Parks,
            "Boston Common",
            "America's oldest public park",
            "139 Tremont St",
            4.5,
        ),
        Location::new(
            6,
            Parks,
            "Charles River Esplanade",
            "Beautiful waterfront park with trails",
            "Charles River",
            4.6,
        ),
        Location::new(
            7,
            Parks,
            "Arnold Arboretum",
            "Harvard's 281-acre living tree museum",
            "125 Arborway",
            4.8,
        ),
        Location::new(
            8,
            Parks,
            "Rose Kennedy Greenway",
            "Modern linear park through downtown",
            "Atlantic Ave",
            4.3,
        ),
        Location::new(
            9,
            Restaurants,
            "Neptune Oyster",
            "Intimate seafood spot with fresh oysters",
            "63 Salem St",
            4.7,
        ),
        Location::new(
            10,
            Restaurants,
            "Union Oyster House",
            "Historic restaurant since 1826",
            "41 Union St",
            4.3,
        ),
        Location::new(
            11,
            Restaurants,
            "Oleana",
            "Mediterranean cuisine with Turkish flair",
            "134 Hampshire St",
            4.6,
        ),
        Location::new(
            12,
            Restaurants,
            "Toro",
            "Spanish tapas in a lively setting",
            "1704 Washington St",
            4.5,
        ),
    ]
}
