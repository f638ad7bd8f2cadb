//! Data models for the `CityTour` application
//!
//! - Category: the fixed top-level groupings
//! - Location: one point of interest inside a category

pub mod category;
pub mod location;

pub use category::Category;
pub use location::{Location, MAX_RATING};
