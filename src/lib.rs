//! `CityTour` - browse Boston's museums, parks and restaurants
//!
//! This library provides the static location catalog, the navigation state
//! machine that walks from the home screen down to a location's details, and
//! the terminal and HTTP front ends that present it.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod shell;
pub mod telemetry;
pub mod view;
pub mod web;

// Re-export core types for public API
pub use catalog::{Catalog, catalog};
pub use config::TourConfig;
pub use error::TourError;
pub use models::{Category, Location};
pub use navigation::{NavAction, Router, Screen, Transition};
pub use shell::{SessionEnd, TourShell};
pub use view::ScreenView;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TourError>;
