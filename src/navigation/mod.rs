//! Navigation module
//!
//! - Screen: the four destinations and their route paths
//! - Router: current screen, back-stack and the transition table

pub mod router;
pub mod screen;

pub use router::{NavAction, Router, Transition};
pub use screen::Screen;
