//! Screens the tour can show and their route paths

use std::fmt;
use std::str::FromStr;

use crate::TourError;
use crate::models::Category;

/// One navigation destination, carrying only the parameters it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Categories,
    LocationList {
        category: Category,
    },
    LocationDetail {
        category: Category,
        location_id: u32,
    },
}

/// Canonical route path: `home`, `categories`, `locations/Museums`, `detail/Museums/1`
impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Home => write!(f, "home"),
            Screen::Categories => write!(f, "categories"),
            Screen::LocationList { category } => write!(f, "locations/{category}"),
            Screen::LocationDetail {
                category,
                location_id,
            } => write!(f, "detail/{category}/{location_id}"),
        }
    }
}

impl FromStr for Screen {
    type Err = TourError;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = route.trim().trim_matches('/').split('/').collect();
        let category = |name: &str| {
            Category::from_name(name).ok_or_else(|| {
                TourError::invalid_route(route, format!("unknown category '{name}'"))
            })
        };

        match parts.as_slice() {
            ["home"] => Ok(Screen::Home),
            ["categories"] => Ok(Screen::Categories),
            ["locations", name] => Ok(Screen::LocationList {
                category: category(*name)?,
            }),
            ["detail", name, id] => {
                let location_id = id.parse::<u32>().map_err(|_| {
                    TourError::invalid_route(route, "location id must be a number")
                })?;
                Ok(Screen::LocationDetail {
                    category: category(*name)?,
                    location_id,
                })
            }
            _ => Err(TourError::invalid_route(route, "unknown screen")),
        }
    }
}
