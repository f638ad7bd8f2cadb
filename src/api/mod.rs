use axum::{
    Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    VERSION,
    catalog::catalog,
    models::{Category, Location},
    navigation::Screen,
    view::{CategoryCard, NOT_FOUND_MESSAGE, ScreenView},
};

#[derive(Serialize, Deserialize)]
pub struct ApiCategory {
    pub name: String,
    pub icon: String,
    pub blurb: String,
    pub count: usize,
}

impl From<Category> for ApiCategory {
    fn from(category: Category) -> Self {
        let card = CategoryCard::from(category);
        Self {
            name: card.category.name().to_string(),
            icon: card.icon.to_string(),
            blurb: card.blurb,
            count: catalog().locations(category).len(),
        }
    }
}

#[derive(Deserialize)]
pub struct ScreenQuery {
    pub route: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/categories", get(get_categories))
        .route("/categories/{category}/locations", get(get_locations))
        .route("/categories/{category}/locations/{id}", get(get_location))
        .route("/screen", get(get_screen))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": VERSION }))
}

async fn get_categories() -> Json<Vec<ApiCategory>> {
    Json(
        catalog()
            .categories()
            .iter()
            .copied()
            .map(ApiCategory::from)
            .collect(),
    )
}

async fn get_locations(Path(category): Path<String>) -> Json<Vec<Location>> {
    Json(catalog().locations_by_category(&category).to_vec())
}

async fn get_location(Path((category, id)): Path<(String, String)>) -> Response {
    let location = id
        .parse::<u32>()
        .ok()
        .and_then(|id| catalog().location_by_id(&category, id));

    match location {
        Some(location) => Json(location.clone()).into_response(),
        None => {
            tracing::debug!(%category, %id, "Location lookup missed");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": NOT_FOUND_MESSAGE })),
            )
                .into_response()
        }
    }
}

async fn get_screen(Query(query): Query<ScreenQuery>) -> Response {
    match query.route.parse::<Screen>() {
        Ok(screen) => Json(ScreenView::render(&screen, catalog())).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
