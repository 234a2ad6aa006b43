//! HTTP routes module

pub mod recipes;

use axum::Router;
use std::sync::Arc;

use crate::store::RecipeStore;

/// Shared application state
pub struct AppState {
    /// Persistence gateway, injected so tests can run against a fake store
    pub store: Arc<dyn RecipeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }
}

/// Configure all recipe routes
pub fn configure(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(recipes::recipe_routes())
        .with_state(state)
}
