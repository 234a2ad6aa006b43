//! Recipes API
//!
//! Each handler makes exactly one store call and maps its outcome:
//! value -> 200, absence -> 404, store failure -> 500. The create route is
//! the one exception - a body that cannot become a document is a 400.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use super::AppState;
use crate::error::ApiError;
use crate::models::{json_to_document, Recipe};

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub recipe: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct RecipesResponse {
    pub recipes: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub message: String,
    pub recipe: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct AuthorRecipesResponse {
    pub message: String,
    #[serde(rename = "recipesByAuthor")]
    pub recipes_by_author: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct DifficultyRecipesResponse {
    pub message: String,
    pub recipes: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub message: String,
    #[serde(rename = "updatedRecipe")]
    pub updated_recipe: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

pub fn recipe_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/title/{title}",
            get(get_recipe_by_title).post(update_recipe_by_title),
        )
        .route("/recipes/author/{author}", get(list_recipes_by_author))
        .route(
            "/recipes/difficulty/{difficulty}",
            get(list_recipes_by_difficulty),
        )
        .route(
            "/recipes/{id}",
            post(update_recipe_by_id).delete(delete_recipe),
        )
}

fn to_json_vec(recipes: Vec<Recipe>) -> Vec<serde_json::Value> {
    recipes.iter().map(Recipe::to_json).collect()
}

async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let payload = json_to_document(&body)
        .ok_or_else(|| ApiError::BadRequest("Recipe body must be a JSON object.".to_string()))?;

    let recipe = state.store.create(payload).await?;
    Ok(Json(CreatedResponse {
        message: "Recipe saved successfully into the database.".to_string(),
        recipe: recipe.to_json(),
    }))
}

async fn list_recipes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecipesResponse>, ApiError> {
    let recipes = state.store.list_all().await?;
    if recipes.is_empty() {
        return Err(ApiError::NotFound("No recipes found.".to_string()));
    }

    Ok(Json(RecipesResponse {
        recipes: to_json_vec(recipes),
    }))
}

async fn get_recipe_by_title(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = state
        .store
        .find_by_title(&title)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found.".to_string()))?;

    Ok(Json(RecipeResponse {
        message: "Recipe found successfully.".to_string(),
        recipe: recipe.to_json(),
    }))
}

async fn list_recipes_by_author(
    State(state): State<Arc<AppState>>,
    Path(author): Path<String>,
) -> Result<Json<AuthorRecipesResponse>, ApiError> {
    let recipes = state.store.find_by_author(&author).await?;
    if recipes.is_empty() {
        return Err(ApiError::NotFound("No recipes found.".to_string()));
    }

    Ok(Json(AuthorRecipesResponse {
        message: "Recipes found successfully.".to_string(),
        recipes_by_author: to_json_vec(recipes),
    }))
}

async fn list_recipes_by_difficulty(
    State(state): State<Arc<AppState>>,
    Path(difficulty): Path<String>,
) -> Result<Json<DifficultyRecipesResponse>, ApiError> {
    let recipes = state.store.find_by_difficulty(&difficulty).await?;
    if recipes.is_empty() {
        return Err(ApiError::NotFound("No recipes found.".to_string()));
    }

    Ok(Json(DifficultyRecipesResponse {
        message: "Recipes found successfully.".to_string(),
        recipes: to_json_vec(recipes),
    }))
}

async fn update_recipe_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let patch = json_to_document(&body)
        .ok_or_else(|| ApiError::BadRequest("Recipe patch must be a JSON object.".to_string()))?;

    let recipe = state
        .store
        .update_by_id(&id, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found.".to_string()))?;

    Ok(Json(UpdatedResponse {
        message: "Recipe updated successfully.".to_string(),
        updated_recipe: recipe.to_json(),
    }))
}

async fn update_recipe_by_title(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let patch = json_to_document(&body)
        .ok_or_else(|| ApiError::BadRequest("Recipe patch must be a JSON object.".to_string()))?;

    let recipe = state
        .store
        .update_by_title(&title, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found.".to_string()))?;

    Ok(Json(UpdatedResponse {
        message: "Recipe updated successfully.".to_string(),
        updated_recipe: recipe.to_json(),
    }))
}

async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state
        .store
        .delete_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found.".to_string()))?;

    Ok(Json(DeletedResponse {
        message: "Recipe deleted successfully.".to_string(),
    }))
}
