//! Ladle Recipe Catalog Module
//!
//! This module provides the recipe catalog: the document model, the
//! MongoDB-backed persistence gateway, and the HTTP routes that map
//! requests onto single store operations.
//!
//! # Features
//! - Recipe creation with opaque pass-through of arbitrary fields
//! - Listing and exact-match filtering by title, author, and difficulty
//! - Partial-merge updates keyed by id or by first title match
//! - Deletion by id

pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use db::MongoDb;
pub use error::{ApiError, StoreError, StoreResult};
pub use models::Recipe;
pub use store::{MongoRecipeStore, RecipeStore};
