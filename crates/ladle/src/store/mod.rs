//! Persistence gateway for recipes
//!
//! The router only sees the [`RecipeStore`] trait, so tests can inject an
//! in-memory fake instead of a live MongoDB. Absence is `Ok(None)` (or an
//! empty vec), store failures are `Err` - the two are never conflated.

mod mongo;

use async_trait::async_trait;
use bson::Document;

use crate::error::StoreResult;
use crate::models::Recipe;

pub use mongo::MongoRecipeStore;

/// One document collection, one record type
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert the payload as given; returns the stored document with its
    /// newly assigned id.
    async fn create(&self, payload: Document) -> StoreResult<Recipe>;

    /// Every stored recipe, unfiltered.
    async fn list_all(&self) -> StoreResult<Vec<Recipe>>;

    /// First recipe whose title exactly equals the argument.
    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Recipe>>;

    /// All recipes by an exact author match.
    async fn find_by_author(&self, author: &str) -> StoreResult<Vec<Recipe>>;

    /// All recipes with an exact difficulty match.
    async fn find_by_difficulty(&self, difficulty: &str) -> StoreResult<Vec<Recipe>>;

    /// Merge `patch` into the recipe with the given id and return the
    /// post-update state. Fails with `StoreError::InvalidId` when `id` is
    /// not a structurally valid ObjectId.
    async fn update_by_id(&self, id: &str, patch: Document) -> StoreResult<Option<Recipe>>;

    /// Merge `patch` into the first title match and return the post-update
    /// state.
    async fn update_by_title(&self, title: &str, patch: Document) -> StoreResult<Option<Recipe>>;

    /// Remove the recipe with the given id and return its pre-deletion
    /// state.
    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Recipe>>;
}

/// Ids are store-assigned and immutable; strip `_id` from inbound
/// payloads and patches before they reach the collection.
pub(crate) fn sanitize_patch(mut patch: Document) -> Document {
    patch.remove("_id");
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn sanitize_patch_strips_the_id() {
        let patch = sanitize_patch(doc! { "_id": "forged", "difficulty": "Hard" });
        assert!(!patch.contains_key("_id"));
        assert_eq!(patch.get_str("difficulty").unwrap(), "Hard");
    }
}
