//! MongoDB-backed recipe store

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use super::{sanitize_patch, RecipeStore};
use crate::db::{collections, MongoDb};
use crate::error::{StoreError, StoreResult};
use crate::models::Recipe;

pub struct MongoRecipeStore {
    db: MongoDb,
}

impl MongoRecipeStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Recipe> {
        self.db.collection(collections::RECIPES)
    }

    fn parse_id(id: &str) -> StoreResult<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId { id: id.to_string() })
    }

    async fn find_all(&self, filter: Document) -> StoreResult<Vec<Recipe>> {
        let cursor = self.collection().find(filter, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn merge_update(
        &self,
        filter: Document,
        patch: Document,
    ) -> StoreResult<Option<Recipe>> {
        let patch = sanitize_patch(patch);

        // An empty $set is rejected by the server; nothing to merge means
        // the current state already is the post-update state.
        if patch.is_empty() {
            return Ok(self.collection().find_one(filter, None).await?);
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        Ok(self
            .collection()
            .find_one_and_update(filter, doc! { "$set": patch }, options)
            .await?)
    }
}

#[async_trait]
impl RecipeStore for MongoRecipeStore {
    async fn create(&self, payload: Document) -> StoreResult<Recipe> {
        let docs = self.db.collection::<Document>(collections::RECIPES);
        let result = docs.insert_one(sanitize_patch(payload), None).await?;

        self.collection()
            .find_one(doc! { "_id": &result.inserted_id }, None)
            .await?
            .ok_or_else(|| {
                StoreError::Database("inserted recipe missing on read-back".to_string())
            })
    }

    async fn list_all(&self) -> StoreResult<Vec<Recipe>> {
        self.find_all(doc! {}).await
    }

    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Recipe>> {
        Ok(self
            .collection()
            .find_one(doc! { "title": title }, None)
            .await?)
    }

    async fn find_by_author(&self, author: &str) -> StoreResult<Vec<Recipe>> {
        self.find_all(doc! { "author": author }).await
    }

    async fn find_by_difficulty(&self, difficulty: &str) -> StoreResult<Vec<Recipe>> {
        self.find_all(doc! { "difficulty": difficulty }).await
    }

    async fn update_by_id(&self, id: &str, patch: Document) -> StoreResult<Option<Recipe>> {
        let oid = Self::parse_id(id)?;
        self.merge_update(doc! { "_id": oid }, patch).await
    }

    async fn update_by_title(&self, title: &str, patch: Document) -> StoreResult<Option<Recipe>> {
        self.merge_update(doc! { "title": title }, patch).await
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Recipe>> {
        let oid = Self::parse_id(id)?;
        Ok(self
            .collection()
            .find_one_and_delete(doc! { "_id": oid }, None)
            .await?)
    }
}
