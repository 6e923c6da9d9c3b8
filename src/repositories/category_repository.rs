//! Category and difficulty repository.

use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::constants::{COLLECTION_CATEGORIES, COLLECTION_DIFFICULTY};
use crate::errors::ApiError;
use crate::models::{Category, Difficulty};

/// Category and difficulty storage.
#[allow(async_fn_in_trait)]
pub trait CategoryStore {
    /// All categories sorted by name.
    async fn find_all(&self) -> Result<Vec<Category>, ApiError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Category>, ApiError>;

    async fn insert(&self, category: &Category) -> Result<ObjectId, ApiError>;

    /// Returns false when no category has this id.
    async fn replace(&self, id: ObjectId, category: &Category) -> Result<bool, ApiError>;

    /// Returns false when no category has this id.
    async fn delete(&self, id: ObjectId) -> Result<bool, ApiError>;

    /// Difficulty levels sorted by `sort_difficult`.
    async fn find_difficulties(&self) -> Result<Vec<Difficulty>, ApiError>;
}

/// MongoDB-backed category store.
pub struct CategoryRepository {
    categories: Collection<Category>,
    difficulty: Collection<Difficulty>,
}

impl CategoryRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            categories: db.collection(COLLECTION_CATEGORIES),
            difficulty: db.collection(COLLECTION_DIFFICULTY),
        }
    }
}

impl CategoryStore for CategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, ApiError> {
        let cursor = self
            .categories
            .find(doc! {})
            .sort(doc! { "category_name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Category>, ApiError> {
        debug!("Repository: Finding category by ID: {}", id);
        Ok(self.categories.find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, category: &Category) -> Result<ObjectId, ApiError> {
        let result = self.categories.insert_one(category).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::internal("Inserted category has no ObjectId"))
    }

    async fn replace(&self, id: ObjectId, category: &Category) -> Result<bool, ApiError> {
        let result = self
            .categories
            .replace_one(doc! { "_id": id }, category)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ApiError> {
        let result = self.categories.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn find_difficulties(&self) -> Result<Vec<Difficulty>, ApiError> {
        let cursor = self
            .difficulty
            .find(doc! {})
            .sort(doc! { "sort_difficult": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
