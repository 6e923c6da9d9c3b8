//! Recipe persistence: the `RecipeStore` seam and its MongoDB implementation.

use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_RECIPES;
use crate::errors::ApiError;
use crate::models::Recipe;

/// Storage operations the recipe service needs.
///
/// Listing methods return documents in the collection's natural order.
#[allow(async_fn_in_trait)]
pub trait RecipeStore {
    async fn count(&self) -> Result<u64, ApiError>;

    /// Skip `skip` recipes and return at most `limit` of the rest.
    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Recipe>, ApiError>;

    async fn find_all(&self) -> Result<Vec<Recipe>, ApiError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Recipe>, ApiError>;

    async fn find_by_creator(&self, username: &str) -> Result<Vec<Recipe>, ApiError>;

    /// Full-text search over the indexed recipe fields.
    async fn text_search(&self, query: &str) -> Result<Vec<Recipe>, ApiError>;

    async fn insert(&self, recipe: &Recipe) -> Result<ObjectId, ApiError>;

    /// Replace the whole document. Returns false when no recipe has this id.
    async fn replace(&self, id: ObjectId, recipe: &Recipe) -> Result<bool, ApiError>;

    /// Returns false when no recipe has this id.
    async fn delete(&self, id: ObjectId) -> Result<bool, ApiError>;
}

/// MongoDB-backed recipe store.
pub struct RecipeRepository {
    collection: Collection<Recipe>,
}

impl RecipeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_RECIPES),
        }
    }

    /// Create the text index `$text` queries need.
    ///
    /// Called once at startup; recreating an identical index is a no-op.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating text index for recipes collection...");

        let index = IndexModel::builder()
            .keys(doc! {
                "recipe_name": "text",
                "recipe_description": "text",
                "category_name": "text",
            })
            .build();

        self.collection.create_index(index).await?;
        info!("Recipe text index ready");
        Ok(())
    }
}

impl RecipeStore for RecipeRepository {
    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Recipe>, ApiError> {
        debug!("Repository: Finding recipes skip={} limit={}", skip, limit);
        let cursor = self.collection.find(doc! {}).skip(skip).limit(limit).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, ApiError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Recipe>, ApiError> {
        debug!("Repository: Finding recipe by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_creator(&self, username: &str) -> Result<Vec<Recipe>, ApiError> {
        debug!("Repository: Finding recipes created by: {}", username);
        let cursor = self
            .collection
            .find(doc! { "created_by": username })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn text_search(&self, query: &str) -> Result<Vec<Recipe>, ApiError> {
        debug!("Repository: Text search for: {}", query);
        let cursor = self
            .collection
            .find(doc! { "$text": { "$search": query } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, recipe: &Recipe) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(recipe).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::internal("Inserted recipe has no ObjectId"))
    }

    async fn replace(&self, id: ObjectId, recipe: &Recipe) -> Result<bool, ApiError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, recipe)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ApiError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
