//! Recipe listing, search and CRUD on top of a `RecipeStore`.

use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;

use crate::constants::{
    CODE_BAD_REQUEST, CODE_RECIPE_NOT_FOUND, ERR_FAILED_FETCH_RECIPE, ERR_INVALID_RECIPE_ID,
    ERR_RECIPE_NOT_FOUND, ERR_SEARCH_QUERY_REQUIRED,
};
use crate::errors::ApiError;
use crate::models::{Recipe, RecipeForm};
use crate::repositories::RecipeStore;
use crate::services::pagination::{PageRequest, PageWindow};
use crate::validators::parse_object_id;

/// A served page of recipes and the window it was cut with.
#[derive(Debug)]
pub struct RecipePageResult {
    pub window: PageWindow,
    pub recipes: Vec<Recipe>,
}

/// Result of a full-text search. No matches is a normal outcome.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    Matches(Vec<Recipe>),
    NoMatches,
}

pub struct RecipeService<S> {
    store: S,
}

impl<S: RecipeStore> RecipeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serve one page of the collection, clamping the requested offset.
    pub async fn list_page(&self, request: PageRequest) -> Result<RecipePageResult, ApiError> {
        let num_results = self.store.count().await?;
        let window = PageWindow::clamp(request, num_results);

        if window.offset != request.offset {
            debug!(
                "Clamped offset {} to {} (num_results={})",
                request.offset, window.offset, num_results
            );
        }

        let recipes = self.store.find_page(window.skip(), window.limit).await?;
        debug!(
            "Serving {} recipes at offset {} with limit {}",
            recipes.len(),
            window.offset,
            window.limit
        );

        Ok(RecipePageResult { window, recipes })
    }

    pub async fn search(&self, query: &str) -> Result<SearchOutcome, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApiError::bad_request(
                CODE_BAD_REQUEST,
                ERR_SEARCH_QUERY_REQUIRED,
            ));
        }

        let recipes = self.store.text_search(query).await?;
        if recipes.is_empty() {
            info!("Search for \"{}\" matched no recipes", query);
            return Ok(SearchOutcome::NoMatches);
        }

        debug!("Search for \"{}\" matched {} recipes", query, recipes.len());
        Ok(SearchOutcome::Matches(recipes))
    }

    pub async fn list_all(&self) -> Result<Vec<Recipe>, ApiError> {
        self.store.find_all().await
    }

    pub async fn list_by_creator(&self, username: &str) -> Result<Vec<Recipe>, ApiError> {
        self.store.find_by_creator(username).await
    }

    pub async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError> {
        let object_id = parse_object_id(id, ERR_INVALID_RECIPE_ID)?;
        self.find_existing(object_id).await
    }

    pub async fn create_recipe(&self, form: RecipeForm, username: &str) -> Result<Recipe, ApiError> {
        let recipe = form.into_recipe(username);
        let id = self.store.insert(&recipe).await?;
        info!(
            "Recipe {} added by {} (shared: {})",
            id, username, recipe.share_recipe
        );

        Ok(Recipe {
            id: Some(id),
            ..recipe
        })
    }

    /// Replace a recipe with the submitted form; the editor becomes its author.
    pub async fn update_recipe(
        &self,
        id: &str,
        form: RecipeForm,
        username: &str,
    ) -> Result<Recipe, ApiError> {
        let object_id = parse_object_id(id, ERR_INVALID_RECIPE_ID)?;
        let recipe = form.into_recipe(username);

        if !self.store.replace(object_id, &recipe).await? {
            warn!("Update failed: Recipe not found with id: {}", id);
            return Err(not_found());
        }
        info!("Recipe {} updated by {}", id, username);

        self.store
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::internal(ERR_FAILED_FETCH_RECIPE))
    }

    pub async fn delete_recipe(&self, id: &str, username: &str) -> Result<(), ApiError> {
        let object_id = parse_object_id(id, ERR_INVALID_RECIPE_ID)?;

        if !self.store.delete(object_id).await? {
            warn!("Delete failed: Recipe not found with id: {}", id);
            return Err(not_found());
        }

        info!("Recipe {} deleted by {}", id, username);
        Ok(())
    }

    async fn find_existing(&self, id: ObjectId) -> Result<Recipe, ApiError> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            warn!("Recipe not found with id: {}", id);
            not_found()
        })
    }
}

fn not_found() -> ApiError {
    ApiError::not_found(CODE_RECIPE_NOT_FOUND, ERR_RECIPE_NOT_FOUND)
}
