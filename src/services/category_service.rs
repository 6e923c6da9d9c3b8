//! Category management and the lookup lists used by the recipe forms.

use log::{info, warn};

use crate::constants::{CODE_CATEGORY_NOT_FOUND, ERR_CATEGORY_NOT_FOUND, ERR_INVALID_CATEGORY_ID};
use crate::errors::ApiError;
use crate::models::{Category, CategoryForm, Difficulty, RecipeFormOptions};
use crate::repositories::CategoryStore;
use crate::validators::parse_object_id;

pub struct CategoryService<C> {
    repository: C,
}

impl<C: CategoryStore> CategoryService<C> {
    pub fn new(repository: C) -> Self {
        Self { repository }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.repository.find_all().await
    }

    pub async fn list_difficulties(&self) -> Result<Vec<Difficulty>, ApiError> {
        self.repository.find_difficulties().await
    }

    /// Categories by name and difficulties by `sort_difficult`, for the recipe forms.
    pub async fn form_options(&self) -> Result<RecipeFormOptions, ApiError> {
        let categories = self.list_categories().await?;
        let difficulty = self.list_difficulties().await?;

        Ok(RecipeFormOptions {
            categories: categories.into_iter().map(Into::into).collect(),
            difficulty: difficulty.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn get_category(&self, id: &str) -> Result<Category, ApiError> {
        let object_id = parse_object_id(id, ERR_INVALID_CATEGORY_ID)?;
        self.repository.find_by_id(object_id).await?.ok_or_else(|| {
            warn!("Category not found with id: {}", id);
            not_found()
        })
    }

    pub async fn create_category(&self, form: CategoryForm) -> Result<Category, ApiError> {
        let category = form.into_category();
        let id = self.repository.insert(&category).await?;
        info!("Category {} added: {}", id, category.category_name);

        Ok(Category {
            id: Some(id),
            ..category
        })
    }

    pub async fn update_category(&self, id: &str, form: CategoryForm) -> Result<Category, ApiError> {
        let object_id = parse_object_id(id, ERR_INVALID_CATEGORY_ID)?;
        let category = form.into_category();

        if !self.repository.replace(object_id, &category).await? {
            warn!("Update failed: Category not found with id: {}", id);
            return Err(not_found());
        }
        info!("Category {} updated", id);

        Ok(Category {
            id: Some(object_id),
            ..category
        })
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        let object_id = parse_object_id(id, ERR_INVALID_CATEGORY_ID)?;

        if !self.repository.delete(object_id).await? {
            warn!("Delete failed: Category not found with id: {}", id);
            return Err(not_found());
        }

        info!("Category {} deleted", id);
        Ok(())
    }
}

fn not_found() -> ApiError {
    ApiError::not_found(CODE_CATEGORY_NOT_FOUND, ERR_CATEGORY_NOT_FOUND)
}
