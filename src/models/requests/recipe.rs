//! Recipe form model.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Recipe, ShareFlag};

/// Form submitted by the add and edit recipe pages
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecipeForm {
    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "Desserts")]
    pub category_name: String,
    #[validate(length(min = 1, max = 200, message = "Recipe name must be between 1 and 200 characters"))]
    #[schema(example = "Chocolate cake")]
    pub recipe_name: String,
    #[serde(default)]
    pub recipe_description: String,
    #[serde(default)]
    #[schema(example = "Easy")]
    pub recipe_difficulty: String,
    /// Comma separated list, e.g. `flour, eggs, sugar`
    #[serde(default)]
    #[schema(example = "flour, eggs, sugar")]
    pub basic_ingredients: String,
    #[serde(default)]
    pub complementary_ingredients: String,
    #[serde(default)]
    pub recipe_method: String,
    #[serde(default)]
    pub recipe_images: String,
    #[serde(default)]
    pub closing_line: String,
    /// Non-empty when the share checkbox is ticked
    #[schema(example = "on")]
    pub share_recipe: Option<String>,
}

impl RecipeForm {
    /// Build the stored document, attributing it to `created_by`.
    pub fn into_recipe(self, created_by: &str) -> Recipe {
        Recipe {
            id: None,
            basic_ingredients: split_ingredients(&self.basic_ingredients),
            share_recipe: ShareFlag::from_checkbox(self.share_recipe.as_deref()),
            category_name: self.category_name,
            recipe_name: self.recipe_name,
            recipe_description: self.recipe_description,
            recipe_difficulty: self.recipe_difficulty,
            complementary_ingredients: self.complementary_ingredients,
            recipe_method: self.recipe_method,
            recipe_images: self.recipe_images,
            closing_line: self.closing_line,
            created_by: created_by.to_string(),
        }
    }
}

/// Split the comma separated ingredient field, keeping the submitted order.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
