//! Recipe and category response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Category, Difficulty, Recipe, ShareFlag};

/// Recipe data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct RecipeResponse {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "Desserts")]
    pub category_name: String,
    #[schema(example = "Chocolate cake")]
    pub recipe_name: String,
    pub recipe_description: String,
    #[schema(example = "Easy")]
    pub recipe_difficulty: String,
    #[schema(example = json!(["flour", "eggs", "sugar"]))]
    pub basic_ingredients: Vec<String>,
    pub complementary_ingredients: String,
    pub recipe_method: String,
    pub recipe_images: String,
    pub closing_line: String,
    pub share_recipe: ShareFlag,
    #[schema(example = "johndoe")]
    pub created_by: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.map(|id| id.to_hex()).unwrap_or_default(),
            category_name: recipe.category_name,
            recipe_name: recipe.recipe_name,
            recipe_description: recipe.recipe_description,
            recipe_difficulty: recipe.recipe_difficulty,
            basic_ingredients: recipe.basic_ingredients,
            complementary_ingredients: recipe.complementary_ingredients,
            recipe_method: recipe.recipe_method,
            recipe_images: recipe.recipe_images,
            closing_line: recipe.closing_line,
            share_recipe: recipe.share_recipe,
            created_by: recipe.created_by,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct CategoryResponse {
    #[schema(example = "507f1f77bcf86cd799439012")]
    pub id: String,
    #[schema(example = "Desserts")]
    pub category_name: String,
    pub category_image: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.map(|id| id.to_hex()).unwrap_or_default(),
            category_name: category.category_name,
            category_image: category.category_image,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct DifficultyResponse {
    pub id: String,
    #[schema(example = "Easy")]
    pub recipe_difficulty: String,
    #[schema(example = 1)]
    pub sort_difficult: i32,
}

impl From<Difficulty> for DifficultyResponse {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            id: difficulty.id.map(|id| id.to_hex()).unwrap_or_default(),
            recipe_difficulty: difficulty.recipe_difficulty,
            sort_difficult: difficulty.sort_difficult,
        }
    }
}

/// Choices offered by the add and edit recipe forms
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeFormOptions {
    /// Sorted by name
    pub categories: Vec<CategoryResponse>,
    /// Sorted by `sort_difficult`
    pub difficulty: Vec<DifficultyResponse>,
}

/// A recipe being edited together with the form choices
#[derive(Debug, Serialize, ToSchema)]
pub struct EditRecipeResponse {
    pub recipe: RecipeResponse,
    #[serde(flatten)]
    pub options: RecipeFormOptions,
}

/// Full-text search result
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    #[schema(example = "0 matches for \"tofu\"")]
    pub message: String,
    #[schema(example = "tofu")]
    pub query: String,
    /// Set when the search ran but nothing matched
    pub no_matches: bool,
    pub data: Vec<RecipeResponse>,
}

/// The signed-in user's own recipes
#[derive(Debug, Serialize, ToSchema)]
pub struct MyRecipesResponse {
    #[schema(example = "johndoe")]
    pub username: String,
    pub recipes: Vec<RecipeResponse>,
}
