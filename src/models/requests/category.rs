//! Category form model.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Category;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryForm {
    #[validate(length(min = 1, max = 100, message = "Category name must be between 1 and 100 characters"))]
    #[schema(example = "Desserts")]
    pub category_name: String,
    /// Image URL shown on the category card
    #[serde(default)]
    #[schema(example = "https://example.com/desserts.jpg")]
    pub category_image: String,
}

impl CategoryForm {
    pub fn into_category(self) -> Category {
        Category {
            id: None,
            category_name: self.category_name.trim().to_string(),
            category_image: self.category_image.trim().to_string(),
        }
    }
}
