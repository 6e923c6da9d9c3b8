//! Recipe document stored in MongoDB.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Whether the author shares a recipe publicly.
///
/// Stored the way the HTML checkbox submits it: `"on"` or `"off"`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShareFlag {
    On,
    #[default]
    Off,
}

impl ShareFlag {
    /// A ticked checkbox submits a non-empty value; absent or empty is off.
    pub fn from_checkbox(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => ShareFlag::On,
            _ => ShareFlag::Off,
        }
    }
}

impl fmt::Display for ShareFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareFlag::On => write!(f, "on"),
            ShareFlag::Off => write!(f, "off"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub recipe_name: String,
    #[serde(default)]
    pub recipe_description: String,
    #[serde(default)]
    pub recipe_difficulty: String,
    #[serde(default)]
    pub basic_ingredients: Vec<String>,
    #[serde(default)]
    pub complementary_ingredients: String,
    #[serde(default)]
    pub recipe_method: String,
    #[serde(default)]
    pub recipe_images: String,
    #[serde(default)]
    pub closing_line: String,
    #[serde(default)]
    pub share_recipe: ShareFlag,
    /// Username of the author, taken from the session at submission time.
    #[serde(default)]
    pub created_by: String,
}
