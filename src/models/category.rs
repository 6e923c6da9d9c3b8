//! Category and difficulty lookup documents.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub category_image: String,
}

/// Entry of the `difficulty` collection offered on the recipe forms.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Difficulty {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub recipe_difficulty: String,
    #[serde(default)]
    pub sort_difficult: i32,
}
