use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Always stored lowercased; unique.
    pub username: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}
