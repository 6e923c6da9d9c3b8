//! User repository for all MongoDB operations related to users.

use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{COLLECTION_USERS, CODE_USERNAME_EXISTS, ERR_USERNAME_EXISTS};
use crate::errors::ApiError;
use crate::models::User;

/// Account storage used by registration and sign-in.
#[allow(async_fn_in_trait)]
pub trait UserStore {
    /// Insert a new account. A taken username is a conflict.
    async fn insert(&self, user: &User) -> Result<ObjectId, ApiError>;

    /// Find a user by username. Callers pass the lowercased form.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError>;
}

/// MongoDB-backed user store.
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create the unique index on `username`.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        info!("Database indexes created successfully");
        Ok(())
    }
}

impl UserStore for UserRepository {
    /// A registration racing another one for the same username is rejected by
    /// the unique index and reported as a conflict.
    async fn insert(&self, user: &User) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(user).await.map_err(|err| {
            if is_duplicate_key(&err) {
                ApiError::conflict(CODE_USERNAME_EXISTS, ERR_USERNAME_EXISTS)
            } else {
                ApiError::from(err)
            }
        })?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::internal("Inserted user has no ObjectId"))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by username: {}", username);
        Ok(self
            .collection
            .find_one(doc! { "username": username })
            .await?)
    }
}

const DUPLICATE_KEY: i32 = 11000;

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}
