use std::collections::HashSet;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::constants::{CODE_USERNAME_EXISTS, ERR_USERNAME_EXISTS};
use crate::errors::ApiError;
use crate::models::{Category, Difficulty, Recipe, User};
use crate::repositories::{CategoryStore, RecipeStore, UserStore};

/// In-memory RecipeStore for tests. Keeps insertion order as natural order.
#[derive(Clone, Debug, Default)]
pub struct MemoryRecipeStore {
    recipes: Arc<RwLock<Vec<Recipe>>>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with `count` recipes named `Recipe 0`, `Recipe 1`, ...
    pub async fn with_numbered_recipes(count: usize) -> Self {
        let store = Self::new();
        for i in 0..count {
            let recipe = Recipe {
                id: None,
                category_name: "Mains".to_string(),
                recipe_name: format!("Recipe {}", i),
                recipe_description: String::new(),
                recipe_difficulty: "Easy".to_string(),
                basic_ingredients: Vec::new(),
                complementary_ingredients: String::new(),
                recipe_method: String::new(),
                recipe_images: String::new(),
                closing_line: String::new(),
                share_recipe: Default::default(),
                created_by: "cook".to_string(),
            };
            store
                .insert(&recipe)
                .await
                .expect("memory insert cannot fail");
        }
        store
    }
}

impl RecipeStore for MemoryRecipeStore {
    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.recipes.read().await.len() as u64)
    }

    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Recipe>, ApiError> {
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, ApiError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Recipe>, ApiError> {
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .find(|r| r.id == Some(id))
            .cloned())
    }

    async fn find_by_creator(&self, username: &str) -> Result<Vec<Recipe>, ApiError> {
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .filter(|r| r.created_by == username)
            .cloned()
            .collect())
    }

    /// Any query word equal to an indexed word matches, like `$text` without stemming.
    async fn text_search(&self, query: &str) -> Result<Vec<Recipe>, ApiError> {
        let terms: HashSet<String> = tokenize(query).collect();
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .filter(|r| indexed_words(r).any(|word| terms.contains(&word)))
            .cloned()
            .collect())
    }

    async fn insert(&self, recipe: &Recipe) -> Result<ObjectId, ApiError> {
        let id = ObjectId::new();
        self.recipes.write().await.push(Recipe {
            id: Some(id),
            ..recipe.clone()
        });
        Ok(id)
    }

    async fn replace(&self, id: ObjectId, recipe: &Recipe) -> Result<bool, ApiError> {
        let mut recipes = self.recipes.write().await;
        match recipes.iter_mut().find(|r| r.id == Some(id)) {
            Some(slot) => {
                *slot = Recipe {
                    id: Some(id),
                    ..recipe.clone()
                };
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ApiError> {
        let mut recipes = self.recipes.write().await;
        let before = recipes.len();
        recipes.retain(|r| r.id != Some(id));
        Ok(recipes.len() < before)
    }
}

/// In-memory UserStore; usernames are unique like the MongoDB index.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &User) -> Result<ObjectId, ApiError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(ApiError::conflict(CODE_USERNAME_EXISTS, ERR_USERNAME_EXISTS));
        }
        let id = ObjectId::new();
        users.push(User {
            id: Some(id),
            ..user.clone()
        });
        Ok(id)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

/// In-memory CategoryStore with a fixed difficulty list.
#[derive(Clone, Debug, Default)]
pub struct MemoryCategoryStore {
    categories: Arc<RwLock<Vec<Category>>>,
    difficulty: Vec<Difficulty>,
}

impl MemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Difficulty levels stored out of display order.
    pub fn with_difficulties(levels: &[(&str, i32)]) -> Self {
        Self {
            categories: Arc::default(),
            difficulty: levels
                .iter()
                .map(|(label, sort)| Difficulty {
                    id: Some(ObjectId::new()),
                    recipe_difficulty: label.to_string(),
                    sort_difficult: *sort,
                })
                .collect(),
        }
    }
}

impl CategoryStore for MemoryCategoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, ApiError> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        Ok(categories)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Category>, ApiError> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.id == Some(id))
            .cloned())
    }

    async fn insert(&self, category: &Category) -> Result<ObjectId, ApiError> {
        let id = ObjectId::new();
        self.categories.write().await.push(Category {
            id: Some(id),
            ..category.clone()
        });
        Ok(id)
    }

    async fn replace(&self, id: ObjectId, category: &Category) -> Result<bool, ApiError> {
        let mut categories = self.categories.write().await;
        match categories.iter_mut().find(|c| c.id == Some(id)) {
            Some(slot) => {
                *slot = Category {
                    id: Some(id),
                    ..category.clone()
                };
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ApiError> {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != Some(id));
        Ok(categories.len() < before)
    }

    async fn find_difficulties(&self) -> Result<Vec<Difficulty>, ApiError> {
        let mut levels = self.difficulty.clone();
        levels.sort_by_key(|d| d.sort_difficult);
        Ok(levels)
    }
}

/// Words the recipe text index covers, lowercased.
fn indexed_words(recipe: &Recipe) -> impl Iterator<Item = String> + '_ {
    [
        recipe.recipe_name.as_str(),
        recipe.recipe_description.as_str(),
        recipe.category_name.as_str(),
    ]
    .into_iter()
    .flat_map(tokenize)
}

/// Split free text into lowercase alphanumeric words.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        let words: Vec<String> = tokenize("Grandma's Apple-Pie, baked!").collect();
        assert_eq!(words, vec!["grandma", "s", "apple", "pie", "baked"]);
    }

    #[tokio::test]
    async fn test_text_search_matches_whole_words_in_indexed_fields() {
        let store = MemoryRecipeStore::with_numbered_recipes(2).await;
        assert_eq!(store.text_search("MAINS").await.unwrap().len(), 2);
        assert_eq!(store.text_search("1").await.unwrap().len(), 1);
        assert!(store.text_search("main").await.unwrap().is_empty());
    }
}
