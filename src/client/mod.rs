mod mealdb;

pub use mealdb::MealDbClient;

use async_trait::async_trait;

use crate::model::{Category, Recipe};
use crate::HubError;

/// Read-only access to a recipe data provider
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch `count` random recipes
    async fn random_recipes(&self, count: usize) -> Result<Vec<Recipe>, HubError>;

    /// Fetch every recipe in the named category
    async fn meals_by_category(&self, category: &str) -> Result<Vec<Recipe>, HubError>;

    /// Fetch the unfiltered recipe listing
    async fn all_meals(&self) -> Result<Vec<Recipe>, HubError>;

    /// Fetch the list of categories
    async fn categories(&self) -> Result<Vec<Category>, HubError>;

    /// Fetch recipes that use the given ingredient
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, HubError>;
}
