use async_trait::async_trait;
use futures::future::try_join_all;
use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::client::RecipeSource;
use crate::config::HubConfig;
use crate::model::{CategoriesEnvelope, Category, MealsEnvelope, Recipe};
use crate::HubError;

/// HTTP client for TheMealDB-compatible JSON APIs
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a new client from configuration
    pub fn new(config: &HubConfig) -> Result<Self, HubError> {
        Self::with_base_url(&config.base_url, Some(Duration::from_secs(config.timeout)))
    }

    /// Create a client pointed at an arbitrary base address
    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> Result<Self, HubError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| HubError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout.unwrap_or(Duration::from_secs(30)))
            .user_agent(concat!("recipehub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, HubError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HubError::Status { status, url });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_meals(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<Recipe>, HubError> {
        let envelope: MealsEnvelope = self.get_json(endpoint, query).await?;
        debug!("{} returned {} meals", endpoint, envelope.meals.len());
        Ok(envelope.meals)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn random_recipes(&self, count: usize) -> Result<Vec<Recipe>, HubError> {
        // random.php yields a single meal per call
        let batches = try_join_all((0..count).map(|_| self.get_meals("random.php", &[]))).await?;
        Ok(batches.into_iter().flatten().collect())
    }

    async fn meals_by_category(&self, category: &str) -> Result<Vec<Recipe>, HubError> {
        self.get_meals("filter.php", &[("c", category)]).await
    }

    async fn all_meals(&self) -> Result<Vec<Recipe>, HubError> {
        self.get_meals("search.php", &[("s", "")]).await
    }

    async fn categories(&self) -> Result<Vec<Category>, HubError> {
        let envelope: CategoriesEnvelope = self.get_json("categories.php", &[]).await?;
        Ok(envelope.categories)
    }

    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, HubError> {
        self.get_meals("filter.php", &[("i", ingredient)]).await
    }
}
