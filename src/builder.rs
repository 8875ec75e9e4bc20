use std::time::Duration;

use log::debug;

use crate::client::{MealDbClient, RecipeSource};
use crate::config::HubConfig;
use crate::pages::Page;
use crate::render;
use crate::router::Route;
use crate::HubError;

/// Builder for configuring a [`RecipeHub`]
#[derive(Default)]
pub struct RecipeHubBuilder {
    config: Option<HubConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    random_count: Option<usize>,
    source: Option<Box<dyn RecipeSource>>,
}

impl RecipeHubBuilder {
    /// Start from a loaded configuration instead of the defaults
    ///
    /// # Example
    /// ```
    /// use recipehub::{HubConfig, RecipeHub};
    ///
    /// let builder = RecipeHub::builder().config(HubConfig::default());
    /// ```
    pub fn config(mut self, config: HubConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the recipe provider's base address
    ///
    /// # Example
    /// ```
    /// use recipehub::RecipeHub;
    ///
    /// let builder = RecipeHub::builder()
    ///     .base_url("https://www.themealdb.com/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// Takes precedence over the whole-second `timeout` from [`HubConfig`].
    ///
    /// # Example
    /// ```
    /// use recipehub::RecipeHub;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeHub::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Number of random recipes on the home page
    pub fn random_count(mut self, count: usize) -> Self {
        self.random_count = Some(count);
        self
    }

    /// Use a custom data provider instead of the HTTP client
    pub fn source(mut self, source: impl RecipeSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Build the hub
    ///
    /// # Errors
    /// Returns `HubError` if:
    /// - the base URL cannot be parsed
    /// - the HTTP client cannot be constructed
    /// - a custom source is combined with HTTP-only options
    pub fn build(self) -> Result<RecipeHub, HubError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(count) = self.random_count {
            config.random_count = count;
        }

        let (source, timeout): (Box<dyn RecipeSource>, _) = match self.source {
            Some(source) => {
                if self.base_url.is_some() || self.timeout.is_some() {
                    return Err(HubError::BuilderError(
                        "base_url() and timeout() only apply to the built-in HTTP client"
                            .to_string(),
                    ));
                }
                (source, None)
            }
            None => {
                if let Some(url) = self.base_url {
                    config.base_url = url;
                }
                let timeout = self
                    .timeout
                    .unwrap_or(Duration::from_secs(config.timeout));
                debug!(
                    "Using recipe provider at {} (timeout {:?})",
                    config.base_url, timeout
                );
                let client = MealDbClient::with_base_url(&config.base_url, Some(timeout))?;
                (Box::new(client), Some(timeout))
            }
        };

        Ok(RecipeHub {
            source,
            config,
            timeout,
        })
    }
}

/// The application: a data provider plus the routes that read from it
pub struct RecipeHub {
    source: Box<dyn RecipeSource>,
    config: HubConfig,
    timeout: Option<Duration>,
}

impl RecipeHub {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipehub::RecipeHub;
    ///
    /// let builder = RecipeHub::builder();
    /// ```
    pub fn builder() -> RecipeHubBuilder {
        RecipeHubBuilder::default()
    }

    pub fn source(&self) -> &dyn RecipeSource {
        self.source.as_ref()
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Request timeout of the built-in HTTP client; `None` for custom sources
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolve `path` and mount the matching page
    pub async fn navigate(&self, path: &str) -> Page {
        let route = Route::parse(path);
        Page::open(&route, self.source(), self.config.random_count).await
    }

    /// Render a page inside the common layout
    pub fn render(&self, page: &Page) -> String {
        render::layout(&page.render(), render::current_year())
    }
}
