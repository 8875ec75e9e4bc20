pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod pagination;
pub mod render;
pub mod router;
pub mod shell;
pub mod state;

pub use builder::{RecipeHub, RecipeHubBuilder};
pub use client::{MealDbClient, RecipeSource};
pub use crate::config::HubConfig;
pub use error::HubError;
pub use model::{Category, Recipe};
pub use pages::{CategoryPage, HomePage, Page, RecipesPage};
pub use pagination::{PageView, PAGE_SIZE};
pub use router::Route;
pub use state::{FetchState, Generation};

/// Fetch a page by path with the default configuration and render it with
/// the common layout.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let text = recipehub::render_path("/recipes").await?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
pub async fn render_path(path: &str) -> Result<String, HubError> {
    let hub = RecipeHub::builder().config(HubConfig::load()?).build()?;
    let page = hub.navigate(path).await;
    Ok(hub.render(&page))
}
