use log::{info, warn};

use crate::client::RecipeSource;
use crate::model::{Category, Recipe};
use crate::pagination::PageView;
use crate::render;
use crate::state::{FetchState, Generation, RequestTracker};
use crate::HubError;

/// The browse listing: category filter, ingredient search and pagination.
///
/// The browse set follows the loading/ready/failed machine. The search set
/// lives outside it: search failures become an empty set and never reach the
/// error view. A non-empty search set shadows the browse set until a search
/// comes back empty.
#[derive(Debug)]
pub struct RecipesPage {
    browse: FetchState<Vec<Recipe>>,
    search_results: Vec<Recipe>,
    categories: Vec<Category>,
    selected_category: String,
    current_page: u32,
    browse_requests: RequestTracker,
    search_requests: RequestTracker,
}

impl Default for RecipesPage {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipesPage {
    pub fn new() -> Self {
        Self {
            browse: FetchState::Loading,
            search_results: Vec::new(),
            categories: Vec::new(),
            selected_category: String::new(),
            current_page: 1,
            browse_requests: RequestTracker::new(),
            search_requests: RequestTracker::new(),
        }
    }

    /// Fetch the unfiltered browse set and the category list.
    pub async fn mount(source: &dyn RecipeSource) -> Self {
        let mut page = Self::new();
        let generation = page.begin_browse();
        let (browse, categories) = tokio::join!(source.all_meals(), source.categories());
        page.complete_browse(generation, browse);
        page.set_categories(categories);
        page
    }

    /// Category-list failures are only logged; the filter just stays empty.
    pub fn set_categories(&mut self, result: Result<Vec<Category>, HubError>) {
        match result {
            Ok(categories) => self.categories = categories,
            Err(e) => warn!("Error fetching categories: {}", e),
        }
    }

    /// Re-enter loading for the current selection.
    pub fn begin_browse(&mut self) -> Generation {
        self.browse = FetchState::Loading;
        self.browse_requests.issue()
    }

    /// Switch category: cursor back to 1, browse set reloaded. The search set
    /// is left alone.
    pub fn begin_category_change(&mut self, category: impl Into<String>) -> Generation {
        self.selected_category = category.into();
        self.current_page = 1;
        self.begin_browse()
    }

    /// Returns false when the response was stale and dropped.
    pub fn complete_browse(
        &mut self,
        generation: Generation,
        result: Result<Vec<Recipe>, HubError>,
    ) -> bool {
        match self.browse_requests.accept(generation, result) {
            Some(result) => {
                if let Ok(recipes) = &result {
                    info!(
                        "Loaded {} recipes for {}",
                        recipes.len(),
                        self.selection_label()
                    );
                }
                self.browse = FetchState::resolve(result);
                true
            }
            None => false,
        }
    }

    pub async fn select_category(&mut self, source: &dyn RecipeSource, category: &str) {
        let generation = self.begin_category_change(category);
        let result = fetch_browse(source, category).await;
        self.complete_browse(generation, result);
    }

    pub async fn reload(&mut self, source: &dyn RecipeSource) {
        let generation = self.begin_browse();
        let category = self.selected_category.clone();
        let result = fetch_browse(source, &category).await;
        self.complete_browse(generation, result);
    }

    pub fn begin_search(&mut self) -> Generation {
        self.search_requests.issue()
    }

    /// Store a search result. Errors degrade to an empty result set.
    pub fn complete_search(
        &mut self,
        generation: Generation,
        result: Result<Vec<Recipe>, HubError>,
    ) -> bool {
        let Some(result) = self.search_requests.accept(generation, result) else {
            return false;
        };
        self.search_results = result.unwrap_or_else(|e| {
            warn!("Search error: {}", e);
            Vec::new()
        });
        true
    }

    pub async fn search(&mut self, source: &dyn RecipeSource, ingredient: &str) {
        let generation = self.begin_search();
        let result = source.search_by_ingredient(ingredient).await;
        self.complete_search(generation, result);
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.current_page = page;
    }

    pub fn state(&self) -> &FetchState<Vec<Recipe>> {
        &self.browse
    }

    pub fn search_results(&self) -> &[Recipe] {
        &self.search_results
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// The visible page, once the browse set is ready.
    pub fn view(&self) -> Option<PageView<'_, Recipe>> {
        self.browse.data().map(|browse| {
            PageView::select(
                browse.as_slice(),
                self.search_results.as_slice(),
                self.current_page,
            )
        })
    }

    pub fn render(&self) -> String {
        match &self.browse {
            FetchState::Loading => render::loading(),
            FetchState::Failed(message) => render::error(message),
            FetchState::Ready(browse) => {
                let view = PageView::select(
                    browse.as_slice(),
                    self.search_results.as_slice(),
                    self.current_page,
                );
                let mut out = render::category_select(&self.categories, &self.selected_category);
                out.push('\n');
                out.push_str(&render::listing("Recipes", &view));
                out
            }
        }
    }

    fn selection_label(&self) -> &str {
        if self.selected_category.is_empty() {
            "all categories"
        } else {
            &self.selected_category
        }
    }
}

/// An empty category means the unfiltered listing.
async fn fetch_browse(
    source: &dyn RecipeSource,
    category: &str,
) -> Result<Vec<Recipe>, HubError> {
    if category.is_empty() {
        source.all_meals().await
    } else {
        source.meals_by_category(category).await
    }
}
