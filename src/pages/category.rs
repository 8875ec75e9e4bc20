use crate::client::RecipeSource;
use crate::model::Recipe;
use crate::pagination::PageView;
use crate::render;
use crate::state::{FetchState, Generation, RequestTracker};
use crate::HubError;

/// Listing scoped to one category taken from the route.
#[derive(Debug)]
pub struct CategoryPage {
    category: String,
    recipes: FetchState<Vec<Recipe>>,
    current_page: u32,
    requests: RequestTracker,
}

impl CategoryPage {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            recipes: FetchState::Loading,
            current_page: 1,
            requests: RequestTracker::new(),
        }
    }

    pub async fn mount(source: &dyn RecipeSource, category: &str) -> Self {
        let mut page = Self::new(category);
        page.reload(source).await;
        page
    }

    pub fn begin_load(&mut self) -> Generation {
        self.recipes = FetchState::Loading;
        self.requests.issue()
    }

    pub fn complete_load(
        &mut self,
        generation: Generation,
        result: Result<Vec<Recipe>, HubError>,
    ) -> bool {
        match self.requests.accept(generation, result) {
            Some(result) => {
                self.recipes = FetchState::resolve(result);
                true
            }
            None => false,
        }
    }

    pub async fn reload(&mut self, source: &dyn RecipeSource) {
        let generation = self.begin_load();
        let result = source.meals_by_category(&self.category).await;
        self.complete_load(generation, result);
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.current_page = page;
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn state(&self) -> &FetchState<Vec<Recipe>> {
        &self.recipes
    }

    pub fn view(&self) -> Option<PageView<'_, Recipe>> {
        self.recipes
            .data()
            .map(|recipes| PageView::of(recipes.as_slice(), self.current_page))
    }

    pub fn render(&self) -> String {
        match &self.recipes {
            FetchState::Loading => render::loading(),
            FetchState::Failed(message) => render::error(message),
            FetchState::Ready(recipes) => {
                let view = PageView::of(recipes.as_slice(), self.current_page);
                render::listing(&self.category, &view)
            }
        }
    }
}
