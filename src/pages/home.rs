use log::info;

use crate::client::RecipeSource;
use crate::model::Recipe;
use crate::render;
use crate::state::{FetchState, Generation, RequestTracker};
use crate::HubError;

/// Featured recipes: a handful of random picks fetched on mount.
#[derive(Debug)]
pub struct HomePage {
    recipes: FetchState<Vec<Recipe>>,
    requests: RequestTracker,
    count: usize,
}

impl HomePage {
    pub fn new(count: usize) -> Self {
        Self {
            recipes: FetchState::Loading,
            requests: RequestTracker::new(),
            count,
        }
    }

    pub async fn mount(source: &dyn RecipeSource, count: usize) -> Self {
        let mut page = Self::new(count);
        page.reload(source).await;
        page
    }

    pub fn begin_load(&mut self) -> Generation {
        self.recipes = FetchState::Loading;
        self.requests.issue()
    }

    /// Returns false when the response was stale and dropped.
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
        let result = source.random_recipes(self.count).await;
        if let Ok(recipes) = &result {
            info!("Loaded {} featured recipes", recipes.len());
        }
        self.complete_load(generation, result);
    }

    pub fn state(&self) -> &FetchState<Vec<Recipe>> {
        &self.recipes
    }

    pub fn render(&self) -> String {
        match &self.recipes {
            FetchState::Loading => render::loading(),
            FetchState::Failed(message) => render::error(message),
            FetchState::Ready(recipes) => {
                format!("# Featured Recipes\n\n{}", render::recipe_grid(recipes))
            }
        }
    }
}
