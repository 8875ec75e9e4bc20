mod category;
mod home;
mod recipes;

pub use category::CategoryPage;
pub use home::HomePage;
pub use recipes::RecipesPage;

use log::debug;

use crate::client::RecipeSource;
use crate::render;
use crate::router::Route;

/// A mounted page container
#[derive(Debug)]
pub enum Page {
    Home(HomePage),
    Recipes(RecipesPage),
    Category(CategoryPage),
    NotFound,
}

impl Page {
    /// Mount the container for `route`, running its initial fetches.
    pub async fn open(route: &Route, source: &dyn RecipeSource, random_count: usize) -> Self {
        debug!("Mounting {:?}", route);
        match route {
            Route::Home => Page::Home(HomePage::mount(source, random_count).await),
            Route::Recipes => Page::Recipes(RecipesPage::mount(source).await),
            Route::Category(name) => Page::Category(CategoryPage::mount(source, name).await),
            Route::NotFound => Page::NotFound,
        }
    }

    /// Page body without the surrounding layout
    pub fn render(&self) -> String {
        match self {
            Page::Home(page) => page.render(),
            Page::Recipes(page) => page.render(),
            Page::Category(page) => page.render(),
            Page::NotFound => render::not_found(),
        }
    }

    /// Move the cursor on paginated pages. Returns false if the page has none.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        match self {
            Page::Recipes(recipes) => {
                recipes.go_to_page(page);
                true
            }
            Page::Category(category) => {
                category.go_to_page(page);
                true
            }
            Page::Home(_) | Page::NotFound => false,
        }
    }

    /// Re-run the page's primary fetch
    pub async fn reload(&mut self, source: &dyn RecipeSource) {
        match self {
            Page::Home(page) => page.reload(source).await,
            Page::Recipes(page) => page.reload(source).await,
            Page::Category(page) => page.reload(source).await,
            Page::NotFound => {}
        }
    }
}
