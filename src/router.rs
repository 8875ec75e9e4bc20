/// Navigation targets, matched from URL-style paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Recipes,
    Category(String),
    NotFound,
}

impl Route {
    /// Match a path. Trailing slashes are ignored; matching is case-sensitive.
    ///
    /// # Example
    /// ```
    /// use recipehub::Route;
    ///
    /// assert_eq!(Route::parse("/Home"), Route::Home);
    /// assert_eq!(Route::parse("/category/Side%20Dish"), Route::Category("Side Dish".into()));
    /// assert_eq!(Route::parse("/nowhere"), Route::NotFound);
    /// ```
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let trimmed = match trimmed.trim_end_matches('/') {
            "" => "/",
            rest => rest,
        };

        match trimmed {
            "/" | "/Home" => Route::Home,
            "/recipes" => Route::Recipes,
            other => other
                .strip_prefix("/category/")
                .filter(|name| !name.is_empty() && !name.contains('/'))
                .and_then(|name| urlencoding::decode(name).ok())
                .map(|name| Route::Category(name.into_owned()))
                .unwrap_or(Route::NotFound),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/Home".to_string(),
            Route::Recipes => "/recipes".to_string(),
            Route::Category(name) => format!("/category/{}", urlencoding::encode(name)),
            Route::NotFound => "/404".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_aliases() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/Home"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Route::parse("/recipes/"), Route::Recipes);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(Route::parse("/home"), Route::NotFound);
        assert_eq!(Route::parse("/Recipes"), Route::NotFound);
    }

    #[test]
    fn test_category() {
        assert_eq!(Route::parse("/category/Beef"), Route::Category("Beef".into()));
        assert_eq!(Route::parse("/category/"), Route::NotFound);
        assert_eq!(Route::parse("/category/Beef/extra"), Route::NotFound);
    }

    #[test]
    fn test_category_path_roundtrip() {
        let route = Route::Category("Side Dish".into());
        assert_eq!(route.path(), "/category/Side%20Dish");
        assert_eq!(Route::parse(&route.path()), route);
    }
}
