//! Plain-text views. Every function here is a pure function of its inputs.

use chrono::Datelike;

use crate::model::{Category, Recipe};
use crate::pagination::{page_numbers, PageView};

pub fn recipe_card(recipe: &Recipe) -> String {
    format!("+ {}\n  {}\n", recipe.name, recipe.thumbnail)
}

pub fn recipe_grid(recipes: &[Recipe]) -> String {
    recipes.iter().map(recipe_card).collect()
}

pub fn loading() -> String {
    "Loading...\n".to_string()
}

pub fn error(message: &str) -> String {
    format!("Error: {message}\n")
}

/// One button per page; the current one is starred.
pub fn pagination(current_page: u32, total_pages: u32) -> String {
    if total_pages == 0 {
        return String::new();
    }
    let buttons: Vec<String> = page_numbers(total_pages)
        .into_iter()
        .map(|number| {
            if number == current_page {
                format!("[*{number}*]")
            } else {
                format!("[{number}]")
            }
        })
        .collect();
    format!("{}\n", buttons.join(" "))
}

/// Category picker. An empty selection means "All Categories".
pub fn category_select(categories: &[Category], selected: &str) -> String {
    let mark = |active: bool| if active { "(x)" } else { "( )" };
    let mut out = format!("{} All Categories\n", mark(selected.is_empty()));
    for category in categories {
        out.push_str(&format!(
            "{} {}\n",
            mark(category.name == selected),
            category.name
        ));
    }
    out
}

/// A titled, paginated grid.
pub fn listing(title: &str, view: &PageView<'_, Recipe>) -> String {
    let mut out = format!("# {title}\n\n");
    out.push_str(&recipe_grid(view.items));
    out.push('\n');
    out.push_str(&pagination(view.current_page, view.total_pages));
    out
}

pub fn not_found() -> String {
    "404 - Page Not Found\n".to_string()
}

/// Common chrome around every page.
pub fn layout(body: &str, year: i32) -> String {
    format!("Home (/Home) | Recipes (/recipes)\n\n{body}\n© {year} RecipeHub\n")
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_card() {
        let card = recipe_card(&Recipe::new("1", "Teriyaki Chicken", "http://img/t.jpg"));
        assert_eq!(card, "+ Teriyaki Chicken\n  http://img/t.jpg\n");
    }

    #[test]
    fn test_error_view() {
        assert_eq!(error("network down"), "Error: network down\n");
    }

    #[test]
    fn test_pagination_marks_current() {
        assert_eq!(pagination(2, 3), "[1] [*2*] [3]\n");
    }

    #[test]
    fn test_pagination_empty() {
        assert_eq!(pagination(1, 0), "");
    }

    #[test]
    fn test_pagination_no_truncation() {
        let strip = pagination(1, 40);
        assert_eq!(strip.matches('[').count(), 40);
        assert!(strip.contains("[40]"));
    }

    #[test]
    fn test_category_select() {
        let categories = vec![Category::named("Beef"), Category::named("Dessert")];
        assert_eq!(
            category_select(&categories, "Dessert"),
            "( ) All Categories\n( ) Beef\n(x) Dessert\n"
        );
        assert!(category_select(&categories, "").starts_with("(x) All Categories"));
    }

    #[test]
    fn test_layout_footer() {
        let page = layout("body\n", 2024);
        assert!(page.starts_with("Home (/Home) | Recipes (/recipes)"));
        assert!(page.contains("body"));
        assert!(page.ends_with("© 2024 RecipeHub\n"));
    }
}
