use serde::{Deserialize, Deserializer, Serialize};

/// A recipe summary as returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: thumbnail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "idCategory", default)]
    pub id: Option<String>,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

impl Category {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            thumbnail: None,
            description: None,
        }
    }
}

/// `{"meals": [...]}` envelope. The API sends `"meals": null` for no results.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meals: Vec<Recipe>,
}

/// `{"categories": [...]}` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<Category>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_from_api_fields() {
        let json = r#"{
            "strMeal": "Beef and Mustard Pie",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/sytuqu1511553755.jpg",
            "idMeal": "52874"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "52874");
        assert_eq!(recipe.name, "Beef and Mustard Pie");
        assert!(recipe.thumbnail.ends_with("sytuqu1511553755.jpg"));
    }

    #[test]
    fn test_full_meal_ignores_extra_fields() {
        let json = r#"{"meals":[{"idMeal":"1","strMeal":"Soup","strMealThumb":"t.jpg",
            "strCategory":"Starter","strInstructions":"Boil.","strIngredient1":"Water"}]}"#;
        let envelope: MealsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.meals, vec![Recipe::new("1", "Soup", "t.jpg")]);
    }

    #[test]
    fn test_null_meals_is_empty() {
        let envelope: MealsEnvelope = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.meals.is_empty());
    }

    #[test]
    fn test_missing_meals_is_empty() {
        let envelope: MealsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.meals.is_empty());
    }

    #[test]
    fn test_category_optional_fields() {
        let json = r#"{"categories":[
            {"idCategory":"1","strCategory":"Beef","strCategoryThumb":"b.png","strCategoryDescription":"Beef."},
            {"strCategory":"Vegan"}
        ]}"#;
        let envelope: CategoriesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.categories.len(), 2);
        assert_eq!(envelope.categories[0].id.as_deref(), Some("1"));
        assert_eq!(envelope.categories[1], Category::named("Vegan"));
    }
}
