use serde::Deserialize;
use std::collections::BTreeMap;

/// Liked meals, keyed by meal name. The value is the meal's source link, or
/// an empty string when the record carries none. Liking a meal again
/// overwrites its entry rather than duplicating it.
pub type LikedMeals = BTreeMap<String, String>;

/// Grocery list, keyed by exact ingredient name (case- and
/// whitespace-sensitive). The value is the combined measure string across
/// every liked meal containing the ingredient.
pub type Groceries = BTreeMap<String, String>;

/// Wire shape of the random-meal endpoint: a `meals` array that normally
/// holds exactly one record, but may be `null` or missing on odd responses.
#[derive(Debug, Clone, Deserialize)]
pub struct MealsResponse {
    pub meals: Option<Vec<MealRecord>>,
}

/// One meal as served by TheMealDB.
///
/// Only the name and thumbnail are required; everything else decodes
/// tolerantly because the API pads unused ingredient slots with `""` or
/// `null` depending on the record, and omits or nulls the link fields.
/// Unknown upstream fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    #[serde(rename = "strSource")]
    pub source: Option<String>,
    #[serde(rename = "strIngredient1")]
    pub ingredient1: Option<String>,
    #[serde(rename = "strMeasure1")]
    pub measure1: Option<String>,
    #[serde(rename = "strIngredient2")]
    pub ingredient2: Option<String>,
    #[serde(rename = "strMeasure2")]
    pub measure2: Option<String>,
    #[serde(rename = "strIngredient3")]
    pub ingredient3: Option<String>,
    #[serde(rename = "strMeasure3")]
    pub measure3: Option<String>,
    #[serde(rename = "strIngredient4")]
    pub ingredient4: Option<String>,
    #[serde(rename = "strMeasure4")]
    pub measure4: Option<String>,
    #[serde(rename = "strIngredient5")]
    pub ingredient5: Option<String>,
    #[serde(rename = "strMeasure5")]
    pub measure5: Option<String>,
    #[serde(rename = "strIngredient6")]
    pub ingredient6: Option<String>,
    #[serde(rename = "strMeasure6")]
    pub measure6: Option<String>,
    #[serde(rename = "strIngredient7")]
    pub ingredient7: Option<String>,
    #[serde(rename = "strMeasure7")]
    pub measure7: Option<String>,
    #[serde(rename = "strIngredient8")]
    pub ingredient8: Option<String>,
    #[serde(rename = "strMeasure8")]
    pub measure8: Option<String>,
    #[serde(rename = "strIngredient9")]
    pub ingredient9: Option<String>,
    #[serde(rename = "strMeasure9")]
    pub measure9: Option<String>,
    #[serde(rename = "strIngredient10")]
    pub ingredient10: Option<String>,
    #[serde(rename = "strMeasure10")]
    pub measure10: Option<String>,
    #[serde(rename = "strIngredient11")]
    pub ingredient11: Option<String>,
    #[serde(rename = "strMeasure11")]
    pub measure11: Option<String>,
    #[serde(rename = "strIngredient12")]
    pub ingredient12: Option<String>,
    #[serde(rename = "strMeasure12")]
    pub measure12: Option<String>,
    #[serde(rename = "strIngredient13")]
    pub ingredient13: Option<String>,
    #[serde(rename = "strMeasure13")]
    pub measure13: Option<String>,
    #[serde(rename = "strIngredient14")]
    pub ingredient14: Option<String>,
    #[serde(rename = "strMeasure14")]
    pub measure14: Option<String>,
    #[serde(rename = "strIngredient15")]
    pub ingredient15: Option<String>,
    #[serde(rename = "strMeasure15")]
    pub measure15: Option<String>,
    #[serde(rename = "strIngredient16")]
    pub ingredient16: Option<String>,
    #[serde(rename = "strMeasure16")]
    pub measure16: Option<String>,
    #[serde(rename = "strIngredient17")]
    pub ingredient17: Option<String>,
    #[serde(rename = "strMeasure17")]
    pub measure17: Option<String>,
    #[serde(rename = "strIngredient18")]
    pub ingredient18: Option<String>,
    #[serde(rename = "strMeasure18")]
    pub measure18: Option<String>,
    #[serde(rename = "strIngredient19")]
    pub ingredient19: Option<String>,
    #[serde(rename = "strMeasure19")]
    pub measure19: Option<String>,
    #[serde(rename = "strIngredient20")]
    pub ingredient20: Option<String>,
    #[serde(rename = "strMeasure20")]
    pub measure20: Option<String>,
}

impl MealRecord {
    /// Preview-sized thumbnail URL, the variant shown while swiping.
    pub fn thumbnail_preview(&self) -> String {
        format!("{}/preview", self.thumbnail)
    }

    /// Video link, if the record carries a non-empty one.
    pub fn video(&self) -> Option<&str> {
        non_empty(&self.youtube)
    }

    /// Source link, if the record carries a non-empty one.
    pub fn source(&self) -> Option<&str> {
        non_empty(&self.source)
    }

    /// Category label, if the record carries a non-empty one.
    pub fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    /// Cuisine/area label, if the record carries a non-empty one.
    pub fn area(&self) -> Option<&str> {
        non_empty(&self.area)
    }

    /// The twenty positional (ingredient, measure) slots in slot order.
    pub(crate) fn slots(&self) -> [(Option<&str>, Option<&str>); 20] {
        [
            (self.ingredient1.as_deref(), self.measure1.as_deref()),
            (self.ingredient2.as_deref(), self.measure2.as_deref()),
            (self.ingredient3.as_deref(), self.measure3.as_deref()),
            (self.ingredient4.as_deref(), self.measure4.as_deref()),
            (self.ingredient5.as_deref(), self.measure5.as_deref()),
            (self.ingredient6.as_deref(), self.measure6.as_deref()),
            (self.ingredient7.as_deref(), self.measure7.as_deref()),
            (self.ingredient8.as_deref(), self.measure8.as_deref()),
            (self.ingredient9.as_deref(), self.measure9.as_deref()),
            (self.ingredient10.as_deref(), self.measure10.as_deref()),
            (self.ingredient11.as_deref(), self.measure11.as_deref()),
            (self.ingredient12.as_deref(), self.measure12.as_deref()),
            (self.ingredient13.as_deref(), self.measure13.as_deref()),
            (self.ingredient14.as_deref(), self.measure14.as_deref()),
            (self.ingredient15.as_deref(), self.measure15.as_deref()),
            (self.ingredient16.as_deref(), self.measure16.as_deref()),
            (self.ingredient17.as_deref(), self.measure17.as_deref()),
            (self.ingredient18.as_deref(), self.measure18.as_deref()),
            (self.ingredient19.as_deref(), self.measure19.as_deref()),
            (self.ingredient20.as_deref(), self.measure20.as_deref()),
        ]
    }
}

/// Treat missing and empty strings the same way: both mean "not there".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_minimal_record() {
        let meal: MealRecord = serde_json::from_value(json!({
            "strMeal": "Chili",
            "strMealThumb": "https://example.com/chili.jpg",
        }))
        .unwrap();

        assert_eq!(meal.name, "Chili");
        assert_eq!(
            meal.thumbnail_preview(),
            "https://example.com/chili.jpg/preview"
        );
        assert_eq!(meal.video(), None);
        assert_eq!(meal.source(), None);
        assert!(meal.slots().iter().all(|(i, m)| i.is_none() && m.is_none()));
    }

    #[test]
    fn empty_strings_count_as_absent_links() {
        let meal: MealRecord = serde_json::from_value(json!({
            "strMeal": "Chili",
            "strMealThumb": "https://example.com/chili.jpg",
            "strYoutube": "",
            "strSource": null,
            "strCategory": "Beef",
        }))
        .unwrap();

        assert_eq!(meal.video(), None);
        assert_eq!(meal.source(), None);
        assert_eq!(meal.category(), Some("Beef"));
        assert_eq!(meal.area(), None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let response: MealsResponse = serde_json::from_value(json!({
            "meals": [{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strMealThumb": "https://example.com/teriyaki.jpg",
                "strInstructions": "Preheat oven to 350F...",
                "strTags": "Meat,Casserole",
                "dateModified": null,
            }]
        }))
        .unwrap();

        let meals = response.meals.unwrap();
        assert_eq!(meals[0].name, "Teriyaki Chicken Casserole");
    }

    #[test]
    fn null_meals_array_decodes() {
        let response: MealsResponse = serde_json::from_value(json!({ "meals": null })).unwrap();
        assert!(response.meals.is_none());
    }
}
