pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod groceries;
pub mod meals;
pub mod session;
pub mod source;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::{FetchError, StoreError};
pub use export::{render_grocery_list, write_grocery_list};
pub use extract::{ingredients, Ingredients, MAX_SLOTS};
pub use fetch::fetch_random_meal;
pub use groceries::{merge, MEASURE_SEPARATOR};
pub use meals::record;
pub use session::Session;
pub use source::{
    MealDbClient, MealDbClientBuilder, MealSource, MockMeal, MockMealSource, DEFAULT_ENDPOINT,
};
pub use store::MealStore;
pub use types::{Groceries, LikedMeals, MealRecord, MealsResponse};
