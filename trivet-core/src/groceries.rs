//! Grocery aggregation rules.
//!
//! The grocery list maps exact ingredient names to a combined measure
//! string. Keys are compared byte-for-byte: "Salt", "salt", and " Salt"
//! are three different groceries. Normalizing them would change which
//! entries group together, so none is applied.

use crate::types::Groceries;

/// Separator between measures when an ingredient repeats across liked
/// meals.
pub const MEASURE_SEPARATOR: &str = " + ";

/// Merge one meal's extracted ingredient pairs into a grocery list.
///
/// Returns a new mapping and leaves `current` untouched, so existing
/// readers of the previous state keep a consistent view. An ingredient
/// already on the list gets the new measure appended to its combined
/// measure, in extraction order; a new ingredient is inserted with the
/// measure as-is. Merging the same meal twice compounds the measures:
/// repeated likes are cumulative, not idempotent.
pub fn merge<'a, I>(current: &Groceries, pairs: I) -> Groceries
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut next = current.clone();
    for (ingredient, measure) in pairs {
        match next.get_mut(ingredient) {
            Some(combined) => {
                combined.push_str(MEASURE_SEPARATOR);
                combined.push_str(measure);
            }
            None => {
                next.insert(ingredient.to_string(), measure.to_string());
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries(entries: &[(&str, &str)]) -> Groceries {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn inserts_new_ingredients_as_is() {
        let merged = merge(&Groceries::new(), vec![("Salt", "1 tsp")]);
        assert_eq!(merged, groceries(&[("Salt", "1 tsp")]));
    }

    #[test]
    fn appends_measures_for_repeated_ingredients() {
        let current = groceries(&[("Egg", "2"), ("Milk", "1 cup")]);
        let merged = merge(&current, vec![("Egg", "1"), ("Flour", "2 cups")]);
        assert_eq!(
            merged,
            groceries(&[("Egg", "2 + 1"), ("Milk", "1 cup"), ("Flour", "2 cups")])
        );
    }

    #[test]
    fn merging_the_same_meal_twice_compounds() {
        let once = merge(&Groceries::new(), vec![("Salt", "1 tsp")]);
        let twice = merge(&once, vec![("Salt", "1 tsp")]);
        assert_eq!(twice, groceries(&[("Salt", "1 tsp + 1 tsp")]));
    }

    #[test]
    fn does_not_mutate_the_input() {
        let current = groceries(&[("Salt", "1 tsp")]);
        let _ = merge(&current, vec![("Salt", "1 pinch"), ("Pepper", "to taste")]);
        assert_eq!(current, groceries(&[("Salt", "1 tsp")]));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let current = groceries(&[("Salt", "1 tsp")]);
        let merged = merge(&current, vec![("salt", "2 tsp")]);
        assert_eq!(merged, groceries(&[("Salt", "1 tsp"), ("salt", "2 tsp")]));
    }

    #[test]
    fn keys_keep_surrounding_whitespace() {
        let current = groceries(&[("Salt", "1 tsp")]);
        let merged = merge(&current, vec![(" Salt", "2 tsp")]);
        assert_eq!(merged, groceries(&[("Salt", "1 tsp"), (" Salt", "2 tsp")]));
    }

    #[test]
    fn empty_measures_still_append() {
        let current = groceries(&[("Salt", "1 tsp")]);
        let merged = merge(&current, vec![("Salt", "")]);
        assert_eq!(merged, groceries(&[("Salt", "1 tsp + ")]));
    }
}
