use crate::types::LikedMeals;

/// Record a liked meal.
///
/// Returns a new mapping with `name` inserted or overwritten; liking the
/// same meal twice replaces its source link rather than duplicating the
/// entry. This dedup is independent of grocery aggregation: a repeated
/// like still re-merges the meal's ingredients.
pub fn record(current: &LikedMeals, name: &str, source: &str) -> LikedMeals {
    let mut next = current.clone();
    next.insert(name.to_string(), source.to_string());
    next
}
