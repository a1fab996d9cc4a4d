use crate::types::MealRecord;

/// Number of positional ingredient slots in a meal record.
pub const MAX_SLOTS: usize = 20;

/// Iterate over the usable (ingredient, measure) pairs of a meal, in slot
/// order 1 through 20.
///
/// Slots whose ingredient is absent, empty, or whitespace-only are skipped;
/// the blank check trims a copy, the yielded name stays exactly as the
/// record carries it. Measures pass through unmodified, with an absent
/// measure yielded as `""`, so callers must not assume a non-empty measure.
/// Calling this again restarts the walk from slot 1.
pub fn ingredients(meal: &MealRecord) -> Ingredients<'_> {
    Ingredients {
        slots: meal.slots(),
        next: 0,
    }
}

/// Lazy iterator over a meal's usable ingredient slots.
#[derive(Clone)]
pub struct Ingredients<'a> {
    slots: [(Option<&'a str>, Option<&'a str>); MAX_SLOTS],
    next: usize,
}

impl<'a> Iterator for Ingredients<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < MAX_SLOTS {
            let (ingredient, measure) = self.slots[self.next];
            self.next += 1;
            if let Some(name) = ingredient {
                if !name.trim().is_empty() {
                    return Some((name, measure.unwrap_or("")));
                }
            }
        }
        None
    }
}
