//! Grocery list export.
//!
//! Pure presentation over the grocery mapping; nothing here feeds back
//! into session state.

use chrono::Utc;
use std::fs;
use std::path::Path;

use crate::types::Groceries;

/// Render the grocery list as one `ingredient: measure` line per entry.
///
/// Entries come out in the mapping's order, so equal lists always render
/// identically.
pub fn render_grocery_list(groceries: &Groceries) -> String {
    let mut doc = String::new();
    for (ingredient, measure) in groceries {
        doc.push_str(ingredient);
        doc.push_str(": ");
        doc.push_str(measure);
        doc.push('\n');
    }
    doc
}

/// Write the grocery list to a file, with a generated-at header.
pub fn write_grocery_list(groceries: &Groceries, path: &Path) -> std::io::Result<()> {
    let header = format!(
        "Grocery list ({} items)\nGenerated: {}\n\n",
        groceries.len(),
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    );
    fs::write(path, header + &render_grocery_list(groceries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn groceries(entries: &[(&str, &str)]) -> Groceries {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn renders_one_line_per_entry() {
        let list = groceries(&[("Egg", "2 + 1"), ("Milk", "1 cup")]);
        assert_eq!(render_grocery_list(&list), "Egg: 2 + 1\nMilk: 1 cup\n");
    }

    #[test]
    fn renders_nothing_for_an_empty_list() {
        assert_eq!(render_grocery_list(&Groceries::new()), "");
    }

    #[test]
    fn written_document_carries_header_and_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grocery-list.txt");
        let list = groceries(&[("Egg", "2"), ("Salt", "1 tsp")]);

        write_grocery_list(&list, &path).unwrap();
        let doc = fs::read_to_string(&path).unwrap();

        assert!(doc.starts_with("Grocery list (2 items)\n"));
        assert!(doc.ends_with("\nEgg: 2\nSalt: 1 tsp\n"));
    }
}
