//! Category display formatting

use crate::models::Category;

/// Format categories as a table in display order
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'spendwise init' to create the default categories.\n"
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<24}  {:<7}  {}\n",
        "Category",
        "Icon",
        "Color",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:-<24}  {:-<7}  {:-<12}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:<24}  {:<7}  {}\n",
            category.name,
            category.icon,
            category.color,
            category.id,
            width = name_width
        ));
    }

    output
}

/// Format category details along with how much references it
pub fn format_category_details(category: &Category, transaction_count: usize, budget_count: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:           {}\n", category.id));
    output.push_str(&format!("  Icon:         {}\n", category.icon));
    output.push_str(&format!("  Color:        {}\n", category.color));
    output.push_str(&format!("  Transactions: {}\n", transaction_count));
    output.push_str(&format!("  Budgets:      {}\n", budget_count));

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        category.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        category.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        assert!(format_category_list(&[]).contains("No categories found"));
    }

    #[test]
    fn test_format_category_list() {
        let categories = vec![
            Category::new("Food", "fork.knife", "#FF9500"),
            Category::new("Entertainment", "film.fill", "#FF2D55"),
        ];
        let output = format_category_list(&categories);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Food "));
        assert!(lines[3].contains("#FF2D55"));
        assert!(lines[3].contains(&categories[1].id.to_string()));
    }

    #[test]
    fn test_format_category_details() {
        let category = Category::new("Health", "heart.fill", "#FF3B30");
        let output = format_category_details(&category, 3, 1);
        assert!(output.contains("Category: Health"));
        assert!(output.contains("Transactions: 3"));
        assert!(output.contains("Budgets:      1"));
    }
}
