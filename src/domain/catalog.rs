//! Menu browsing helpers over a slice of dishes.

use super::{Dish, Money};

/// Pseudo-category that matches every dish.
pub const ALL_CATEGORIES: &str = "All";

fn in_category(dish: &Dish, category: &str) -> bool {
    category == ALL_CATEGORIES || dish.category == category
}

/// Dishes in `category`, in catalog order.
pub fn by_category<'a>(dishes: &'a [Dish], category: &str) -> Vec<&'a Dish> {
    dishes.iter().filter(|dish| in_category(dish, category)).collect()
}

/// Mean price within `category`. An empty category averages to zero.
pub fn average_price(dishes: &[Dish], category: &str) -> Money {
    let matching = by_category(dishes, category);
    let total = matching.iter().map(|dish| dish.price).sum();
    Money::mean(total, matching.len())
}

/// Category tabs: "All" followed by each category in order of first use.
pub fn categories(dishes: &[Dish]) -> Vec<String> {
    let mut tabs = vec![ALL_CATEGORIES.to_string()];
    for dish in dishes {
        if !tabs.iter().any(|tab| *tab == dish.category) {
            tabs.push(dish.category.clone());
        }
    }
    tabs
}
