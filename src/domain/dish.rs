use super::Money;

pub type DishId = String;

/// Category used when a dish is saved without one.
pub const DEFAULT_CATEGORY: &str = "Mains";

/// A purchasable menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub price: Money,
    pub description: String,
    pub category: String,
    /// Opaque image URI, empty when the dish has no picture.
    pub image: String,
}

impl Dish {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
