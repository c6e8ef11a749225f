use crate::domain::{Money, DEFAULT_CATEGORY};
use super::DishError;

/// Message shown when the dish form is submitted without its required fields.
pub const MISSING_FIELDS: &str = "Please enter dish name and price.";

/// Raw dish form input, as typed.
#[derive(Debug, Clone, Default)]
pub struct DishDraft {
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl DishDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Checks the form and produces the fields a dish is built from.
    ///
    /// # Errors
    /// - `Validation` when the name or price is blank
    /// - `InvalidPrice` when the price text is not a non-negative amount
    pub fn validate(self) -> Result<DishFields, DishError> {
        let name = self.name.trim();
        if name.is_empty() || self.price.trim().is_empty() {
            return Err(DishError::Validation(MISSING_FIELDS.to_string()));
        }
        let price: Money = self.price.parse()?;
        let category = match self.category.trim() {
            "" => DEFAULT_CATEGORY,
            category => category,
        };

        Ok(DishFields {
            name: name.to_string(),
            price,
            description: self.description.trim().to_string(),
            category: category.to_string(),
            image: self.image.trim().to_string(),
        })
    }
}

/// Validated dish fields, used both to create and to replace a dish.
#[derive(Debug, Clone, PartialEq)]
pub struct DishFields {
    pub name: String,
    pub price: Money,
    pub description: String,
    pub category: String,
    pub image: String,
}
