use thiserror::Error;

use super::{Dish, Money};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Dish not in cart: {0}")]
    UnknownDish(String),
}

/// A dish in the cart. Quantity is always at least one; an entry that would
/// drop to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    dish: Dish,
    quantity: u32,
}

impl CartItem {
    pub fn dish(&self) -> &Dish {
        &self.dish
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> Money {
        self.dish.price * self.quantity
    }
}

/// A customer's unsubmitted selection.
///
/// Every operation returns a new cart and leaves `self` untouched, so a
/// screen can keep the previous value around until the update is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, dish_id: &str) -> u32 {
        self.position(dish_id).map_or(0, |i| self.items[i].quantity)
    }

    pub fn add_item(&self, dish: &Dish) -> Cart {
        let mut next = self.clone();
        match next.position(&dish.id) {
            Some(i) => next.items[i].quantity = next.items[i].quantity.saturating_add(1),
            None => next.items.push(CartItem { dish: dish.clone(), quantity: 1 }),
        }
        next
    }

    /// Replaces the quantity of an entry in place. Zero removes it.
    pub fn set_quantity(&self, dish_id: &str, quantity: u32) -> Result<Cart, CartError> {
        let index = self
            .position(dish_id)
            .ok_or_else(|| CartError::UnknownDish(dish_id.to_string()))?;
        let mut next = self.clone();
        if quantity == 0 {
            next.items.remove(index);
        } else {
            next.items[index].quantity = quantity;
        }
        Ok(next)
    }

    pub fn remove_item(&self, dish_id: &str) -> Result<Cart, CartError> {
        self.set_quantity(dish_id, 0)
    }

    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    fn position(&self, dish_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.dish.id == dish_id)
    }
}
