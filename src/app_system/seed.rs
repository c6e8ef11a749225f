//! Mock records loaded at startup.

use tracing::info;

use super::{RestaurantSystem, SystemError};
use crate::dish_actor::DishDraft;
use crate::domain::{Cart, Dish, DishId, Role, UserCreate};

pub(crate) const CHEF_USERNAME: &str = "chef";
pub(crate) const CHEF_PASSWORD: &str = "chef123";
pub(crate) const CUSTOMER_USERNAME: &str = "customer";
pub(crate) const CUSTOMER_PASSWORD: &str = "customer123";

fn mock_users() -> Vec<UserCreate> {
    vec![
        UserCreate::new(CHEF_USERNAME, CHEF_PASSWORD, Role::Chef, "Chef Sipho"),
        UserCreate::new(CUSTOMER_USERNAME, CUSTOMER_PASSWORD, Role::Customer, "Lerato"),
    ]
}

fn mock_dishes() -> Vec<DishDraft> {
    vec![
        DishDraft::new("Chicken Curry", "85")
            .description("Spicy chicken curry with rice")
            .category("Mains")
            .image("https://images.example.com/dishes/chicken-curry.jpg"),
        DishDraft::new("Beef Stew", "95")
            .description("Tender beef with vegetables")
            .category("Mains")
            .image("https://images.example.com/dishes/beef-stew.jpg"),
        DishDraft::new("Fish & Chips", "70")
            .description("Crispy fish with fries")
            .category("Mains")
            .image("https://images.example.com/dishes/fish-and-chips.jpg"),
        DishDraft::new("Malva Pudding", "45")
            .description("Warm apricot sponge with custard")
            .category("Desserts"),
        DishDraft::new("Rooibos Iced Tea", "35")
            .description("Chilled rooibos with lemon")
            .category("Drinks"),
    ]
}

async fn seeded_dish(system: &RestaurantSystem, id: &DishId) -> Result<Dish, SystemError> {
    system
        .dish_client
        .get_dish(id.clone())
        .await?
        .ok_or_else(|| SystemError::Seed(format!("seeded dish {} vanished", id)))
}

/// Loads the static users, the menu, and the two sample orders.
pub(crate) async fn seed_mock_data(system: &RestaurantSystem) -> Result<(), SystemError> {
    for user in mock_users() {
        system.user_client.register(user).await?;
    }

    let mut dish_ids = Vec::new();
    for draft in mock_dishes() {
        dish_ids.push(system.dish_client.add_dish(draft).await?);
    }

    let customer = system
        .user_client
        .login(CUSTOMER_USERNAME.to_string(), CUSTOMER_PASSWORD.to_string())
        .await?;

    // Order 1: Chicken Curry + Beef Stew, still pending.
    let cart = Cart::new()
        .add_item(&seeded_dish(system, &dish_ids[0]).await?)
        .add_item(&seeded_dish(system, &dish_ids[1]).await?);
    system.order_client.place_order(&customer, &cart).await?;

    // Order 2: Fish & Chips, also pending.
    let cart = Cart::new().add_item(&seeded_dish(system, &dish_ids[2]).await?);
    system.order_client.place_order(&customer, &cart).await?;

    info!(dishes = dish_ids.len(), "Mock data seeded");
    Ok(())
}
