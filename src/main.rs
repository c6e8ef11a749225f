use restaurant_orders::{
    setup_tracing, AppConfig, DishDraft, OrderStatus, RestaurantSystem, Session, SystemError,
};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(?config, "Starting restaurant ordering demo");
    let system = RestaurantSystem::start(&config).await?;

    let span = tracing::info_span!("customer_flow");
    async {
        match system.login("customer", "customer123").await? {
            Session::Customer(mut customer) => {
                let menu = customer.menu().await?;
                info!(dishes = menu.len(), "Menu loaded");

                let mains = customer.menu_by_category("Mains").await?;
                let drinks = customer.menu_by_category("Drinks").await?;
                if let Some(dish) = mains.first() {
                    customer.add_to_cart(dish);
                }
                for dish in &drinks {
                    customer.add_to_cart(dish);
                    customer.add_to_cart(dish);
                }
                let cart = customer.cart();
                info!(items = cart.item_count(), total = %cart.total(), "Cart ready");

                let order = customer.place_order().await?;
                info!(order_id = order.id, total = %order.total, status = %order.status, "Order placed");
                customer.logout();
            }
            Session::Chef(_) => warn!("Expected a customer session"),
        }
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("kitchen_flow");
    async {
        match system.login("chef", "chef123").await? {
            Session::Chef(chef) => {
                let new_dish = chef
                    .add_dish(
                        DishDraft::new("Bobotie", "110")
                            .description("Spiced mince baked with an egg topping")
                            .category("Mains"),
                    )
                    .await?;
                let average = chef.average_price("Mains").await?;
                info!(dish_id = %new_dish, %average, "Menu extended");

                if let Err(e) = chef.add_dish(DishDraft::new("Mystery Dish", "")).await {
                    warn!(error = %e, "Dish form rejected as expected");
                }

                for order in chef.orders_with_status(OrderStatus::Pending).await? {
                    let status = chef.advance_order(order.id).await?;
                    info!(order_id = order.id, %status, "Order moved on");
                }
                for order in chef.orders().await? {
                    info!(order_id = order.id, customer = %order.customer_name, total = %order.total, status = %order.status, "Ledger entry");
                }
                chef.logout();
            }
            Session::Customer(_) => warn!("Expected a chef session"),
        }
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await?;

    match system.login("chef", "wrong").await {
        Ok(_) => error!("Wrong password was accepted"),
        Err(e) => info!(error = %e, "Wrong password rejected"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
