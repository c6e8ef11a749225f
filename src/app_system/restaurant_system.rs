use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use super::{seed, AppConfig, SystemError};
use crate::actor_framework::{MemoryStore, ResourceActor, Store};
use crate::clients::{DishClient, OrderClient, UserClient};
use crate::domain::{Dish, Order, OrderId, User};
use crate::session::Session;
use crate::user_actor::AuthError;

/// The main application system that owns every resource actor.
///
/// Responsible for starting the actors, wiring their clients together,
/// seeding mock data, and handling shutdown.
pub struct RestaurantSystem {
    pub dish_client: DishClient,
    pub order_client: OrderClient,
    pub user_client: UserClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

fn prefixed_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

impl RestaurantSystem {
    /// Spawns the actors with empty in-memory stores. Must run inside a tokio
    /// runtime.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_stores(
            config,
            MemoryStore::<Dish>::default(),
            MemoryStore::<Order>::default(),
            MemoryStore::<User>::default(),
        )
    }

    /// Spawns the actors on top of the given stores.
    pub fn with_stores(
        config: &AppConfig,
        dishes: impl Store<Dish>,
        orders: impl Store<Order>,
        users: impl Store<User>,
    ) -> Self {
        let buffer = config.channel_buffer;

        // 1. Catalog
        let (dish_actor, dish_resource_client) =
            ResourceActor::<Dish>::with_store(buffer, dishes, prefixed_ids("dish"));
        let dish_client = DishClient::new(dish_resource_client);
        let dish_handle = tokio::spawn(dish_actor.run());

        // 2. Users
        let (user_actor, user_resource_client) =
            ResourceActor::<User>::with_store(buffer, users, prefixed_ids("user"));
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        // 3. Order ledger, numbered from 1 in creation order
        let order_counter = Arc::new(AtomicU64::new(1));
        let next_order_id = move || -> OrderId { order_counter.fetch_add(1, Ordering::SeqCst) };
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::with_store(buffer, orders, next_order_id);
        let order_client = OrderClient::new(order_resource_client, dish_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        info!(buffer, "Restaurant system started");
        Self {
            dish_client,
            order_client,
            user_client,
            handles: vec![dish_handle, user_handle, order_handle],
        }
    }

    /// Starts the system and loads the mock data when the config asks for it.
    pub async fn start(config: &AppConfig) -> Result<Self, SystemError> {
        Self::seed_if_configured(config, Self::new(config)).await
    }

    /// Like [`RestaurantSystem::start`], over caller-supplied stores.
    pub async fn start_with_stores(
        config: &AppConfig,
        dishes: impl Store<Dish>,
        orders: impl Store<Order>,
        users: impl Store<User>,
    ) -> Result<Self, SystemError> {
        Self::seed_if_configured(config, Self::with_stores(config, dishes, orders, users)).await
    }

    async fn seed_if_configured(config: &AppConfig, system: Self) -> Result<Self, SystemError> {
        if config.seed_mock_data {
            seed::seed_mock_data(&system).await?;
        }
        Ok(system)
    }

    /// Signs a user in and hands back the session for their role.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let user = self
            .user_client
            .login(username.to_string(), password.to_string())
            .await?;
        Ok(Session::start(user, self.dish_client.clone(), self.order_client.clone()))
    }

    /// Drops every client held here and waits for the actors to drain.
    ///
    /// Sessions hold their own clients; an actor only stops once those are
    /// gone too.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.order_client);
        drop(self.dish_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
