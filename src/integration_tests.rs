#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use crate::actor_framework::{Entity, MemoryStore, Store, StoreError};
    use crate::app_system::seed::{CHEF_PASSWORD, CHEF_USERNAME, CUSTOMER_PASSWORD, CUSTOMER_USERNAME};
    use crate::app_system::{AppConfig, RestaurantSystem};
    use crate::clients::{DishClient, OrderClient};
    use crate::dish_actor::{DishDraft, DishError, MISSING_FIELDS};
    use crate::domain::{
        Cart, Credential, Dish, Money, Order, OrderStatus, Role, TransitionError, User,
    };
    use crate::mock_framework::{create_mock_client, expect_create, expect_get};
    use crate::order_actor::OrderError;
    use crate::session::{ChefSession, CustomerSession, Session};
    use crate::user_actor::AuthError;

    // -------------------------------------------------------------------------
    // Client orchestration against mocks
    // -------------------------------------------------------------------------

    fn customer_user() -> User {
        User {
            id: "user_2".to_string(),
            username: "customer".to_string(),
            credential: Credential::new("customer123"),
            role: Role::Customer,
            display_name: "Lerato".to_string(),
        }
    }

    #[tokio::test]
    async fn test_order_placement_flow() {
        // 1. Setup Mocks
        let (dish_client_inner, mut dish_rx) = create_mock_client::<Dish>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner, DishClient::new(dish_client_inner));

        let curry = Dish::new("dish_1", "Chicken Curry", Money::from_rands(85), "Mains");
        let tea = Dish::new("dish_5", "Rooibos Iced Tea", Money::from_rands(35), "Drinks");
        let cart = Cart::new().add_item(&curry).add_item(&tea).add_item(&tea);

        // 2. Execute placement in background
        let order_task = tokio::spawn(async move {
            order_client.place_order(&customer_user(), &cart).await
        });

        // 3. Verify Interactions

        // Each cart entry is re-read from the catalog, in cart order
        let (dish_id, responder) = expect_get(&mut dish_rx).await.expect("Expected Dish Get");
        assert_eq!(dish_id, "dish_1");
        responder.send(Ok(Some(curry.clone()))).unwrap();

        let (dish_id, responder) = expect_get(&mut dish_rx).await.expect("Expected Dish Get");
        assert_eq!(dish_id, "dish_5");
        responder.send(Ok(Some(tea.clone()))).unwrap();

        // Expect Order Create
        let (params, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(params.customer_id, "user_2");
        assert_eq!(params.customer_name, "Lerato");
        assert_eq!(params.lines.len(), 2);
        assert_eq!(params.lines[1].quantity, 2);
        let stored = Order::from_create_params(1, params).unwrap();
        responder.send(Ok(1)).unwrap();

        // Expect the fresh order to be read back
        let (order_id, responder) = expect_get(&mut order_rx).await.expect("Expected Order Get");
        assert_eq!(order_id, 1);
        responder.send(Ok(Some(stored))).unwrap();

        // 4. Verify Result
        let order = order_task.await.unwrap().unwrap();
        assert_eq!(order.id, 1);
        assert_eq!(order.total, Money::from_rands(155));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_order_placement_stops_on_missing_dish() {
        let (dish_client_inner, mut dish_rx) = create_mock_client::<Dish>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner, DishClient::new(dish_client_inner));

        let gone = Dish::new("dish_9", "Seasonal Soup", Money::from_rands(40), "Starters");
        let cart = Cart::new().add_item(&gone);

        let order_task = tokio::spawn(async move {
            order_client.place_order(&customer_user(), &cart).await
        });

        let (_, responder) = expect_get(&mut dish_rx).await.expect("Expected Dish Get");
        responder.send(Ok(None)).unwrap();

        let result = order_task.await.unwrap();
        assert_eq!(result, Err(OrderError::InvalidDish("dish_9".to_string())));

        // The ledger never saw a request; the client was dropped with the task.
        assert!(order_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_order_placement_rejects_repriced_dish() {
        let (dish_client_inner, mut dish_rx) = create_mock_client::<Dish>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner, DishClient::new(dish_client_inner));

        let curry = Dish::new("dish_1", "Chicken Curry", Money::from_rands(85), "Mains");
        let cart = Cart::new().add_item(&curry);

        let order_task = tokio::spawn(async move {
            order_client.place_order(&customer_user(), &cart).await
        });

        let mut repriced = curry.clone();
        repriced.price = Money::from_rands(999);
        let (_, responder) = expect_get(&mut dish_rx).await.expect("Expected Dish Get");
        responder.send(Ok(Some(repriced))).unwrap();

        let result = order_task.await.unwrap();
        assert_eq!(
            result,
            Err(OrderError::PriceChanged {
                dish_id: "dish_1".to_string(),
                cart_price: Money::from_rands(85),
                current_price: Money::from_rands(999),
            })
        );
        assert!(order_rx.recv().await.is_none());
    }

    // -------------------------------------------------------------------------
    // End to end, against the seeded system
    // -------------------------------------------------------------------------

    async fn seeded_system() -> RestaurantSystem {
        RestaurantSystem::start(&AppConfig::default()).await.unwrap()
    }

    async fn customer(system: &RestaurantSystem) -> CustomerSession {
        match system.login(CUSTOMER_USERNAME, CUSTOMER_PASSWORD).await.unwrap() {
            Session::Customer(session) => session,
            Session::Chef(_) => panic!("customer signed in as chef"),
        }
    }

    async fn chef(system: &RestaurantSystem) -> ChefSession {
        match system.login(CHEF_USERNAME, CHEF_PASSWORD).await.unwrap() {
            Session::Chef(session) => session,
            Session::Customer(_) => panic!("chef signed in as customer"),
        }
    }

    async fn dish_named(session: &CustomerSession, name: &str) -> Dish {
        session
            .menu()
            .await
            .unwrap()
            .into_iter()
            .find(|dish| dish.name == name)
            .unwrap_or_else(|| panic!("{} is not on the menu", name))
    }

    #[tokio::test]
    async fn test_login_resolves_role() {
        let system = seeded_system().await;

        let session = system.login("chef", "chef123").await.unwrap();
        assert_eq!(session.role(), Role::Chef);
        assert_eq!(session.user().display_name, "Chef Sipho");
        assert!(matches!(session, Session::Chef(_)));

        let session = system.login("customer", "customer123").await.unwrap();
        assert!(matches!(session, Session::Customer(_)));
    }

    #[tokio::test]
    async fn test_login_failures() {
        let system = seeded_system().await;

        assert_eq!(system.login("chef", "wrong").await.err(), Some(AuthError::InvalidCredentials));
        assert_eq!(system.login("nobody", "chef123").await.err(), Some(AuthError::InvalidCredentials));
        assert_eq!(system.login("", "chef123").await.err(), Some(AuthError::MissingCredentials));
        assert_eq!(system.login("chef", "").await.err(), Some(AuthError::MissingCredentials));
        assert_eq!(system.login("chef", "   ").await.err(), Some(AuthError::MissingCredentials));
        assert_eq!(system.login("  ", "  ").await.err(), Some(AuthError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_seeded_ledger_matches_mock_orders() {
        let system = seeded_system().await;
        let orders = system.order_client.list_orders().await.unwrap();

        let summary: Vec<_> = orders.iter().map(|o| (o.id, o.total, o.status)).collect();
        assert_eq!(
            summary,
            vec![
                (1, Money::from_rands(180), OrderStatus::Pending),
                (2, Money::from_rands(70), OrderStatus::Pending),
            ]
        );
        assert_eq!(orders[0].lines[0].dish.name, "Chicken Curry");
    }

    #[tokio::test]
    async fn test_customer_places_order() {
        let system = seeded_system().await;
        let mut session = customer(&system).await;

        let curry = dish_named(&session, "Chicken Curry").await;
        let tea = dish_named(&session, "Rooibos Iced Tea").await;
        session.add_to_cart(&curry);
        session.add_to_cart(&tea);
        let cart = session.add_to_cart(&tea).clone();
        assert_eq!(cart.total(), Money::from_rands(155));
        assert_eq!(cart.item_count(), 3);

        let order = session.place_order().await.unwrap();
        assert!(session.cart().is_empty());
        assert_eq!(order.id, 3);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, cart.total());
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.customer_name, "Lerato");

        let ledger = system.order_client.list_orders().await.unwrap();
        assert_eq!(ledger.last().map(|o| o.id), Some(3));

        let mine = session.my_orders().await.unwrap();
        assert_eq!(mine.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_cart_is_not_placed() {
        let system = seeded_system().await;
        let mut session = customer(&system).await;

        assert_eq!(session.place_order().await, Err(OrderError::EmptyCart));
        assert_eq!(system.order_client.list_orders().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_cart_quantity_edits() {
        let system = seeded_system().await;
        let mut session = customer(&system).await;
        let stew = dish_named(&session, "Beef Stew").await;
        let pudding = dish_named(&session, "Malva Pudding").await;

        session.add_to_cart(&stew);
        session.add_to_cart(&pudding);
        session.set_quantity(&stew.id, 3).unwrap();
        assert_eq!(session.cart().items()[0].quantity(), 3);
        assert_eq!(session.cart().total(), Money::from_rands(95 * 3 + 45));

        let cart = session.set_quantity(&stew.id, 0).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert!(session.set_quantity("dish_404", 1).is_err());
    }

    #[tokio::test]
    async fn test_status_workflow_is_forward_only() {
        let system = seeded_system().await;
        let kitchen = chef(&system).await;

        // Order 1 is pending: skipping straight to ready is refused.
        let result = kitchen.set_order_status(1, OrderStatus::Ready).await;
        assert_eq!(
            result,
            Err(OrderError::InvalidTransition {
                id: 1,
                source: TransitionError::NotNextStep {
                    from: OrderStatus::Pending,
                    to: OrderStatus::Ready,
                },
            })
        );

        assert_eq!(kitchen.set_order_status(1, OrderStatus::Preparing).await, Ok(OrderStatus::Preparing));
        assert_eq!(kitchen.advance_order(1).await, Ok(OrderStatus::Ready));

        // Backward is refused and leaves the order alone.
        assert!(kitchen.set_order_status(1, OrderStatus::Pending).await.is_err());
        assert_eq!(
            kitchen.orders_with_status(OrderStatus::Ready).await.unwrap().len(),
            1
        );

        assert_eq!(kitchen.advance_order(1).await, Ok(OrderStatus::Completed));
        assert_eq!(
            kitchen.advance_order(1).await,
            Err(OrderError::InvalidTransition {
                id: 1,
                source: TransitionError::Terminal(OrderStatus::Completed),
            })
        );

        assert_eq!(
            kitchen.advance_order(99).await,
            Err(OrderError::NotFound("99".to_string()))
        );
    }

    #[tokio::test]
    async fn test_chef_manages_dishes() {
        let system = seeded_system().await;
        let kitchen = chef(&system).await;
        let before = kitchen.dishes().await.unwrap();

        // Rejected forms leave the catalog untouched.
        assert_eq!(
            kitchen.add_dish(DishDraft::new("Bobotie", "")).await,
            Err(DishError::Validation(MISSING_FIELDS.to_string()))
        );
        assert!(matches!(
            kitchen.add_dish(DishDraft::new("Bobotie", "cheap")).await,
            Err(DishError::InvalidPrice(_))
        ));
        assert_eq!(kitchen.dishes().await.unwrap(), before);

        let id = kitchen
            .add_dish(DishDraft::new("Bobotie", "110").category("Mains"))
            .await
            .unwrap();
        assert_eq!(kitchen.dishes().await.unwrap().len(), before.len() + 1);

        let updated = kitchen
            .update_dish(&id, DishDraft::new("Bobotie", "120").description("With yellow rice"))
            .await
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.price, Money::from_rands(120));

        // Mains: 85, 95, 70, 120
        assert_eq!(kitchen.average_price("Mains").await, Ok(Money::from_cents(9250)));
        assert_eq!(kitchen.average_price("Starters").await, Ok(Money::ZERO));

        kitchen.delete_dish(&id).await.unwrap();
        assert_eq!(kitchen.dishes().await.unwrap(), before);
        assert_eq!(kitchen.delete_dish(&id).await, Err(DishError::NotFound(id.clone())));
        assert_eq!(
            kitchen.update_dish(&id, DishDraft::new("Bobotie", "1")).await,
            Err(DishError::NotFound(id))
        );
    }

    #[tokio::test]
    async fn test_deleted_dish_blocks_order_and_keeps_cart() {
        let system = seeded_system().await;
        let mut session = customer(&system).await;
        let kitchen = chef(&system).await;

        let soup_id = kitchen
            .add_dish(DishDraft::new("Butternut Soup", "55").category("Starters"))
            .await
            .unwrap();
        let soup = dish_named(&session, "Butternut Soup").await;
        session.add_to_cart(&soup);

        kitchen.delete_dish(&soup_id).await.unwrap();

        assert_eq!(session.place_order().await, Err(OrderError::InvalidDish(soup_id)));
        assert_eq!(session.cart().item_count(), 1);
    }

    #[tokio::test]
    async fn test_price_change_blocks_order_and_keeps_cart() {
        let system = seeded_system().await;
        let mut session = customer(&system).await;
        let kitchen = chef(&system).await;

        let curry = dish_named(&session, "Chicken Curry").await;
        session.add_to_cart(&curry);
        kitchen
            .update_dish(&curry.id, DishDraft::new("Chicken Curry", "999").category("Mains"))
            .await
            .unwrap();

        assert_eq!(
            session.place_order().await,
            Err(OrderError::PriceChanged {
                dish_id: curry.id.clone(),
                cart_price: Money::from_rands(85),
                current_price: Money::from_rands(999),
            })
        );
        assert_eq!(session.cart().item_count(), 1);
        assert_eq!(session.cart().total(), Money::from_rands(85));
        assert_eq!(system.order_client.list_orders().await.unwrap().len(), 2);

        // Taking the dish again at its new price goes through.
        session.set_quantity(&curry.id, 0).unwrap();
        let repriced = dish_named(&session, "Chicken Curry").await;
        let cart_total = session.add_to_cart(&repriced).total();
        let order = session.place_order().await.unwrap();
        assert_eq!(order.total, cart_total);
        assert_eq!(order.total, Money::from_rands(999));
    }

    #[tokio::test]
    async fn test_existing_orders_keep_their_snapshot() {
        let system = seeded_system().await;
        let kitchen = chef(&system).await;

        let curry = kitchen.dishes().await.unwrap().remove(0);
        kitchen
            .update_dish(&curry.id, DishDraft::new("Chicken Curry", "99").category("Mains"))
            .await
            .unwrap();

        let first = system.order_client.get_order(1).await.unwrap().unwrap();
        assert_eq!(first.lines[0].dish.price, Money::from_rands(85));
        assert_eq!(first.total, Money::from_rands(180));
    }

    #[tokio::test]
    async fn test_menu_browsing() {
        let system = seeded_system().await;
        let session = customer(&system).await;

        assert_eq!(
            session.categories().await.unwrap(),
            vec!["All", "Mains", "Desserts", "Drinks"]
        );
        assert_eq!(session.menu_by_category("Mains").await.unwrap().len(), 3);
        assert_eq!(session.menu_by_category("All").await.unwrap().len(), 5);
        assert!(session.menu_by_category("Starters").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_after_logout() {
        let system = seeded_system().await;
        let session = customer(&system).await;
        let user = session.logout();
        assert_eq!(user.username, "customer");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unseeded_system_starts_empty() {
        let config = AppConfig { seed_mock_data: false, ..AppConfig::default() };
        let system = RestaurantSystem::start(&config).await.unwrap();

        assert!(system.dish_client.list_dishes().await.unwrap().is_empty());
        assert_eq!(
            system.login("chef", "chef123").await.err(),
            Some(AuthError::InvalidCredentials)
        );
    }

    /// Wraps a memory store; writes fail while `available` is false.
    struct SwitchableStore<T: Entity> {
        inner: MemoryStore<T>,
        available: Arc<AtomicBool>,
    }

    impl<T: Entity> SwitchableStore<T> {
        fn new(available: &Arc<AtomicBool>) -> Self {
            Self {
                inner: MemoryStore::default(),
                available: Arc::clone(available),
            }
        }

        fn check(&self) -> Result<(), StoreError> {
            if self.available.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(StoreError::Unavailable("disk offline".to_string()))
            }
        }
    }

    impl<T: Entity> Store<T> for SwitchableStore<T> {
        fn insert(&mut self, item: T) -> Result<(), StoreError> {
            self.check()?;
            self.inner.insert(item)
        }

        fn find(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
            self.inner.find(id)
        }

        fn remove(&mut self, id: &T::Id) -> Result<Option<T>, StoreError> {
            self.check()?;
            self.inner.remove(id)
        }

        fn list(&self) -> Result<Vec<T>, StoreError> {
            self.inner.list()
        }
    }

    #[tokio::test]
    async fn test_store_outage_surfaces_as_store_errors() {
        let available = Arc::new(AtomicBool::new(true));
        let system = RestaurantSystem::start_with_stores(
            &AppConfig::default(),
            SwitchableStore::<Dish>::new(&available),
            SwitchableStore::<Order>::new(&available),
            SwitchableStore::<User>::new(&available),
        )
        .await
        .unwrap();
        let mut session = customer(&system).await;
        let kitchen = chef(&system).await;
        let curry = dish_named(&session, "Chicken Curry").await;
        session.add_to_cart(&curry);
        let menu = kitchen.dishes().await.unwrap();

        available.store(false, Ordering::SeqCst);
        let outage = "Store unavailable: disk offline".to_string();

        // Catalog writes fail and the menu is unchanged.
        assert_eq!(
            kitchen.add_dish(DishDraft::new("Bobotie", "110")).await,
            Err(DishError::StoreError(outage.clone()))
        );
        assert_eq!(
            kitchen.delete_dish(&curry.id).await,
            Err(DishError::StoreError(outage.clone()))
        );
        assert_eq!(kitchen.dishes().await.unwrap(), menu);

        // Ledger writes fail; the order keeps its status and the cart is kept.
        assert_eq!(
            kitchen.advance_order(1).await,
            Err(OrderError::StoreError(outage.clone()))
        );
        assert_eq!(
            session.place_order().await,
            Err(OrderError::StoreError(outage.clone()))
        );
        assert_eq!(session.cart().item_count(), 1);
        let ledger = system.order_client.list_orders().await.unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger[0].status, OrderStatus::Pending);

        // Sign-in writes the user back after the credential check.
        assert_eq!(
            system.login(CHEF_USERNAME, CHEF_PASSWORD).await.err(),
            Some(AuthError::StoreError(outage))
        );

        available.store(true, Ordering::SeqCst);
        assert_eq!(kitchen.advance_order(1).await, Ok(OrderStatus::Preparing));
        assert!(session.place_order().await.is_ok());
    }
}
