use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::dish_actor::{DishDraft, DishError};
use crate::domain::{catalog, Dish, DishId, Money};

/// Client for the catalog actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

crate::impl_basic_client!(DishClient, Dish, DishError, dish, dishes);

impl DishClient {
    /// Validates the form and adds the dish to the catalog.
    #[instrument(skip(self, draft), fields(dish_name = %draft.name))]
    pub async fn add_dish(&self, draft: DishDraft) -> Result<DishId, DishError> {
        debug!("Sending request");
        let fields = draft.validate().map_err(|e| {
            warn!(error = %e, "Dish rejected");
            e
        })?;
        let price = fields.price;
        let id = self.inner.create(fields).await?;
        info!(dish_id = %id, %price, "Dish added");
        Ok(id)
    }

    /// Validates the form and replaces the dish's fields, keeping its id.
    #[instrument(skip(self, draft))]
    pub async fn update_dish(&self, id: DishId, draft: DishDraft) -> Result<Dish, DishError> {
        debug!("Sending request");
        let fields = draft.validate().map_err(|e| {
            warn!(error = %e, "Dish update rejected");
            e
        })?;
        let dish = self.inner.update(id, fields).await?;
        info!(dish_id = %dish.id, price = %dish.price, "Dish updated");
        Ok(dish)
    }

    #[instrument(skip(self))]
    pub async fn delete_dish(&self, id: DishId) -> Result<(), DishError> {
        debug!("Sending request");
        self.inner.delete(id).await?;
        info!("Dish deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn dishes_by_category(&self, category: String) -> Result<Vec<Dish>, DishError> {
        debug!("Sending request");
        let dishes = self.inner.list().await?;
        Ok(catalog::by_category(&dishes, &category).into_iter().cloned().collect())
    }

    #[instrument(skip(self))]
    pub async fn average_price(&self, category: String) -> Result<Money, DishError> {
        debug!("Sending request");
        let dishes = self.inner.list().await?;
        Ok(catalog::average_price(&dishes, &category))
    }

    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<String>, DishError> {
        debug!("Sending request");
        let dishes = self.inner.list().await?;
        Ok(catalog::categories(&dishes))
    }
}
