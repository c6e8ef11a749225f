use crate::actor_framework::Entity;
use crate::domain::{Dish, DishId};
use super::{DishError, DishFields};

impl Entity for Dish {
    type Id = DishId;
    type CreateParams = DishFields;
    type Patch = DishFields;
    type Action = ();
    type ActionResult = ();
    type Error = DishError;

    fn id(&self) -> &DishId { &self.id }

    fn from_create_params(id: DishId, params: DishFields) -> Result<Self, DishError> {
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            description: params.description,
            category: params.category,
            image: params.image,
        })
    }

    /// Replaces every editable field; the id is kept.
    fn on_update(&mut self, patch: DishFields) -> Result<(), DishError> {
        self.name = patch.name;
        self.price = patch.price;
        self.description = patch.description;
        self.category = patch.category;
        self.image = patch.image;
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), DishError> {
        Ok(())
    }
}
