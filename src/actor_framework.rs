use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Params, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Domain error returned by the hooks below.
    type Error: std::error::Error + Clone + Send + Sync + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and creation params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;
    fn on_delete(&self) -> Result<(), Self::Error> { Ok(()) }

    // --- Action Handler ---

    /// Handle a custom domain-specific action.
    ///
    /// The entity is only written back to the store when this returns `Ok`,
    /// so a rejected action never leaves a half-applied change behind.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Everything that can go wrong between a client call and the entity hooks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameworkError<E> {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Entity(E),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 3. THE STORE SEAM
// =============================================================================

/// Backing storage for a ResourceActor.
///
/// The actor only ever reads a copy, changes it, and writes it back, so any
/// keyed persistence layer can stand in for [`MemoryStore`].
pub trait Store<T: Entity>: Send + 'static {
    /// Insert or replace the item under its own id.
    fn insert(&mut self, item: T) -> Result<(), StoreError>;
    fn find(&self, id: &T::Id) -> Result<Option<T>, StoreError>;
    fn remove(&mut self, id: &T::Id) -> Result<Option<T>, StoreError>;
    /// All items in insertion order.
    fn list(&self) -> Result<Vec<T>, StoreError>;
}

pub struct MemoryStore<T: Entity> {
    items: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Entity> Store<T> for MemoryStore<T> {
    fn insert(&mut self, item: T) -> Result<(), StoreError> {
        let id = item.id().clone();
        if self.items.insert(id.clone(), item).is_none() {
            self.order.push(id);
        }
        Ok(())
    }

    fn find(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        Ok(self.items.get(id).cloned())
    }

    fn remove(&mut self, id: &T::Id) -> Result<Option<T>, StoreError> {
        let removed = self.items.remove(id);
        if removed.is_some() {
            self.order.retain(|existing| existing != id);
        }
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.items.get(id).cloned())
            .collect())
    }
}

// =============================================================================
// 4. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

/// Predicate shipped to the actor for `Find` requests.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    Find {
        filter: Filter<T>,
        respond_to: Response<Vec<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 5. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Box<dyn Store<T>>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::with_store(buffer_size, MemoryStore::default(), next_id_fn)
    }

    pub fn with_store(
        buffer_size: usize,
        store: impl Store<T>,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Box::new(store),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    pub async fn run(mut self) {
        let entity = std::any::type_name::<T>();
        debug!(entity, "Resource actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.store.find(&id).map_err(FrameworkError::from));
                }
                ResourceRequest::Find { filter, respond_to } => {
                    let _ = respond_to.send(self.handle_find(filter));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
            }
        }
        debug!(entity, "Resource actor stopped");
    }

    fn load(&self, id: &T::Id) -> Result<T, FrameworkError<T::Error>> {
        self.store
            .find(id)?
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError<T::Error>> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Entity)?;
        item.on_create().map_err(FrameworkError::Entity)?;
        self.store.insert(item)?;
        Ok(id)
    }

    fn handle_find(&self, filter: Filter<T>) -> Result<Vec<T>, FrameworkError<T::Error>> {
        Ok(self.store.list()?.into_iter().filter(|item| filter(item)).collect())
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError<T::Error>> {
        let mut item = self.load(&id)?;
        item.on_update(patch).map_err(FrameworkError::Entity)?;
        self.store.insert(item.clone())?;
        Ok(item)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError<T::Error>> {
        let item = self.load(&id)?;
        item.on_delete().map_err(FrameworkError::Entity)?;
        self.store.remove(&id)?;
        Ok(())
    }

    fn handle_action(
        &mut self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError<T::Error>> {
        let mut item = self.load(&id)?;
        let result = item.handle_action(action).map_err(FrameworkError::Entity)?;
        self.store.insert(item)?;
        Ok(result)
    }
}

// =============================================================================
// 6. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn find(
        &self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T>, FrameworkError<T::Error>> {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| ResourceRequest::Find { filter, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError<T::Error>> {
        self.find(|_| true).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 7. EXAMPLE USAGE (Test)
// =============================================================================
