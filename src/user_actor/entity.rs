use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserId};
use super::AuthError;

/// Custom actions for User entities.
#[derive(Clone)]
pub enum UserAction {
    /// Checks a candidate password against the stored credential.
    Authenticate(String),
}

impl std::fmt::Debug for UserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserAction::Authenticate(_) => f.write_str("Authenticate(<redacted>)"),
        }
    }
}

impl Entity for User {
    type Id = UserId;
    type CreateParams = UserCreate;
    type Patch = (); // Users are static for the lifetime of the process
    type Action = UserAction;
    type ActionResult = bool;
    type Error = AuthError;

    fn id(&self) -> &UserId { &self.id }

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, AuthError> {
        Ok(Self {
            id,
            username: params.username,
            credential: params.credential,
            role: params.role,
            display_name: params.display_name,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), AuthError> {
        Ok(())
    }

    fn handle_action(&mut self, action: UserAction) -> Result<bool, AuthError> {
        match action {
            UserAction::Authenticate(candidate) => Ok(self.credential.verify(&candidate)),
        }
    }
}
