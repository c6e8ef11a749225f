use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserCreate, UserId};
use crate::user_actor::{AuthError, UserAction};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

crate::impl_basic_client!(UserClient, User, AuthError, user, users);

impl UserClient {
    /// Registers one of the static users. Only called while seeding.
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub(crate) async fn register(&self, user: UserCreate) -> Result<UserId, AuthError> {
        debug!("Sending request");
        Ok(self.inner.create(user).await?)
    }

    /// Mocked sign-in: looks the user up by name and checks the credential.
    ///
    /// # Errors
    /// - `MissingCredentials` when either field is blank
    /// - `InvalidCredentials` for an unknown user or a wrong password
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: String, password: String) -> Result<User, AuthError> {
        debug!("Sending request");
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let wanted = username.trim().to_string();
        let user = match self.inner.find(move |u: &User| u.username == wanted).await?.into_iter().next() {
            Some(user) => user,
            None => {
                warn!("Unknown username");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let accepted = self
            .inner
            .perform_action(user.id.clone(), UserAction::Authenticate(password))
            .await?;
        if !accepted {
            warn!(user_id = %user.id, "Wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = %user.id, role = ?user.role, "User signed in");
        Ok(user)
    }
}
