use std::fmt;

pub type UserId = String;

/// What a signed-in user is allowed to do. Resolved once at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Chef,
    Customer,
}

/// Placeholder credential for the mocked sign-in.
///
/// The secret is compared as-is. Swap this for a real credential check
/// before anything user-facing ships.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn verify(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub credential: Credential,
    pub role: Role,
    pub display_name: String,
}

/// Payload for registering one of the static users at startup.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub credential: Credential,
    pub role: Role,
    pub display_name: String,
}

impl UserCreate {
    pub fn new(
        username: impl Into<String>,
        secret: impl Into<String>,
        role: Role,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            credential: Credential::new(secret),
            role,
            display_name: display_name.into(),
        }
    }
}
