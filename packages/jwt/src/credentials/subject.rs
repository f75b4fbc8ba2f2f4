//! Authenticated subjects and the repositories that describe them

use super::Credential;

/// Something a subject is identified by, such as a user id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    principal_type: String,
    id: String,
}

impl Principal {
    /// Create a principal
    #[must_use]
    pub fn new(principal_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            principal_type: principal_type.into(),
            id: id.into(),
        }
    }

    /// Principal type
    #[must_use]
    pub fn principal_type(&self) -> &str {
        &self.principal_type
    }

    /// Identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// An authenticated party: its principals and the credentials it presented
///
/// The first principal is the primary one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subject {
    principals: Vec<Principal>,
    credentials: Vec<Credential>,
}

impl Subject {
    /// Create a subject
    #[must_use]
    pub fn new(principals: Vec<Principal>, credentials: Vec<Credential>) -> Self {
        Self {
            principals,
            credentials,
        }
    }

    /// The principal tokens are issued for, if any
    #[must_use]
    pub fn primary_principal(&self) -> Option<&Principal> {
        self.principals.first()
    }

    /// All principals
    #[must_use]
    pub fn principals(&self) -> &[Principal] {
        &self.principals
    }

    /// All credentials
    #[must_use]
    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    /// Record an additional credential
    pub fn add_credential(&mut self, credential: Credential) {
        self.credentials.push(credential);
    }
}

/// A user record as seen by credential factories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: String,
    username: String,
}

impl User {
    /// Create a user
    #[must_use]
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }

    /// Identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Username
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// User lookups
///
/// Implementations own their storage and must be safe to share.
pub trait UserRepository: Send + Sync {
    /// Look up a user by id
    fn get_by_id(&self, id: &str) -> Option<User>;

    /// Look up a user by username
    fn get_by_username(&self, username: &str) -> Option<User>;
}

/// Role lookups
pub trait RoleRepository: Send + Sync {
    /// Names of the roles granted to a subject id
    fn get_role_names_for_subject(&self, subject_id: &str) -> Vec<String>;
}
