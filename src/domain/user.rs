use serde::{Deserialize, Serialize};

/// A demo account. Passwords are stored in plain text; this list only backs
/// the simulated login.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

pub const USERS: &[User] = &[
    User {
        id: "1",
        email: "admin@tentwenty.com",
        password: "admin123",
        name: "Admin User",
    },
    User {
        id: "2",
        email: "developer@tentwenty.com",
        password: "dev123",
        name: "Developer User",
    },
];

/// The user fields that are safe to hand to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.to_string(),
            name: user.name.to_string(),
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub success: bool,
    pub user: PublicUser,
    pub token: String,
}
