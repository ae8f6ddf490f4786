use serde::{Deserialize, Serialize};

/// A registered account. `password_hash` is an Argon2id PHC string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

impl User {
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegistrationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("User already exists")]
    EmailTaken,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LoginError {
    #[error("All fields are required")]
    MissingFields,
    #[error("User not found")]
    UnknownEmail,
    #[error("Invalid credentials")]
    WrongPassword,
}
