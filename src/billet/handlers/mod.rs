pub mod health;
pub use self::health::health;

pub mod signup;
pub use self::signup::signup;

pub mod login;
pub use self::login::login;

pub mod events;
pub use self::events::events;

// common functions for the handlers
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// User descriptor returned by the signup and login endpoints.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

pub fn valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
}
