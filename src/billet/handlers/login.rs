use crate::billet::handlers::{valid_email, valid_password, UserResponse};
use axum::{extract::Extension, http::StatusCode, response::Json};
use bcrypt::verify;
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use tracing::{debug, error, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginPayload {
    email: String,
    password: String,
}

#[utoipa::path(
    post,
    path= "/login",
    request_body = LoginPayload,
    responses (
        (status = 200, description = "Login successful", body = UserResponse, content_type = "application/json"),
        (status = 400, description = "Missing or malformed payload"),
        (status = 401, description = "Unauthorized"),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    pool: Extension<PgPool>,
    payload: Option<Json<LoginPayload>>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    let user: LoginPayload = match payload {
        Some(Json(payload)) => payload,
        None => return Err((StatusCode::BAD_REQUEST, "Missing payload".to_string())),
    };

    debug!("login request for: {}", user.email);

    // if not valid email or password return 400
    if !valid_email(&user.email) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Please enter a valid email".to_string(),
        ));
    }

    if !valid_password(&user.password) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Password must be at least 6 characters".to_string(),
        ));
    }

    // get id and password hash from the database
    let (id, stored_password) = match get_user(&pool, &user.email).await {
        Ok(Some(row)) => row,

        // same message as a wrong password, no account enumeration
        Ok(None) => {
            debug!("User not found");

            return Err((
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ));
        }

        Err(e) => {
            error!("Error getting user from database: {:?}", e);

            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error getting user".to_string(),
            ));
        }
    };

    // compare the stored hash with the submitted password
    match verify(&user.password, &stored_password) {
        Ok(true) => {
            debug!("Login successful");

            Ok(Json(UserResponse {
                id,
                email: user.email,
            }))
        }

        Ok(false) => {
            debug!("Unauthorized");

            Err((
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ))
        }

        Err(e) => {
            error!("Error verifying password: {:?}", e);

            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error verifying password".to_string(),
            ))
        }
    }
}

async fn get_user(pool: &PgPool, email: &str) -> Result<Option<(Uuid, String)>, sqlx::Error> {
    match sqlx::query("SELECT id, password FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
    {
        Ok(Some(row)) => Ok(Some((row.get("id"), row.get("password")))),
        Ok(None) => Ok(None),
        Err(e) => Err(e),
    }
}
