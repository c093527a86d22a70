use crate::billet::handlers::{valid_email, valid_password, UserResponse};
use axum::{extract::Extension, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use tracing::{debug, error, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SignupPayload {
    email: String,
    password: String,
}

#[utoipa::path(
    post,
    path= "/signup",
    request_body = SignupPayload,
    responses (
        (status = 201, description = "Registration successful", body = UserResponse, content_type = "application/json"),
        (status = 400, description = "Missing or malformed payload"),
        (status = 409, description = "User with the specified email already exists"),
    ),
    tag= "signup"
)]
// axum handler for signup
#[instrument(skip_all)]
pub async fn signup(
    pool: Extension<PgPool>,
    payload: Option<Json<SignupPayload>>,
) -> Result<(StatusCode, Json<UserResponse>), (StatusCode, String)> {
    let user: SignupPayload = match payload {
        Some(Json(payload)) => payload,
        None => return Err((StatusCode::BAD_REQUEST, "Missing payload".to_string())),
    };

    debug!("signup request for: {}", user.email);

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

    // check if user exists
    match user_exists(&pool, &user.email).await {
        Ok(true) => {
            error!("User already exists: {}", user.email);
            return Err((StatusCode::CONFLICT, "User already exists".to_string()));
        }
        Ok(false) => (),
        Err(e) => {
            error!("Error checking if user exists: {:?}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error checking if user exists".to_string(),
            ));
        }
    }

    // hash the password before it touches the database
    let password = match hash(&user.password, DEFAULT_COST) {
        Ok(password) => password,
        Err(e) => {
            error!("Error hashing password: {:?}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error hashing password".to_string(),
            ));
        }
    };

    // insert user into database
    let id = Uuid::new_v4();
    match sqlx::query("INSERT INTO users (id, email, password) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(&user.email)
        .bind(&password)
        .execute(&*pool)
        .await
    {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(UserResponse {
                id,
                email: user.email,
            }),
        )),
        Err(e) => {
            error!("Error inserting user: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error inserting user".to_string(),
            ))
        }
    }
}

async fn user_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    match sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1) AS exists")
        .bind(email)
        .fetch_one(pool)
        .await
    {
        Ok(row) => Ok(row.get("exists")),
        Err(e) => Err(e),
    }
}
