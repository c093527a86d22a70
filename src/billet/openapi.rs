use crate::billet::handlers;
use crate::events::EventRecord;
use utoipa::OpenApi;

/// `OpenAPI` document served by the Swagger UI.
///
/// Add new endpoints here via `paths(...)` so they show up in the generated
/// spec. Static files under `/images` are intentionally not documented.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::signup::signup,
        handlers::login::login,
        handlers::events::events,
    ),
    components(schemas(
        handlers::UserResponse,
        handlers::signup::SignupPayload,
        handlers::login::LoginPayload,
        EventRecord,
    )),
    tags(
        (name = "signup", description = "User registration"),
        (name = "login", description = "User authentication"),
        (name = "events", description = "Event listings"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for route in ["/health", "/signup", "/login", "/events"] {
            assert!(paths.contains_key(route), "missing route: {route}");
        }
    }
}
