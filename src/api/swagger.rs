use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "CRUD API over user records (name, email, address).\n\n**Notes:**\n- Emails are unique; a duplicate answers 400 with a message mentioning the email\n- Unknown or malformed ids answer 404\n- Invalid field values answer 422 with per-field messages"
    ),
    paths(
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::CreateUserRequest,
            crate::models::UpdateUserRequest,
            crate::models::UserResponse,
            crate::models::MessageResponse,

            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, list, fetch, update and delete users."),
        (name = "Health", description = "Service and database health."),
    )
)]
pub struct ApiDoc;
