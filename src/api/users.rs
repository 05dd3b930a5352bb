use actix_web::{web, HttpResponse, ResponseError};
use crate::{
    database::UserRepository,
    models::{CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse},
    services::user_service,
    utils::error::AppError,
};

fn log_failure(operation: &str, e: &AppError) {
    match e {
        AppError::DatabaseError(_) => log::error!("❌ {} failed: {}", operation, e),
        _ => log::warn!("⚠️ {} rejected: {}", operation, e),
    }
}

#[utoipa::path(
    post,
    path = "/api/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Email already taken or malformed body", body = MessageResponse),
        (status = 422, description = "Invalid field values"),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn create_user(
    repo: web::Data<dyn UserRepository>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    log::info!("📝 POST /api/user");
    log::debug!("   email: {}", request.email);

    match user_service::create_user(repo.get_ref(), request.into_inner()).await {
        Ok(user) => {
            log::info!("✅ User created: {}", user.id);
            HttpResponse::Ok().json(user)
        }
        Err(e) => {
            log_failure("Create user", &e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/get/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in storage order", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn list_users(repo: web::Data<dyn UserRepository>) -> HttpResponse {
    log::info!("📋 GET /api/get/users");

    match user_service::list_users(repo.get_ref()).await {
        Ok(users) => {
            log::info!("✅ Listed {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log_failure("List users", &e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/get/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "No user with this id", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_user(
    repo: web::Data<dyn UserRepository>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🔍 GET /api/get/user/{}", id);

    match user_service::get_user(repo.get_ref(), &id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            log_failure("Get user", &e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/update/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Email already taken or malformed body", body = MessageResponse),
        (status = 404, description = "No user with this id", body = MessageResponse),
        (status = 422, description = "Invalid field values"),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn update_user(
    repo: web::Data<dyn UserRepository>,
    path: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🔧 PUT /api/update/user/{}", id);

    match user_service::update_user(repo.get_ref(), &id, request.into_inner()).await {
        Ok(response) => {
            log::info!("✅ User updated: {}", id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log_failure("Update user", &e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/delete/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "No user with this id", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn delete_user(
    repo: web::Data<dyn UserRepository>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /api/delete/user/{}", id);

    match user_service::delete_user(repo.get_ref(), &id).await {
        Ok(response) => {
            log::info!("✅ User deleted: {}", id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log_failure("Delete user", &e);
            e.error_response()
        }
    }
}
