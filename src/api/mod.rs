pub mod health;
pub mod swagger;
pub mod users;

use actix_web::{error, web, HttpResponse};

/// JSON extractor config: malformed bodies answer 400 with a `{"message"}` body
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        log::warn!("⚠️ Rejected JSON body: {}", message);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "message": message })),
        )
        .into()
    })
}

/// Registers the `/api` routes. Expects `web::Data<dyn UserRepository>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .route("/user", web::post().to(users::create_user))
            .route("/get/users", web::get().to(users::list_users))
            .route("/get/user/{id}", web::get().to(users::get_user))
            .route("/update/user/{id}", web::put().to(users::update_user))
            .route("/delete/user/{id}", web::delete().to(users::delete_user)),
    );
}
