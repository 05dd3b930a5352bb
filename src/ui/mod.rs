//! Browser UI: list, create and edit pages.
//!
//! Pages are rendered on the server, but every data operation goes through
//! [`client::ApiClient`] over HTTP to the configured API base URL, so the UI
//! only depends on the public API contract. Outcomes reach the user as
//! notifications, either on a re-rendered form or carried across a redirect
//! to the list view.

pub mod client;
pub mod forms;
pub mod notification;
pub mod outcome;
pub mod pages;
pub mod views;

pub use client::ApiClient;

use actix_web::web;

/// Registers the UI routes. Expects `web::Data<ApiClient>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::list_page))
        .route("/add", web::get().to(pages::add_form))
        .route("/add", web::post().to(pages::submit_add))
        .route("/update/{id}", web::get().to(pages::edit_form))
        .route("/update/{id}", web::post().to(pages::submit_update))
        .route("/delete/{id}", web::post().to(pages::submit_delete));
}
