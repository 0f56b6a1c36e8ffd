//! HTTP handlers and route configuration.

mod admin;
mod health;
mod public;

use actix_web::web;

/// Configure all application routes.
///
/// Fixed segments (`latest`, `slug`, `cleanup`) are registered before
/// their parameterized siblings so they match first.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes - published content only
            .service(
                web::scope("/public")
                    .route("/health", web::get().to(health::health_check))
                    .route("/blogs", web::get().to(public::list_posts))
                    .route("/blogs/latest", web::get().to(public::latest_post))
                    .route("/blogs/slug/{slug}", web::get().to(public::get_post_by_slug))
                    .route("/blogs/{id}", web::get().to(public::get_post))
                    .route("/categories", web::get().to(public::list_categories)),
            )
            // Admin routes - bearer-token authenticated
            .service(
                web::scope("/admin")
                    .route("/health", web::get().to(health::admin_health_check))
                    .route("/blogs", web::get().to(admin::list_posts))
                    .route("/blogs", web::post().to(admin::create_post))
                    .route("/blogs/{id}", web::get().to(admin::get_post))
                    .route("/blogs/{id}", web::put().to(admin::update_post))
                    .route("/blogs/{id}", web::delete().to(admin::delete_post))
                    .route("/categories", web::get().to(admin::list_categories))
                    .route("/categories", web::post().to(admin::create_category))
                    .route(
                        "/categories/cleanup",
                        web::post().to(admin::cleanup_categories),
                    )
                    .route(
                        "/categories/{name}",
                        web::delete().to(admin::delete_category),
                    ),
            ),
    );
}
