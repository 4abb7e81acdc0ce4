//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
///
/// The /api/admin scope is the administrative surface. It carries no auth
/// gate yet; the split exists so a gate can be layered onto the scope
/// without touching the public routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Public surface
            .route("/posts", web::get().to(posts::list_published))
            .route("/posts", web::post().to(posts::create_post))
            .route("/posts/{id}", web::get().to(posts::get_post))
            .route("/posts/{id}", web::put().to(posts::update_post))
            .route("/posts/{id}", web::delete().to(posts::delete_post))
            // Admin surface
            .service(web::scope("/admin").route("/posts", web::get().to(posts::list_all))),
    );
}
