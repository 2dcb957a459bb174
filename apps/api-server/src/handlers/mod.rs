//! HTTP handlers and route configuration.

mod auth;
mod comments;
mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/verify", web::get().to(auth::verify))
                    .route("/login", web::post().to(auth::login)),
            )
            // Feed routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/like", web::post().to(posts::like))
                    .route("/{id}/comments", web::post().to(comments::create))
                    .route("/{id}/comments", web::get().to(comments::list)),
            ),
    );
}
