use actix_web::web;

pub mod battles;
pub mod health;

/// Configure application routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Battle event routes: /api/rooms/**
    cfg.service(web::scope("/api/rooms").configure(battles::configure_routes));
}
