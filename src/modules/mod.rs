use actix_web::web;

pub mod health;
pub mod pricing;

/// Register every module's routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(pricing::configure);
}
