use utoipa_actix_web::{scope, service_config::ServiceConfig};

pub mod controllers;
pub mod dto;
pub mod error;
mod middlewares;
pub mod protocols;
pub mod validators;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(scope("/api/v1").configure(controllers::signup::routes));
}
