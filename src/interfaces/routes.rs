use actix_web::web;

use crate::handlers::{home::home, json_error::not_found, system::health_check};

mod admin;
mod blog;
mod catalog;
mod json_error;
mod showcase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .service(health_check)
            .configure(blog::config_routes)
            .configure(catalog::config_routes)
            .configure(showcase::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
    cfg.default_service(web::route().to(not_found));
}
