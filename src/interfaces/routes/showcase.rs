use actix_web::web;

use crate::handlers::{search::search, showcase};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/alumni").route(web::get().to(showcase::get_alumni)))
        .service(web::resource("/team").route(web::get().to(showcase::get_team)))
        .service(web::resource("/resources").route(web::get().to(showcase::get_resources)))
        .service(web::resource("/merch").route(web::get().to(showcase::get_merch)))
        .service(web::resource("/search").route(web::get().to(search)));
}
