use actix_web::web;

use crate::handlers::catalog;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(web::resource("").route(web::get().to(catalog::get_projects)))
            .service(web::resource("/{project_id}").route(web::get().to(catalog::get_project_by_id)))
    );

    cfg.service(
        web::scope("/courses")
            .service(web::resource("").route(web::get().to(catalog::get_courses)))
            .service(web::resource("/{course_id}").route(web::get().to(catalog::get_course_by_id)))
    );
}
