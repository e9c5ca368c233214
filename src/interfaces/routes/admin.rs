use actix_web::web;

use crate::handlers::admin;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(web::resource("/projects").route(web::post().to(admin::create_project)))
            .service(web::resource("/courses").route(web::post().to(admin::create_course)))
            .service(web::resource("/blogs").route(web::post().to(admin::create_blog_post)))
            .service(
                web::resource("/blogs/{post_id}")
                    .route(web::patch().to(admin::update_blog_post))
                    .route(web::delete().to(admin::delete_blog_post))
            )
    );
}
