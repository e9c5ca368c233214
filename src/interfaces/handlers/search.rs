use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::use_cases::search::global_search;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn search(query: web::Query<SearchQuery>) -> impl Responder {
    HttpResponse::Ok().json(global_search(&query.q))
}
