use actix_web::{get, HttpResponse, Responder};

use crate::content::{HOME_STATS, HOME_TECH_TAGS, TERMINAL_LINES};

#[get("/")]
pub async fn home() -> impl Responder {
    let stats: Vec<_> = HOME_STATS
        .iter()
        .map(|(number, label)| serde_json::json!({ "number": number, "label": label }))
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Coding Club API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "terminal": TERMINAL_LINES,
        "stats": stats,
        "tech_tags": HOME_TECH_TAGS,
        "documentation": "/api/v1"
    }))
}
