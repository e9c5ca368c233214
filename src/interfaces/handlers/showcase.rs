//! Static page content: alumni, team, resources and merchandise.

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::{
    constants::MAX_WINDOW_RADIUS,
    content::{ALUMNI, ALUMNI_START_INDEX, MERCH, RESOURCES, TEAM},
    entities::showcase::AlumniMember,
    errors::AppError,
    use_cases::pages::{alumni_window, filter_resources, ResourceFilter},
};

const DEFAULT_ALUMNI_RADIUS: usize = 2;

#[derive(Debug, Deserialize)]
pub struct AlumniQuery {
    pub center: Option<usize>,
    pub radius: Option<usize>,
}

#[derive(Debug, Serialize)]
struct AlumniSlot {
    offset: isize,
    #[serde(flatten)]
    member: AlumniMember,
}

pub async fn get_alumni(query: web::Query<AlumniQuery>) -> Result<impl Responder, AppError> {
    let center = query.center.unwrap_or(ALUMNI_START_INDEX);
    let radius = query.radius.unwrap_or(DEFAULT_ALUMNI_RADIUS);
    if radius > MAX_WINDOW_RADIUS {
        return Err(AppError::BadRequest(format!(
            "radius must be at most {}",
            MAX_WINDOW_RADIUS
        )));
    }

    let slots: Vec<AlumniSlot> = alumni_window(&ALUMNI, center, radius)
        .into_iter()
        .map(|(offset, member)| AlumniSlot { offset, member })
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "total": ALUMNI.len(),
        "window": slots,
    })))
}

pub async fn get_team() -> impl Responder {
    HttpResponse::Ok().json(&*TEAM)
}

pub async fn get_resources(filter: web::Query<ResourceFilter>) -> impl Responder {
    HttpResponse::Ok().json(filter_resources(&RESOURCES, &filter))
}

pub async fn get_merch() -> impl Responder {
    HttpResponse::Ok().json(&*MERCH)
}
