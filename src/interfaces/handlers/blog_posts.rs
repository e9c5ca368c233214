use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{constants::ALL_CATEGORIES, errors::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub author: Option<String>,
}

#[instrument(skip(state, query))]
pub async fn get_all_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<BlogListQuery>,
) -> Result<impl Responder, AppError> {
    let blog_post_handler = &state.blog_handler;
    let query = query.into_inner();

    let posts = match query.author.as_deref() {
        Some(author) => blog_post_handler.get_blog_posts_by_author(author).await?,
        None => {
            blog_post_handler
                .list_blog_posts(
                    query.category.as_deref().unwrap_or(ALL_CATEGORIES),
                    query.q.as_deref().unwrap_or_default(),
                )
                .await?
        }
    };

    let response: Vec<_> = posts.iter().map(|p| p.to_list_response()).collect();
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(post_id, state))]
pub async fn get_blog_post_by_id(
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_blog_post_by_id(&post_id).await?;
    Ok(HttpResponse::Ok().json(post.to_detail_response()))
}
