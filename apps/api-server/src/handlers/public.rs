//! Public handlers - read-only, published content only.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use scribe_shared::dto::{
    CategoryListResponse, CategoryResponse, PostEnvelope, PostListResponse, PostSummary,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PublicListQuery {
    pub limit: Option<usize>,
    pub category: Option<String>,
}

/// GET /api/public/blogs
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PublicListQuery>,
) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .published(query.category.as_deref(), query.limit)
        .await?;

    let posts: Vec<PostSummary> = posts.iter().map(PostSummary::from).collect();
    Ok(HttpResponse::Ok().json(PostListResponse {
        count: posts.len(),
        posts,
    }))
}

/// GET /api/public/blogs/latest
pub async fn latest_post(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let post = state.posts.latest_published().await?;
    Ok(HttpResponse::Ok().json(PostEnvelope::new(post.into())))
}

/// GET /api/public/blogs/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.published_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostEnvelope::new(post.into())))
}

/// GET /api/public/blogs/slug/{slug}
pub async fn get_post_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.published_by_slug(&path).await?;
    Ok(HttpResponse::Ok().json(PostEnvelope::new(post.into())))
}

/// GET /api/public/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.list(false).await?;
    let categories: Vec<CategoryResponse> = categories.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(CategoryListResponse {
        count: categories.len(),
        categories,
    }))
}
