//! Admin handlers - authenticated post and category management.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use scribe_core::service::{NewPost, PostPatch};
use scribe_shared::dto::{
    CategoryEnvelope, CategoryListResponse, CategoryResponse, CleanupResponse,
    CreateCategoryRequest, CreatePostRequest, MessageResponse, PostEnvelope, PostListResponse,
    PostSummary, UpdatePostRequest,
};

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdminListQuery {
    pub limit: Option<usize>,
    pub status: Option<String>,
}

/// GET /api/admin/blogs
pub async fn list_posts(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    query: web::Query<AdminListQuery>,
) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list(query.status.as_deref(), query.limit)
        .await?;

    let posts: Vec<PostSummary> = posts.iter().map(PostSummary::from).collect();
    Ok(HttpResponse::Ok().json(PostListResponse {
        count: posts.len(),
        posts,
    }))
}

/// POST /api/admin/blogs
pub async fn create_post(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content_raw: req.content_raw,
            content_html: req.content_html,
            excerpt: req.excerpt,
            category: req.category,
            status: req.status,
        })
        .await?;

    Ok(HttpResponse::Created().json(PostEnvelope::with_message(
        post.into(),
        "Blog post created successfully",
    )))
}

/// GET /api/admin/blogs/{id}
pub async fn get_post(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostEnvelope::new(post.into())))
}

/// PUT /api/admin/blogs/{id}
pub async fn update_post(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .update(
            path.into_inner(),
            PostPatch {
                title: req.title,
                content_raw: req.content_raw,
                content_html: req.content_html,
                excerpt: req.excerpt,
                category: req.category,
                status: req.status,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(PostEnvelope::with_message(
        post.into(),
        "Blog post updated successfully",
    )))
}

/// DELETE /api/admin/blogs/{id}
pub async fn delete_post(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Blog post deleted successfully".to_string(),
    }))
}

/// GET /api/admin/categories
///
/// Includes invalid (empty-name) records so cleanup targets are visible.
pub async fn list_categories(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let categories = state.categories.list(true).await?;
    let categories: Vec<CategoryResponse> = categories.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(CategoryListResponse {
        count: categories.len(),
        categories,
    }))
}

/// POST /api/admin/categories
pub async fn create_category(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let category = state.categories.create(&req.name, req.description).await?;

    Ok(HttpResponse::Created().json(CategoryEnvelope::with_message(
        category.into(),
        "Category created successfully",
    )))
}

/// DELETE /api/admin/categories/{name}
pub async fn delete_category(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.categories.delete(&path).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Category deleted successfully".to_string(),
    }))
}

/// POST /api/admin/categories/cleanup
pub async fn cleanup_categories(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let deleted_keys = state.categories.cleanup().await?;
    Ok(HttpResponse::Ok().json(CleanupResponse {
        message: format!("Cleaned up {} invalid categories", deleted_keys.len()),
        deleted_keys,
    }))
}
