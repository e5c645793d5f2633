//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Author, Post};
use blog_core::error::DomainError;
use blog_core::ports::{PostRepository as _, PostUpdate};
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author: post.author.display_name(),
        content: post.content,
        title: post.title,
        created: post.created,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound { id })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let author = Author::new(req.author.first_name, req.author.last_name);
    let mut post = Post::create(author, req.title, req.content)?;
    if let Some(created) = req.created {
        post = post.created_at(created);
    }

    let post = state.posts.insert(post).await?;
    tracing::debug!(post_id = %post.id, "Created post");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if req.id != id {
        return Err(AppError::BadRequest(format!(
            "path id {} and body id {} must match",
            id, req.id
        )));
    }

    let changes = PostUpdate {
        title: req.title,
        content: req.content,
    };
    if changes.is_empty() {
        return Err(AppError::BadRequest(
            "at least one of title or content is required".to_string(),
        ));
    }
    if changes.title.as_deref().is_some_and(|t| t.trim().is_empty())
        || changes
            .content
            .as_deref()
            .is_some_and(|c| c.trim().is_empty())
    {
        return Err(AppError::BadRequest(
            "title and content must not be blank".to_string(),
        ));
    }

    let updated = state.posts.update_by_id(id, changes).await?;
    if updated == 0 {
        return Err(DomainError::NotFound { id }.into());
    }

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let deleted = state.posts.delete_by_id(id).await?;
    if deleted == 0 {
        return Err(DomainError::NotFound { id }.into());
    }
    tracing::debug!(post_id = %id, "Deleted post");

    Ok(HttpResponse::NoContent().finish())
}
