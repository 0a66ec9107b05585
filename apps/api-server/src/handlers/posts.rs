//! Blog post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use inkwell_core::domain::{AuthorName, BlogPost, NewBlogPost, PostChanges};
use inkwell_core::error::DomainError;
use inkwell_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: BlogPost) -> PostResponse {
    PostResponse {
        id: post.id,
        author: post.author.display_name(),
        title: post.title,
        content: post.content,
        created: post.created,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    tracing::debug!(count = posts.len(), "Listing posts");

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let payload = NewBlogPost {
        author: AuthorName::new(req.author.first_name, req.author.last_name),
        title: req.title,
        content: req.content,
        created: req.created,
    };
    payload.validate()?;

    let post = state.posts.insert(payload).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
///
/// Responds 201 on success. An unknown id is not an error: nothing changes
/// and the response is 201 with an empty body.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id {
        if body_id != id {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            )));
        }
    }

    let changes = PostChanges {
        title: req.title,
        content: req.content,
    };
    changes.validate()?;

    match state.posts.update_by_id(id, changes).await? {
        Some(post) => {
            tracing::info!(post_id = %id, "Post updated");
            Ok(HttpResponse::Created().json(to_response(post)))
        }
        None => {
            tracing::warn!(post_id = %id, "Update matched no post");
            Ok(HttpResponse::Created().finish())
        }
    }
}

/// DELETE /posts/{id}
///
/// Always 204; deleting an unknown id is a no-op.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.delete(id).await? {
        tracing::info!(post_id = %id, "Post deleted");
    } else {
        tracing::warn!(post_id = %id, "Delete matched no post");
    }

    Ok(HttpResponse::NoContent().finish())
}
