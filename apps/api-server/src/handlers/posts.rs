//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Post, PostFilter};
use blog_core::error::RepoError;
use blog_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Maximum number of posts returned by a list request.
pub const LIST_LIMIT: u64 = 10;

fn to_response(post: &Post) -> PostResponse {
    post.to_external().into()
}

fn post_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Post with id {} not found", id))
}

/// Ids that are not valid UUIDs cannot name a stored post.
fn parse_post_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

/// GET /posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let filter: PostFilter = query.into_inner().into();

    let posts = state.posts.find(&filter, LIST_LIMIT).await?;
    let body: Vec<PostResponse> = posts.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = parse_post_id(&raw_id).ok_or_else(|| post_not_found(&raw_id))?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(&raw_id))?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if let Some(field) = req.missing_field() {
        return Err(AppError::MissingField(field));
    }

    let (Some(title), Some(content), Some(author)) = (req.title, req.content, req.author) else {
        return Err(AppError::BadRequest("Invalid request body".to_string()));
    };

    let post = Post::new(title, content, author, req.created)?;
    let saved = state.posts.create(post).await?;
    tracing::debug!(post_id = %saved.id, "Post created");

    Ok(HttpResponse::Created().json(to_response(&saved)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let path_id = path.into_inner();
    let req = body.into_inner();

    if req.id.as_deref() != Some(path_id.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            path_id,
            req.id.as_deref().unwrap_or("missing")
        )));
    }

    let id = parse_post_id(&path_id).ok_or_else(|| post_not_found(&path_id))?;
    let patch = req.into_patch();
    patch.validate()?;

    match state.posts.update(id, patch).await {
        Ok(_) => {}
        Err(RepoError::NotFound) => return Err(post_not_found(&path_id)),
        Err(e) => return Err(e.into()),
    }
    tracing::debug!(post_id = %id, "Post updated");

    Ok(HttpResponse::Created().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();

    if let Some(id) = parse_post_id(&raw_id) {
        let existed = state.posts.delete(id).await?;
        tracing::debug!(post_id = %id, existed, "Post deleted");
    }

    Ok(HttpResponse::NoContent().finish())
}
