//! Article handlers
//!
//! Each handler returns `Result<Envelope<_>>`; any `AppError` renders as the
//! `error` or `validation` envelope on the way out.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::AppState;
use blogforge_common::{
    db::{models::ArticleStatus, Repository},
    errors::Result,
    metrics,
    serializer::{serialize_many, serialize_one, ArticleView},
    validation::ArticlePayload,
    Envelope,
};

pub const CREATED_MESSAGE: &str = "Article successfuly created";
pub const UPDATED_MESSAGE: &str = "Article successfuly updated";
pub const TRASHED_MESSAGE: &str = "Article successfuly moved to trash";
pub const DELETED_MESSAGE: &str = "Article successfuly deleted";

/// Create a new article
pub async fn store_article(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ArticlePayload>, JsonRejection>,
) -> Result<Envelope<&'static str>> {
    let Json(payload) = payload?;
    let article = payload.into_new_article()?;

    let created = Repository::new(state.db.clone()).create(article).await?;

    tracing::info!(
        article_id = created.id,
        status = %created.status,
        "Article created"
    );
    metrics::record_write("create");

    Ok(Envelope::created(CREATED_MESSAGE))
}

/// Published articles, paginated
pub async fn get_articles(
    State(state): State<AppState>,
    page: std::result::Result<Path<(u64, u64)>, PathRejection>,
) -> Result<Envelope<Vec<ArticleView>>> {
    let Path((limit, offset)) = page?;
    list_by_status(&state, ArticleStatus::Publish, Some(limit), Some(offset)).await
}

/// All published articles
pub async fn get_published_articles(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<ArticleView>>> {
    list_by_status(&state, ArticleStatus::Publish, None, None).await
}

/// All drafted articles
pub async fn get_drafted_articles(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<ArticleView>>> {
    list_by_status(&state, ArticleStatus::Draft, None, None).await
}

/// All trashed articles
pub async fn get_trashed_articles(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<ArticleView>>> {
    list_by_status(&state, ArticleStatus::Trash, None, None).await
}

/// Get an article by ID; `data` is null when it does not exist
pub async fn get_article(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Envelope<Option<ArticleView>>> {
    let Path(id) = id?;
    let article = Repository::new(state.db.clone()).find_by_id(id).await?;
    Ok(Envelope::ok(serialize_one(article)))
}

/// Replace every mutable field of an article
pub async fn update_article(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
    payload: std::result::Result<Json<ArticlePayload>, JsonRejection>,
) -> Result<Envelope<&'static str>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let article = payload.into_new_article()?;

    let updated = Repository::new(state.db.clone()).update(id, article).await?;

    tracing::info!(
        article_id = updated.id,
        status = %updated.status,
        "Article updated"
    );
    metrics::record_write("update");

    Ok(Envelope::ok(UPDATED_MESSAGE))
}

/// Move an article to the trash
pub async fn update_article_status(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Envelope<&'static str>> {
    let Path(id) = id?;

    Repository::new(state.db.clone()).trash(id).await?;

    tracing::info!(article_id = id, "Article moved to trash");
    metrics::record_write("trash");

    Ok(Envelope::ok(TRASHED_MESSAGE))
}

/// Delete an article permanently
pub async fn delete_article(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Envelope<&'static str>> {
    let Path(id) = id?;

    Repository::new(state.db.clone()).delete(id).await?;

    tracing::info!(article_id = id, "Article deleted");
    metrics::record_write("delete");

    Ok(Envelope::ok(DELETED_MESSAGE))
}

async fn list_by_status(
    state: &AppState,
    status: ArticleStatus,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<Envelope<Vec<ArticleView>>> {
    let articles = Repository::new(state.db.clone())
        .list(status, limit, offset)
        .await?;

    tracing::debug!(status = %status, count = articles.len(), "Articles listed");
    metrics::record_listing(status, articles.len());

    Ok(Envelope::ok(serialize_many(articles)))
}
