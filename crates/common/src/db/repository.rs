//! Repository pattern for database operations
//!
//! Every mutating operation runs in its own transaction. Returning early
//! drops the transaction, which rolls it back.

use crate::db::models::*;
use crate::db::DbPool;
use crate::errors::{AppError, Result};
use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, ColumnTrait, DatabaseConnection,
    EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

/// Largest LIMIT/OFFSET the drivers bind. Also stands in for the limit when
/// only an offset is given, since SQLite and MySQL reject OFFSET without LIMIT.
const MAX_BOUND: u64 = i64::MAX as u64;

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> &DatabaseConnection {
        self.pool.conn()
    }

    /// Ping the database
    pub async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }

    // ========================================================================
    // Article Operations
    // ========================================================================

    /// Insert a new article; both timestamps are set to the creation time
    pub async fn create(&self, article: NewArticle) -> Result<Article> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        let model = ArticleActiveModel {
            id: NotSet,
            title: Set(article.title),
            content: Set(article.content),
            category: Set(article.category),
            status: Set(article.status),
            created_date: Set(now),
            updated_date: Set(now),
        };

        let txn = self.conn().begin().await?;
        let created = model.insert(&txn).await?;
        txn.commit().await?;

        Ok(created)
    }

    /// Articles with the given status, most recent first
    pub async fn list(
        &self,
        status: ArticleStatus,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<Article>> {
        let limit = match (limit, offset) {
            (None, Some(_)) => Some(MAX_BOUND),
            (limit, _) => limit.map(|n| n.min(MAX_BOUND)),
        };
        let offset = offset.map(|n| n.min(MAX_BOUND));

        ArticleEntity::find()
            .filter(ArticleColumn::Status.eq(status))
            .order_by_desc(ArticleColumn::CreatedDate)
            .order_by_desc(ArticleColumn::Id)
            .limit(limit)
            .offset(offset)
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    /// Find article by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>> {
        ArticleEntity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(Into::into)
    }

    /// Replace title, content, category and status
    pub async fn update(&self, id: i32, article: NewArticle) -> Result<Article> {
        let txn = self.conn().begin().await?;

        let existing = ArticleEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::ArticleNotFound { id })?;

        let updated_date = refreshed(&existing.updated_date);
        let mut model: ArticleActiveModel = existing.into();
        model.title = Set(article.title);
        model.content = Set(article.content);
        model.category = Set(article.category);
        model.status = Set(article.status);
        model.updated_date = Set(updated_date);

        let updated = model.update(&txn).await?;
        txn.commit().await?;

        Ok(updated)
    }

    /// Move an article to the trash without touching its other fields
    pub async fn trash(&self, id: i32) -> Result<Article> {
        let txn = self.conn().begin().await?;

        let existing = ArticleEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::ArticleNotFound { id })?;

        let updated_date = refreshed(&existing.updated_date);
        let mut model: ArticleActiveModel = existing.into();
        model.status = Set(ArticleStatus::Trash);
        model.updated_date = Set(updated_date);

        let trashed = model.update(&txn).await?;
        txn.commit().await?;

        Ok(trashed)
    }

    /// Delete article permanently
    pub async fn delete(&self, id: i32) -> Result<()> {
        let txn = self.conn().begin().await?;

        let result = ArticleEntity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::ArticleNotFound { id });
        }

        txn.commit().await?;
        Ok(())
    }
}

/// Current time, never earlier than the previous modification
fn refreshed(previous: &DateTimeWithTimeZone) -> DateTimeWithTimeZone {
    let now: DateTimeWithTimeZone = Utc::now().into();
    now.max(*previous)
}
