//! Fixed-field JSON projection of stored articles
//!
//! Timestamps stay in the store; clients only ever see
//! `id, title, content, category, status`.

use serde::{Deserialize, Serialize};

use crate::db::models::{Article, ArticleStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleView {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: ArticleStatus,
}

impl From<Article> for ArticleView {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            category: article.category,
            status: article.status,
        }
    }
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        article.clone().into()
    }
}

/// Absent rows serialize to `null`.
pub fn serialize_one(article: Option<Article>) -> Option<ArticleView> {
    article.map(ArticleView::from)
}

pub fn serialize_many(articles: Vec<Article>) -> Vec<ArticleView> {
    articles.into_iter().map(ArticleView::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn article(id: i32, status: ArticleStatus) -> Article {
        let now = Utc::now().into();
        Article {
            id,
            title: "A title that is long enough".to_string(),
            content: "body".to_string(),
            category: "tech".to_string(),
            status,
            created_date: now,
            updated_date: now,
        }
    }

    #[test]
    fn test_view_exposes_exactly_five_fields() {
        let value = serde_json::to_value(ArticleView::from(&article(3, ArticleStatus::Draft))).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["category", "content", "id", "status", "title"]);
        assert_eq!(value["status"], json!("draft"));
        assert_eq!(value["id"], json!(3));
    }

    #[test]
    fn test_absent_article_is_null() {
        assert_eq!(serde_json::to_value(serialize_one(None)).unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn test_many_preserves_order() {
        let views = serialize_many(vec![
            article(9, ArticleStatus::Publish),
            article(4, ArticleStatus::Publish),
        ]);
        let ids: Vec<i32> = views.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }
}
