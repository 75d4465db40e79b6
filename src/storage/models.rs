// storage/models.rs
// Row models

use chrono::NaiveDateTime;

/// One row of the `posts` table.
///
/// The bootstrap never reads or writes posts; this is the row shape shared
/// with the loaders and readers that use the table afterwards. Every column
/// except `id` is nullable.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Post {
    /// Auto-incrementing primary key
    pub id: i32,
    /// Item title
    pub title: Option<String>,
    /// Link target, absent for text posts
    pub url: Option<String>,
    /// Item kind (`story`, `job`, `poll`, ...), stored in the `type` column
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    /// Points at ingestion time
    pub score: Option<i32>,
    /// Submission time
    pub timestamp: Option<NaiveDateTime>,
}
