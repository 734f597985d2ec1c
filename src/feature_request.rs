//! Feature request log - stores queries that matched no tool / 기능 요청 기록
//!
//! When a search ends in no-match the caller offers "request this feature",
//! the raw query lands here. One SQLite file, WAL mode.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::path::Path;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::search::SearchResult;

/// Recorded request / 기록된 요청
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRequest {
    pub id: String,
    /// Raw query as typed / 입력된 검색어 원문
    pub query: String,
    /// RFC 3339 UTC timestamp / 기록 시각
    pub created_at: String,
}

/// Feature request store / 기능 요청 저장소
pub struct FeatureRequestLog {
    db: Pool<Sqlite>,
}

/// Run database migrations / 데이터베이스 마이그레이션
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS feature_requests (
            id TEXT PRIMARY KEY,
            query TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_feature_requests_created ON feature_requests(created_at)")
        .execute(pool)
        .await?;

    Ok(())
}

impl FeatureRequestLog {
    /// Open (or create) the log database / 기록 DB 열기
    pub async fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.to_string_lossy());
        let db = SqlitePoolOptions::new()
            .max_connections(2)
            .connect(&db_url)
            .await?;

        sqlx::query("PRAGMA journal_mode=WAL").execute(&db).await?;
        sqlx::query("PRAGMA busy_timeout=5000").execute(&db).await?;

        run_migrations(&db).await?;
        tracing::info!("Feature request log opened: {:?}", db_path);

        Ok(Self { db })
    }

    /// In-memory log, contents vanish on drop / 메모리 전용 기록
    pub async fn in_memory() -> Result<Self> {
        // a second connection would see a different empty database
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        run_migrations(&db).await?;
        Ok(Self { db })
    }

    /// Record a query; blank queries are ignored / 검색어 기록 (빈 검색어는 무시)
    pub async fn record(&self, query: &str) -> Result<Option<FeatureRequest>> {
        if query.trim().is_empty() {
            return Ok(None);
        }

        let request = FeatureRequest {
            id: Uuid::new_v4().to_string(),
            query: query.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        };

        sqlx::query("INSERT INTO feature_requests (id, query, created_at) VALUES (?, ?, ?)")
            .bind(&request.id)
            .bind(&request.query)
            .bind(&request.created_at)
            .execute(&self.db)
            .await?;

        tracing::info!("Feature request recorded: {}", request.query);
        Ok(Some(request))
    }

    /// Record the query of a no-match result, matched results are skipped / 매칭 실패한 검색어만 기록
    pub async fn record_unmatched<T>(
        &self,
        result: &SearchResult<'_, T>,
    ) -> Result<Option<FeatureRequest>> {
        if !result.no_match {
            return Ok(None);
        }
        self.record(&result.query).await
    }

    /// Most recent requests first / 최근 요청 순
    pub async fn recent(&self, limit: u32) -> Result<Vec<FeatureRequest>> {
        let rows: Vec<(String, String, String)> = sqlx::query_as(
            "SELECT id, query, created_at FROM feature_requests ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, query, created_at)| FeatureRequest { id, query, created_at })
            .collect())
    }

    /// Number of stored requests / 저장된 요청 수
    pub async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feature_requests")
            .fetch_one(&self.db)
            .await?;
        Ok(count.max(0) as u64)
    }

    /// Delete every request, returns how many were removed / 전체 삭제
    pub async fn clear(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM feature_requests")
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected())
    }

    /// Close database connection pool / 연결 풀 닫기
    pub async fn close(&self) {
        self.db.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tool;
    use crate::search::search;

    #[tokio::test]
    async fn test_record_and_list() {
        let log = FeatureRequestLog::in_memory().await.unwrap();

        let first = log.record("엑셀 합치기").await.unwrap().unwrap();
        let second = log.record("  동영상 자르기 ").await.unwrap().unwrap();
        assert_eq!(second.query, "  동영상 자르기 ");
        assert_ne!(first.id, second.id);

        let recent = log.recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0], second);
        assert_eq!(recent[1], first);
        assert_eq!(log.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_blank_query_not_recorded() {
        let log = FeatureRequestLog::in_memory().await.unwrap();
        assert!(log.record("").await.unwrap().is_none());
        assert!(log.record("   ").await.unwrap().is_none());
        assert_eq!(log.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_recent_limit_and_clear() {
        let log = FeatureRequestLog::in_memory().await.unwrap();
        for i in 0..5 {
            log.record(&format!("요청 {i}")).await.unwrap();
        }

        let recent = log.recent(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].query, "요청 4");

        assert_eq!(log.clear().await.unwrap(), 5);
        assert_eq!(log.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_record_unmatched_only() {
        let log = FeatureRequestLog::in_memory().await.unwrap();
        let catalog = vec![Tool::new("qr", "QR 생성기", "", &["큐알"])];

        let matched = search("QR 생성기", &catalog);
        assert!(log.record_unmatched(&matched).await.unwrap().is_none());

        let unmatched = search("동영상 자르기", &catalog);
        let request = log.record_unmatched(&unmatched).await.unwrap().unwrap();
        assert_eq!(request.query, "동영상 자르기");

        let blank = search("   ", &catalog);
        assert!(blank.no_match);
        assert!(log.record_unmatched(&blank).await.unwrap().is_none());

        assert_eq!(log.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_open_file_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("requests.db");

        let log = FeatureRequestLog::open(&path).await.unwrap();
        log.record("추가해 주세요").await.unwrap();
        log.close().await;

        let log = FeatureRequestLog::open(&path).await.unwrap();
        let recent = log.recent(10).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].query, "추가해 주세요");
        log.close().await;
    }
}
