//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::errors::{Result, ShortlinkError};
use crate::storage::{LinkPatch, LinkStore, NewLink, ShortLink};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_shortlink, new_link_to_active_model};
pub use mutations::is_unique_violation;

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(ShortlinkError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported formats: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(config: &DatabaseConfig, backend_name: &str) -> Result<Self> {
        let database_url = &config.database_url;
        if database_url.is_empty() {
            return Err(ShortlinkError::database_config("DATABASE_URL is not set"));
        }

        // 根据不同数据库类型配置连接选项
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url, config.pool_size).await?
        } else {
            connect_generic(database_url, backend_name, config).await?
        };

        let storage = SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
        };

        run_migrations(&storage.db).await?;

        warn!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    /// 关闭连接池（关闭流程中调用）
    pub async fn close(&self) -> Result<()> {
        self.db.clone().close().await.map_err(|e| {
            ShortlinkError::database_connection(format!("Failed to close database: {}", e))
        })?;
        info!("{} connection pool closed", self.backend_name.to_uppercase());
        Ok(())
    }
}

#[async_trait]
impl LinkStore for SeaOrmStorage {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>> {
        self.get(code).await
    }

    async fn find_all(&self) -> Result<Vec<ShortLink>> {
        self.load_all().await
    }

    async fn insert(&self, link: NewLink) -> Result<ShortLink> {
        self.create(link).await
    }

    async fn update(&self, id: &str, patch: LinkPatch) -> Result<ShortLink> {
        self.apply_patch(id, patch).await
    }

    async fn delete_by_code(&self, code: &str) -> Result<()> {
        self.remove(code).await
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_backend_from_url() {
        assert_eq!(infer_backend_from_url("sqlite://links.db").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("sqlite::memory:").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("shortlinks.db").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("data/links.sqlite").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url(":memory:").unwrap(), "sqlite");
        assert_eq!(
            infer_backend_from_url("mysql://root@localhost/links").unwrap(),
            "mysql"
        );
        assert_eq!(
            infer_backend_from_url("mariadb://root@localhost/links").unwrap(),
            "mysql"
        );
        assert_eq!(
            infer_backend_from_url("postgres://user@localhost/links").unwrap(),
            "postgres"
        );
        assert_eq!(
            infer_backend_from_url("postgresql://user@localhost/links").unwrap(),
            "postgres"
        );
    }

    #[test]
    fn test_infer_backend_unknown_url() {
        let err = infer_backend_from_url("mongodb://localhost:27017/shortlink").unwrap_err();
        assert!(matches!(err, ShortlinkError::DatabaseConfig(_)));
    }
}
