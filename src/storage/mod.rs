use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{LinkPatch, NewLink, ShortLink};

/// 链接存储接口
///
/// The store is the only synchronization point: short code uniqueness is
/// enforced here, and a losing concurrent writer gets `Conflict`.
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// 按短码精确查找
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>>;

    /// 全量扫描，按创建时间升序，不分页
    async fn find_all(&self) -> Result<Vec<ShortLink>>;

    /// 插入新链接；短码已存在时返回 `Conflict`
    async fn insert(&self, link: NewLink) -> Result<ShortLink>;

    /// 按 id 更新；记录不存在时返回 `NotFound`，新短码冲突时返回 `Conflict`
    async fn update(&self, id: &str, patch: LinkPatch) -> Result<ShortLink>;

    /// 按短码删除；不存在时返回 `NotFound`
    async fn delete_by_code(&self, code: &str) -> Result<()>;

    fn backend_name(&self) -> &str;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<SeaOrmStorage>> {
        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(&config.database_url)?;

        let storage = SeaOrmStorage::new(config, &backend_type).await?;
        Ok(Arc::new(storage))
    }
}
