use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 短链接记录
///
/// Field names on the wire follow what the dashboard client reads:
/// `_id`, `originalUrl`, `shortUrl`, `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLink {
    #[serde(rename = "_id")]
    pub id: String,
    pub original_url: String,
    #[serde(rename = "shortUrl")]
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

/// 待插入的链接（id 与 created_at 由存储层分配）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}

/// 部分更新，`None` 表示保持原值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub original_url: Option<String>,
    pub short_code: Option<String>,
}

impl LinkPatch {
    pub fn is_empty(&self) -> bool {
        self.original_url.is_none() && self.short_code.is_none()
    }
}
