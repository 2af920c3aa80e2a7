//! API 请求/响应类型

use serde::{Deserialize, Serialize};

use crate::storage::ShortLink;

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// POST /api/shorten 请求体
///
/// `originalUrl` 缺失与格式错误同样返回 400，因此声明为 Option。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShortenRequest {
    pub original_url: Option<String>,
    pub custom_short_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortlinksResponse {
    pub shortlinks: Vec<ShortLink>,
}

/// PUT /api/edit/{short_url} 请求体
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditRequest {
    pub original_url: Option<String>,
    pub new_short_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EditResponse {
    pub message: String,
    pub link: ShortLink,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
