use chrono::{DateTime, Utc};

use crate::storage::{NewLink, ShortLink};
use migration::entities::short_link;

/// 将 Sea-ORM Model 转换为 ShortLink
pub fn model_to_shortlink(model: short_link::Model) -> ShortLink {
    ShortLink {
        id: model.id,
        original_url: model.original_url,
        short_code: model.short_code,
        created_at: model.created_at,
    }
}

/// 为新链接构建 ActiveModel，id 与 created_at 由调用方分配
pub fn new_link_to_active_model(
    link: &NewLink,
    id: &str,
    created_at: DateTime<Utc>,
) -> short_link::ActiveModel {
    use sea_orm::ActiveValue::Set;

    short_link::ActiveModel {
        id: Set(id.to_string()),
        short_code: Set(link.short_code.clone()),
        original_url: Set(link.original_url.clone()),
        created_at: Set(created_at),
    }
}
