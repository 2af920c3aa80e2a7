//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use chrono::{SubsecRound, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, SqlErr,
};
use tracing::{info, warn};

use super::SeaOrmStorage;
use super::converters::{model_to_shortlink, new_link_to_active_model};
use crate::errors::{Result, ShortlinkError};
use crate::storage::{LinkPatch, NewLink, ShortLink};

use migration::entities::short_link;

/// 判断是否为唯一约束冲突
///
/// `sql_err()` covers the common drivers; the message fallback catches
/// driver versions that report the violation only as text.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string();
    msg.contains("UNIQUE constraint failed")
        || msg.contains("duplicate key value")
        || msg.contains("Duplicate entry")
}

impl SeaOrmStorage {
    pub async fn create(&self, link: NewLink) -> Result<ShortLink> {
        let id = uuid::Uuid::new_v4().to_string();
        let created_at = Utc::now().trunc_subsecs(6);
        let active_model = new_link_to_active_model(&link, &id, created_at);

        short_link::Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    warn!("Short code already exists: {}", link.short_code);
                    ShortlinkError::conflict(format!(
                        "Short code '{}' already exists",
                        link.short_code
                    ))
                } else {
                    ShortlinkError::database_operation(format!(
                        "Failed to insert short link '{}': {}",
                        link.short_code, e
                    ))
                }
            })?;

        info!("Short link inserted: {}", link.short_code);
        Ok(ShortLink {
            id,
            original_url: link.original_url,
            short_code: link.short_code,
            created_at,
        })
    }

    pub async fn apply_patch(&self, id: &str, patch: LinkPatch) -> Result<ShortLink> {
        let model = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| ShortlinkError::not_found(format!("Link with id '{}' not found", id)))?;

        if patch.is_empty() {
            return Ok(model_to_shortlink(model));
        }

        let mut active_model = model.into_active_model();
        if let Some(short_code) = patch.short_code {
            active_model.short_code = Set(short_code);
        }
        if let Some(original_url) = patch.original_url {
            active_model.original_url = Set(original_url);
        }

        let updated = active_model.update(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                ShortlinkError::conflict("Short code already exists")
            } else if matches!(e, DbErr::RecordNotUpdated) {
                ShortlinkError::not_found(format!("Link with id '{}' not found", id))
            } else {
                ShortlinkError::database_operation(format!("Failed to update short link: {}", e))
            }
        })?;

        info!("Short link updated: {}", updated.short_code);
        Ok(model_to_shortlink(updated))
    }

    pub async fn remove(&self, code: &str) -> Result<()> {
        let result = short_link::Entity::delete_many()
            .filter(short_link::Column::ShortCode.eq(code))
            .exec(&self.db)
            .await
            .map_err(|e| {
                ShortlinkError::database_operation(format!("Failed to delete short link: {}", e))
            })?;

        if result.rows_affected == 0 {
            return Err(ShortlinkError::not_found(format!(
                "Short link not found: {}",
                code
            )));
        }

        info!("Short link deleted: {}", code);
        Ok(())
    }
}
