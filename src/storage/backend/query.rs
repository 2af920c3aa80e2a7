//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, error};

use super::SeaOrmStorage;
use super::converters::model_to_shortlink;
use crate::errors::{Result, ShortlinkError};
use crate::storage::ShortLink;

use migration::entities::short_link;

impl SeaOrmStorage {
    pub async fn get(&self, code: &str) -> Result<Option<ShortLink>> {
        let model = short_link::Entity::find()
            .filter(short_link::Column::ShortCode.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query short link '{}': {}", code, e);
                ShortlinkError::database_operation(format!("Failed to query short link: {}", e))
            })?;

        Ok(model.map(model_to_shortlink))
    }

    pub(super) async fn get_by_id(&self, id: &str) -> Result<Option<short_link::Model>> {
        short_link::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| {
                ShortlinkError::database_operation(format!("Failed to query link by id: {}", e))
            })
    }

    pub async fn load_all(&self) -> Result<Vec<ShortLink>> {
        let models = short_link::Entity::find()
            .order_by_asc(short_link::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load all short links: {}", e);
                ShortlinkError::database_operation(format!("Failed to load short links: {}", e))
            })?;

        debug!("Loaded {} short links", models.len());
        Ok(models.into_iter().map(model_to_shortlink).collect())
    }
}
