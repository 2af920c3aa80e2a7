use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::get_config;
use crate::services::LinkService;
use crate::storage::{LinkStore, SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub link_service: Arc<LinkService>,
}

/// 准备服务器启动的上下文：存储连接与链接服务
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let config = get_config();

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let link_service = Arc::new(LinkService::new(storage.clone(), &config.features));

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        storage,
        link_service,
    })
}
