use std::time::Duration;

use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::storage::SeaOrmStorage;

/// 关闭超时时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// 等待 Ctrl+C
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }
}

/// 释放存储连接池
pub async fn shutdown_storage(storage: &SeaOrmStorage) {
    match timeout(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS), storage.close()).await {
        Ok(Ok(())) => {
            info!("All shutdown tasks completed successfully");
        }
        Ok(Err(e)) => {
            error!("Failed to close storage on shutdown: {}", e);
        }
        Err(_) => {
            error!(
                "Closing storage timed out after {} seconds",
                SHUTDOWN_TIMEOUT_SECS
            );
        }
    }
}
