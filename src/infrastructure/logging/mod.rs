pub mod in_memory;

use crate::core::errors::SplitwiseError;
use crate::core::models::{AppLog, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        user_id: Option<UserId>,
    ) -> Result<(), SplitwiseError>;
    async fn get_logs(&self) -> Result<Vec<AppLog>, SplitwiseError>;
}
