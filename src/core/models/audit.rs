use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use super::user::UserId;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AppLog {
    pub id: String,
    pub action: String,
    pub user_id: Option<UserId>,
    #[schema(value_type = Object)]
    pub details: HashMap<String, serde_json::Value>,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64, example = 1717245296)]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
