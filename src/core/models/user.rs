use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type UserId = i64;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
}
