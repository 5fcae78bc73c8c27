use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::{ErrorKind, SplitwiseError};
use crate::core::models::{NewExpense, SplitSpec, SplitType, UserId};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    pub name: String,
    pub user_ids: Vec<UserId>,
}

/// `splits` may be omitted for equal splits (all members participate) and is
/// required for percentage splits.
#[derive(Deserialize, ToSchema)]
pub struct AddExpenseRequest {
    pub description: String,
    pub amount: f64,
    pub paid_by: UserId,
    pub split_type: SplitType,
    #[serde(default)]
    pub splits: Option<Vec<SplitSpec>>,
}

impl From<AddExpenseRequest> for NewExpense {
    fn from(req: AddExpenseRequest) -> Self {
        NewExpense {
            description: req.description,
            amount: req.amount,
            paid_by: req.paid_by,
            split_type: req.split_type,
            splits: req.splits,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// Newtype wrapper for SplitwiseError to implement IntoResponse
pub struct ApiError(pub SplitwiseError);

impl From<SplitwiseError> for ApiError {
    fn from(err: SplitwiseError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match self.0.kind() {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "validation_error"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "conflict"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ErrorKind::InconsistentLedger => (StatusCode::INTERNAL_SERVER_ERROR, "inconsistent_ledger"),
            ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }
        let body = ErrorResponse {
            error: code.to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
