use crate::{
    api::{models::*, openapi::ApiDoc},
    core::{
        models::{
            AppLog, Expense, GroupBalancesResponse, GroupId, GroupResponse, GroupSettlementsResponse, User,
            UserBalancesResponse, UserId,
        },
        services::SplitwiseService,
    },
    infrastructure::{logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage},
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;
use utoipa::OpenApi;

pub type AppService = SplitwiseService<InMemoryLogging, InMemoryStorage>;

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{user_id}", get(get_user))
        .route("/users/{user_id}/balances", get(get_user_balances))
        .route("/groups", get(list_groups).post(create_group))
        .route("/groups/{group_id}", get(get_group).delete(delete_group))
        .route("/groups/{group_id}/expenses", get(list_expenses).post(add_expense))
        .route("/groups/{group_id}/balances", get(get_group_balances))
        .route("/groups/{group_id}/settle", get(settle_group))
        .route("/logs", get(get_app_logs))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Invalid name", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse)
    )
)]
pub(crate) async fn create_user(
    State(service): State<Arc<AppService>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = service.add_user(req.name).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/users",
    responses((status = 200, description = "All users", body = Vec<User>))
)]
pub(crate) async fn list_users(State(service): State<Arc<AppService>>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(service.list_users().await?))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "ID of the user to retrieve")),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user(
    State(service): State<Arc<AppService>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(service.require_user(user_id).await?))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/balances",
    params(("user_id" = i64, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Net balance of the user in each of their groups", body = UserBalancesResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user_balances(
    State(service): State<Arc<AppService>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserBalancesResponse>, ApiError> {
    Ok(Json(service.user_balances(user_id).await?))
}

#[utoipa::path(
    post,
    path = "/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Group created successfully", body = GroupResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub(crate) async fn create_group(
    State(service): State<Arc<AppService>>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<Json<GroupResponse>, ApiError> {
    Ok(Json(service.create_group(req.name, req.user_ids).await?))
}

#[utoipa::path(
    get,
    path = "/groups",
    responses((status = 200, description = "All groups with their expense totals", body = Vec<GroupResponse>))
)]
pub(crate) async fn list_groups(
    State(service): State<Arc<AppService>>,
) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    Ok(Json(service.list_groups().await?))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}",
    params(("group_id" = i64, Path, description = "ID of the group")),
    responses(
        (status = 200, description = "Group with members and expense total", body = GroupResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group(
    State(service): State<Arc<AppService>>,
    Path(group_id): Path<GroupId>,
) -> Result<Json<GroupResponse>, ApiError> {
    Ok(Json(service.get_group(group_id).await?))
}

#[utoipa::path(
    delete,
    path = "/groups/{group_id}",
    params(("group_id" = i64, Path, description = "ID of the group to delete")),
    responses(
        (status = 204, description = "Group and its expenses deleted"),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_group(
    State(service): State<Arc<AppService>>,
    Path(group_id): Path<GroupId>,
) -> Result<StatusCode, ApiError> {
    service.delete_group(group_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}/expenses",
    params(("group_id" = i64, Path, description = "ID of the group")),
    responses(
        (status = 200, description = "Expenses in recording order", body = Vec<Expense>),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn list_expenses(
    State(service): State<Arc<AppService>>,
    Path(group_id): Path<GroupId>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    Ok(Json(service.get_expenses(group_id).await?))
}

#[utoipa::path(
    post,
    path = "/groups/{group_id}/expenses",
    request_body = AddExpenseRequest,
    params(("group_id" = i64, Path, description = "ID of the group")),
    responses(
        (status = 200, description = "Expense recorded", body = Expense),
        (status = 400, description = "Invalid amount, payer or split", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn add_expense(
    State(service): State<Arc<AppService>>,
    Path(group_id): Path<GroupId>,
    Json(req): Json<AddExpenseRequest>,
) -> Result<Json<Expense>, ApiError> {
    Ok(Json(service.record_expense(group_id, req.into()).await?))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}/balances",
    params(("group_id" = i64, Path, description = "ID of the group")),
    responses(
        (status = 200, description = "Net balance of every member", body = GroupBalancesResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group_balances(
    State(service): State<Arc<AppService>>,
    Path(group_id): Path<GroupId>,
) -> Result<Json<GroupBalancesResponse>, ApiError> {
    Ok(Json(service.group_balances(group_id).await?))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}/settle",
    params(("group_id" = i64, Path, description = "ID of the group")),
    responses(
        (status = 200, description = "Payments that zero every balance", body = GroupSettlementsResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Balances do not sum to zero", body = ErrorResponse)
    )
)]
pub(crate) async fn settle_group(
    State(service): State<Arc<AppService>>,
    Path(group_id): Path<GroupId>,
) -> Result<Json<GroupSettlementsResponse>, ApiError> {
    Ok(Json(service.settle_group(group_id).await?))
}

#[utoipa::path(
    get,
    path = "/logs",
    responses((status = 200, description = "Audit trail of mutating actions", body = Vec<AppLog>))
)]
pub(crate) async fn get_app_logs(State(service): State<Arc<AppService>>) -> Result<Json<Vec<AppLog>>, ApiError> {
    Ok(Json(service.get_app_logs().await?))
}
