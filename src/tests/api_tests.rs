use crate::api::handlers::{add_expense, create_group, create_user, get_group_balances, settle_group};
use crate::api::models::{AddExpenseRequest, ApiError, CreateGroupRequest, CreateUserRequest};
use crate::core::errors::SplitwiseError;
use crate::core::models::Money;
use crate::tests::create_test_service;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};
use std::sync::Arc;

async fn error_body(err: SplitwiseError) -> (StatusCode, Value) {
    let response = ApiError(err).into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_error_mapping() {
    let (status, body) = error_body(SplitwiseError::InvalidSplit("percentages must sum to 100".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, body) = error_body(SplitwiseError::GroupNotFound(3)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Group 3 not found");

    let (status, body) = error_body(SplitwiseError::UserNameTaken("Alice".to_string())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    let (status, body) = error_body(SplitwiseError::InconsistentLedger {
        group_id: 1,
        imbalance: Money::from_cents(-5),
    })
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "inconsistent_ledger");
    assert_eq!(body["message"], "Ledger for group 1 does not balance: off by -0.05");
}

#[tokio::test]
async fn test_expense_flow_through_handlers() {
    let service = Arc::new(create_test_service());
    let mut ids = Vec::new();
    for name in ["Alice", "Bob", "Carol"] {
        let (status, Json(user)) = create_user(
            State(service.clone()),
            Json(CreateUserRequest { name: name.to_string() }),
        )
        .await
        .map_err(|e| e.0)
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        ids.push(user.id);
    }

    let Json(group) = create_group(
        State(service.clone()),
        Json(CreateGroupRequest {
            name: "Trip".to_string(),
            user_ids: ids.clone(),
        }),
    )
    .await
    .map_err(|e| e.0)
    .unwrap();

    let req: AddExpenseRequest = serde_json::from_value(json!({
        "description": "Groceries",
        "amount": 100.0,
        "paid_by": ids[0],
        "split_type": "percentage",
        "splits": [
            { "user_id": ids[0], "amount": 0, "percentage": 50 },
            { "user_id": ids[1], "amount": 0, "percentage": 30 },
            { "user_id": ids[2], "amount": 0, "percentage": 20 }
        ]
    }))
    .unwrap();
    let Json(expense) = add_expense(State(service.clone()), Path(group.id), Json(req))
        .await
        .map_err(|e| e.0)
        .unwrap();
    let expense_json = serde_json::to_value(&expense).unwrap();
    assert_eq!(expense_json["split_type"], "percentage");
    assert_eq!(expense_json["amount"], 100.0);
    assert_eq!(expense_json["splits"][2]["amount"], 20.0);

    let req: AddExpenseRequest = serde_json::from_value(json!({
        "description": "Taxi",
        "amount": 30.0,
        "paid_by": ids[1],
        "split_type": "equal"
    }))
    .unwrap();
    let Json(taxi) = add_expense(State(service.clone()), Path(group.id), Json(req))
        .await
        .map_err(|e| e.0)
        .unwrap();
    assert_eq!(taxi.splits.len(), 3);
    assert!(taxi.splits.iter().all(|s| s.amount == Money::from_cents(1000)));

    let Json(balances) = get_group_balances(State(service.clone()), Path(group.id))
        .await
        .map_err(|e| e.0)
        .unwrap();
    let balances_json = serde_json::to_value(&balances).unwrap();
    assert_eq!(balances_json["balances"][0]["balance"], 40.0);
    assert_eq!(balances_json["balances"][1]["balance"], -10.0);
    assert_eq!(balances_json["balances"][2]["balance"], -30.0);

    let Json(plan) = settle_group(State(service.clone()), Path(group.id))
        .await
        .map_err(|e| e.0)
        .unwrap();
    let plan_json = serde_json::to_value(&plan).unwrap();
    assert_eq!(
        plan_json["settlements"],
        json!([
            { "from_user_id": ids[2], "from_user_name": "Carol", "to_user_id": ids[0], "to_user_name": "Alice", "amount": 30.0 },
            { "from_user_id": ids[1], "from_user_name": "Bob", "to_user_id": ids[0], "to_user_name": "Alice", "amount": 10.0 }
        ])
    );
}

#[tokio::test]
async fn test_add_expense_handler_rejects_bad_percentages() {
    let service = Arc::new(create_test_service());
    let alice = service.add_user("Alice".to_string()).await.unwrap();
    let group = service.create_group("Solo".to_string(), vec![alice.id]).await.unwrap();

    let req: AddExpenseRequest = serde_json::from_value(json!({
        "description": "Books",
        "amount": 10.0,
        "paid_by": alice.id,
        "split_type": "percentage",
        "splits": [{ "user_id": alice.id, "percentage": 99.5 }]
    }))
    .unwrap();
    let response = match add_expense(State(service.clone()), Path(group.id), Json(req)).await {
        Ok(_) => panic!("expense should be rejected"),
        Err(err) => err.into_response(),
    };
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
