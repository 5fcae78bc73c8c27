use utoipa::OpenApi;

use crate::{
    api::models::{AddExpenseRequest, CreateGroupRequest, CreateUserRequest, ErrorResponse},
    core::models::{
        AppLog, Balance, Expense, GroupBalancesResponse, GroupResponse, GroupSettlementsResponse, Settlement, Split,
        SplitSpec, SplitType, User, UserBalance, UserBalancesResponse,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::list_users,
        super::handlers::get_user,
        super::handlers::get_user_balances,
        super::handlers::create_group,
        super::handlers::list_groups,
        super::handlers::get_group,
        super::handlers::delete_group,
        super::handlers::list_expenses,
        super::handlers::add_expense,
        super::handlers::get_group_balances,
        super::handlers::settle_group,
        super::handlers::get_app_logs
    ),
    components(schemas(
        CreateUserRequest,
        CreateGroupRequest,
        AddExpenseRequest,
        ErrorResponse,
        User,
        GroupResponse,
        Expense,
        Split,
        SplitSpec,
        SplitType,
        Balance,
        UserBalance,
        GroupBalancesResponse,
        UserBalancesResponse,
        Settlement,
        GroupSettlementsResponse,
        AppLog
    )),
    info(
        title = "Splitwise API",
        description = "API for recording group expenses, deriving balances and suggesting settlements",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
