//! Monthly budget routes.
//!
//! A monthly budget holds the two salaries of one calendar month. Reading a
//! budget returns its bills together with the week-by-week cash-flow
//! projection of the month.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::AppState;
use crate::routes::errors::{
    app_error_response, cashflow_error_response, database_error, invalid_body_response,
};
use weekflow_core::{
    Bill, CashFlowProjector, PaymentSource, SourceSummary, WeeklyProjection,
    cashflow::bills_by_source,
};
use weekflow_db::{
    MonthlyBudgetRepository, entities::monthly_budgets, repositories::MonthlyBudgetError,
};
use weekflow_shared::AppError;

/// Creates the monthly budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/monthly-budgets",
            get(list_monthly_budgets).post(create_monthly_budget),
        )
        .route(
            "/monthly-budgets/{id}",
            get(get_monthly_budget).delete(delete_monthly_budget),
        )
        .route("/monthly-budgets/{id}/salaries", put(set_salaries))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a monthly budget.
#[derive(Debug, Deserialize)]
pub struct CreateMonthlyBudgetRequest {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 to 12.
    pub month: u32,
}

/// Request body for setting both salaries.
#[derive(Debug, Deserialize)]
pub struct SetSalariesRequest {
    /// Salary deposited on day 5.
    pub salary1: Decimal,
    /// Salary deposited on day 20.
    pub salary2: Decimal,
}

/// Response for a monthly budget without its bills.
#[derive(Debug, Serialize)]
pub struct MonthlyBudgetResponse {
    /// Budget ID.
    pub id: Uuid,
    /// Calendar year.
    pub year: i32,
    /// Calendar month.
    pub month: i32,
    /// First salary.
    pub salary1: String,
    /// Second salary.
    pub salary2: String,
}

impl From<monthly_budgets::Model> for MonthlyBudgetResponse {
    fn from(model: monthly_budgets::Model) -> Self {
        Self {
            id: model.id,
            year: model.year,
            month: model.month,
            salary1: model.salary1.to_string(),
            salary2: model.salary2.to_string(),
        }
    }
}

/// Response for a bill inside a budget.
#[derive(Debug, Serialize)]
pub struct BillResponse {
    /// Bill ID.
    pub id: Uuid,
    /// What the bill is for.
    pub description: String,
    /// Amount due.
    pub amount: String,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: String,
    /// Paying salary code: 1 or 2.
    pub payment_source: i32,
}

impl From<&Bill> for BillResponse {
    fn from(bill: &Bill) -> Self {
        Self {
            id: bill.id.into_inner(),
            description: bill.description.clone(),
            amount: bill.amount.to_string(),
            due_date: bill.due_date.to_string(),
            payment_source: bill.payment_source.code(),
        }
    }
}

/// Bills split by the salary that pays them.
#[derive(Debug, Serialize)]
pub struct BillsBySourceResponse {
    /// Bills paid by the first salary.
    pub salary1: Vec<BillResponse>,
    /// Bills paid by the second salary.
    pub salary2: Vec<BillResponse>,
}

/// Totals for one payment source.
#[derive(Debug, Serialize)]
pub struct SourceSummaryResponse {
    /// Paying salary code: 1 or 2.
    pub payment_source: i32,
    /// Salary amount.
    pub salary: String,
    /// Sum of the bills paid by this salary.
    pub total_billed: String,
    /// Salary minus billed total, may be negative.
    pub remaining: String,
}

impl From<&SourceSummary> for SourceSummaryResponse {
    fn from(summary: &SourceSummary) -> Self {
        Self {
            payment_source: summary.payment_source.code(),
            salary: summary.salary.to_string(),
            total_billed: summary.total_billed.to_string(),
            remaining: summary.remaining.to_string(),
        }
    }
}

/// Per-source summaries.
#[derive(Debug, Serialize)]
pub struct SummariesResponse {
    /// First salary summary.
    pub salary1: SourceSummaryResponse,
    /// Second salary summary.
    pub salary2: SourceSummaryResponse,
}

/// Projection of one calendar week.
#[derive(Debug, Serialize)]
pub struct WeekResponse {
    /// Week ordinal within the month, starting at 1.
    pub week_index: u32,
    /// Days of the month in this week.
    pub days: Vec<u32>,
    /// Balance after deposits, before bills.
    pub opening_balance: String,
    /// Bills due this week.
    pub bills: Vec<BillResponse>,
    /// Sum of the bills due this week.
    pub total_due: String,
    /// Balance after bills, never negative.
    pub closing_balance: String,
    /// Balance handed to the next week, may be negative.
    pub carry_over: String,
    /// True when bills exceed the available balance.
    pub is_short: bool,
}

impl From<&WeeklyProjection> for WeekResponse {
    fn from(week: &WeeklyProjection) -> Self {
        Self {
            week_index: week.week_index,
            days: week.days.clone(),
            opening_balance: week.opening_balance.to_string(),
            bills: week.bills_due.iter().map(BillResponse::from).collect(),
            total_due: week.total_due.to_string(),
            closing_balance: week.closing_balance.to_string(),
            carry_over: week.carry_over.to_string(),
            is_short: week.is_short(),
        }
    }
}

/// Full budget view with bills, summaries, and weekly projection.
#[derive(Debug, Serialize)]
pub struct MonthlyBudgetDetailResponse {
    /// Budget ID.
    pub id: Uuid,
    /// Calendar year.
    pub year: i32,
    /// Calendar month.
    pub month: u32,
    /// First salary.
    pub salary1: String,
    /// Second salary.
    pub salary2: String,
    /// All bills, earliest due date first.
    pub bills: Vec<BillResponse>,
    /// Bills split by payment source.
    pub bills_by_source: BillsBySourceResponse,
    /// Per-source totals.
    pub summaries: SummariesResponse,
    /// One entry per calendar week of the month.
    pub weeks: Vec<WeekResponse>,
}

fn to_bill_responses(bills: &[Bill]) -> Vec<BillResponse> {
    bills.iter().map(BillResponse::from).collect()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/monthly-budgets` - List budgets, newest month first.
async fn list_monthly_budgets(State(state): State<AppState>) -> impl IntoResponse {
    let repo = MonthlyBudgetRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(budgets) => {
            let response: Vec<MonthlyBudgetResponse> =
                budgets.into_iter().map(MonthlyBudgetResponse::from).collect();
            (StatusCode::OK, Json(json!({ "monthly_budgets": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list monthly budgets");
            database_error(&e)
        }
    }
}

/// POST `/monthly-budgets` - Create an empty budget for a month.
async fn create_monthly_budget(
    State(state): State<AppState>,
    payload: Result<Json<CreateMonthlyBudgetRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body_response(&rejection),
    };

    let repo = MonthlyBudgetRepository::new((*state.db).clone());

    match repo.create(payload.year, payload.month).await {
        Ok(budget) => {
            info!(
                budget_id = %budget.id,
                year = budget.year,
                month = budget.month,
                "Monthly budget created"
            );
            (
                StatusCode::CREATED,
                Json(MonthlyBudgetResponse::from(budget)),
            )
                .into_response()
        }
        Err(e) => map_monthly_budget_error(&e),
    }
}

/// GET `/monthly-budgets/{id}` - Budget with bills and weekly projection.
async fn get_monthly_budget(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = MonthlyBudgetRepository::new((*state.db).clone());

    let loaded = match repo.get_with_bills(id).await {
        Ok(loaded) => loaded,
        Err(e) => return map_monthly_budget_error(&e),
    };

    let budget = loaded.to_domain();
    let projection = match CashFlowProjector::project_month(&budget) {
        Ok(projection) => projection,
        Err(e) => {
            // Stored months are validated on insert.
            error!(budget_id = %id, error = %e, "Stored budget cannot be projected");
            return app_error_response(&AppError::Internal(e.to_string()));
        }
    };

    let response = MonthlyBudgetDetailResponse {
        id,
        year: budget.year,
        month: budget.month,
        salary1: budget.salary1.to_string(),
        salary2: budget.salary2.to_string(),
        bills: to_bill_responses(&budget.bills),
        bills_by_source: BillsBySourceResponse {
            salary1: to_bill_responses(&bills_by_source(&budget.bills, PaymentSource::Salary1)),
            salary2: to_bill_responses(&bills_by_source(&budget.bills, PaymentSource::Salary2)),
        },
        summaries: SummariesResponse {
            salary1: SourceSummaryResponse::from(&projection.salary1),
            salary2: SourceSummaryResponse::from(&projection.salary2),
        },
        weeks: projection.weeks.iter().map(WeekResponse::from).collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// PUT `/monthly-budgets/{id}/salaries` - Set both salaries.
async fn set_salaries(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<SetSalariesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body_response(&rejection),
    };

    let repo = MonthlyBudgetRepository::new((*state.db).clone());

    match repo
        .set_salaries(id, payload.salary1, payload.salary2)
        .await
    {
        Ok(budget) => {
            info!(budget_id = %id, "Salaries updated");
            (StatusCode::OK, Json(MonthlyBudgetResponse::from(budget))).into_response()
        }
        Err(e) => map_monthly_budget_error(&e),
    }
}

/// DELETE `/monthly-budgets/{id}` - Delete a budget and its bills.
async fn delete_monthly_budget(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = MonthlyBudgetRepository::new((*state.db).clone());

    match repo.delete(id).await {
        Ok(()) => {
            info!(budget_id = %id, "Monthly budget deleted");
            (StatusCode::OK, Json(json!({ "id": id, "deleted": true }))).into_response()
        }
        Err(e) => map_monthly_budget_error(&e),
    }
}

/// Maps monthly budget errors to HTTP responses.
fn map_monthly_budget_error(e: &MonthlyBudgetError) -> Response {
    match e {
        MonthlyBudgetError::NotFound(_) => app_error_response(&AppError::NotFound(e.to_string())),
        MonthlyBudgetError::AlreadyExists(existing) => {
            let conflict = AppError::Conflict(e.to_string());
            (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": conflict.error_code(),
                    "message": "A monthly budget already exists for this month",
                    "monthly_budget_id": existing
                })),
            )
                .into_response()
        }
        MonthlyBudgetError::Validation(rule) => cashflow_error_response(rule),
        MonthlyBudgetError::Database(db) => {
            error!(error = %db, "Monthly budget query failed");
            database_error(db)
        }
    }
}
