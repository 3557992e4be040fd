//! Bill routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::AppState;
use crate::routes::errors::{
    app_error_response, cashflow_error_response, database_error, invalid_body_response,
};
use weekflow_core::PaymentSource;
use weekflow_db::{
    BillRepository,
    entities::bills,
    repositories::{BillError, CreateBillInput, UpdateBillInput},
};
use weekflow_shared::AppError;

/// Creates the bill routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bills", post(create_bill))
        .route("/bills/{id}", put(update_bill).delete(delete_bill))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a bill.
#[derive(Debug, Deserialize)]
pub struct CreateBillRequest {
    /// Owning budget ID.
    pub monthly_budget_id: Uuid,
    /// What the bill is for.
    pub description: String,
    /// Amount due.
    pub amount: Decimal,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    /// Paying salary code: 1 or 2.
    pub payment_source: PaymentSource,
}

/// Request body for updating a bill. Omitted fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateBillRequest {
    /// New description.
    pub description: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New due date.
    pub due_date: Option<NaiveDate>,
}

/// Response for a stored bill.
#[derive(Debug, Serialize)]
pub struct StoredBillResponse {
    /// Bill ID.
    pub id: Uuid,
    /// Owning budget ID.
    pub monthly_budget_id: Uuid,
    /// What the bill is for.
    pub description: String,
    /// Amount due.
    pub amount: String,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: String,
    /// Paying salary code: 1 or 2.
    pub payment_source: i32,
    /// Last update timestamp.
    pub updated_at: String,
}

impl From<bills::Model> for StoredBillResponse {
    fn from(model: bills::Model) -> Self {
        Self {
            id: model.id,
            monthly_budget_id: model.monthly_budget_id,
            description: model.description,
            amount: model.amount.to_string(),
            due_date: model.due_date.to_string(),
            payment_source: PaymentSource::from(model.payment_source).code(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/bills` - Add a bill to a monthly budget.
async fn create_bill(
    State(state): State<AppState>,
    payload: Result<Json<CreateBillRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body_response(&rejection),
    };

    let repo = BillRepository::new((*state.db).clone());
    let input = CreateBillInput {
        monthly_budget_id: payload.monthly_budget_id,
        description: payload.description,
        amount: payload.amount,
        due_date: payload.due_date,
        payment_source: payload.payment_source,
    };

    match repo.create(input).await {
        Ok(bill) => {
            info!(
                bill_id = %bill.id,
                budget_id = %bill.monthly_budget_id,
                "Bill created"
            );
            (StatusCode::CREATED, Json(StoredBillResponse::from(bill))).into_response()
        }
        Err(e) => map_bill_error(&e),
    }
}

/// PUT `/bills/{id}` - Partially update a bill.
async fn update_bill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateBillRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body_response(&rejection),
    };

    let repo = BillRepository::new((*state.db).clone());
    let input = UpdateBillInput {
        description: payload.description,
        amount: payload.amount,
        due_date: payload.due_date,
    };

    match repo.update(id, input).await {
        Ok(bill) => {
            info!(bill_id = %id, "Bill updated");
            (StatusCode::OK, Json(StoredBillResponse::from(bill))).into_response()
        }
        Err(e) => map_bill_error(&e),
    }
}

/// DELETE `/bills/{id}` - Remove a bill.
async fn delete_bill(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = BillRepository::new((*state.db).clone());

    match repo.delete(id).await {
        Ok(()) => {
            info!(bill_id = %id, "Bill deleted");
            (StatusCode::OK, Json(json!({ "id": id, "deleted": true }))).into_response()
        }
        Err(e) => map_bill_error(&e),
    }
}

/// Maps bill errors to HTTP responses.
fn map_bill_error(e: &BillError) -> Response {
    match e {
        BillError::NotFound(_) | BillError::BudgetNotFound(_) => {
            app_error_response(&AppError::NotFound(e.to_string()))
        }
        BillError::Validation(rule) => cashflow_error_response(rule),
        BillError::Database(db) => {
            error!(error = %db, "Bill query failed");
            database_error(db)
        }
    }
}
