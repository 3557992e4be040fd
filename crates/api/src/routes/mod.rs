//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod bills;
pub mod errors;
pub mod health;
pub mod monthly_budgets;


/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(monthly_budgets::routes())
        .merge(bills::routes())
}
