//! JSON error responses shared by the route modules.
//!
//! Every error body has the shape `{"error": "<code>", "message": "..."}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use weekflow_core::{CalendarError, CashFlowError};
use weekflow_shared::AppError;

/// Builds an error response with the given status and code.
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into()
        })),
    )
        .into_response()
}

/// Converts an application error into its HTTP response.
///
/// Server-side details are never returned; callers log them.
pub fn app_error_response(e: &AppError) -> Response {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if e.is_server_error() {
        return error_response(status, e.error_code(), "An error occurred");
    }

    let message = match e {
        AppError::NotFound(m)
        | AppError::Conflict(m)
        | AppError::Database(m)
        | AppError::Internal(m) => m.clone(),
    };
    error_response(status, e.error_code(), message)
}

/// Converts a storage failure into a 500.
pub fn database_error(e: &impl std::fmt::Display) -> Response {
    app_error_response(&AppError::Database(e.to_string()))
}

/// Machine-readable code for a rejected business rule.
#[must_use]
pub const fn cashflow_error_code(e: &CashFlowError) -> &'static str {
    match e {
        CashFlowError::Calendar(CalendarError::InvalidMonth(_)) => "invalid_month",
        CashFlowError::Calendar(CalendarError::YearOutOfRange(_)) => "invalid_year",
        CashFlowError::UnknownPaymentSource(_) => "invalid_payment_source",
        CashFlowError::NegativeAmount(_) => "negative_amount",
        CashFlowError::AmountOutOfRange(_) => "amount_out_of_range",
        CashFlowError::EmptyDescription => "empty_description",
        CashFlowError::DescriptionTooLong { .. } => "description_too_long",
        CashFlowError::DueDateOutsideMonth { .. } => "due_date_outside_month",
    }
}

/// Converts a rejected business rule into a 400 response.
pub fn cashflow_error_response(e: &CashFlowError) -> Response {
    error_response(StatusCode::BAD_REQUEST, cashflow_error_code(e), e.to_string())
}

/// Converts a body that failed to parse into a 400 response.
pub fn invalid_body_response(rejection: &JsonRejection) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        "invalid_request",
        rejection.body_text(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case(CashFlowError::Calendar(CalendarError::InvalidMonth(13)), "invalid_month")]
    #[case(CashFlowError::Calendar(CalendarError::YearOutOfRange(i32::MAX)), "invalid_year")]
    #[case(CashFlowError::UnknownPaymentSource(3), "invalid_payment_source")]
    #[case(CashFlowError::NegativeAmount(Decimal::NEGATIVE_ONE), "negative_amount")]
    #[case(CashFlowError::AmountOutOfRange(Decimal::new(5, 3)), "amount_out_of_range")]
    #[case(CashFlowError::EmptyDescription, "empty_description")]
    #[case(CashFlowError::DescriptionTooLong { max: 200 }, "description_too_long")]
    fn test_cashflow_error_codes(#[case] error: CashFlowError, #[case] expected: &str) {
        assert_eq!(cashflow_error_code(&error), expected);
    }

    #[test]
    fn test_due_date_error_code() {
        let error = CashFlowError::DueDateOutsideMonth {
            due_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            year: 2024,
            month: 3,
        };
        assert_eq!(cashflow_error_code(&error), "due_date_outside_month");
    }

    #[test]
    fn test_app_error_status() {
        let response = app_error_response(&AppError::NotFound("Bill not found".into()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app_error_response(&AppError::Database("connection reset".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
