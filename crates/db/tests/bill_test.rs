//! Integration tests for Bill repository.

mod common;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;
use weekflow_core::{CashFlowError, PaymentSource};
use weekflow_db::{
    BillRepository, MonthlyBudgetRepository,
    entities::sea_orm_active_enums::PaymentSource as DbPaymentSource,
    repositories::{BillError, CreateBillInput, UpdateBillInput},
};

use common::setup_db;

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

async fn setup() -> (BillRepository, Uuid) {
    let db = setup_db().await;
    let budget = MonthlyBudgetRepository::new(db.clone())
        .create(2024, 3)
        .await
        .expect("Failed to create budget");
    (BillRepository::new(db), budget.id)
}

fn rent(budget_id: Uuid) -> CreateBillInput {
    CreateBillInput {
        monthly_budget_id: budget_id,
        description: "Rent".to_string(),
        amount: dec!(950),
        due_date: march(1),
        payment_source: PaymentSource::Salary1,
    }
}

#[tokio::test]
async fn test_create_bill() {
    let (repo, budget_id) = setup().await;

    let bill = repo.create(rent(budget_id)).await.expect("Failed to create bill");
    assert_eq!(bill.monthly_budget_id, budget_id);
    assert_eq!(bill.description, "Rent");
    assert_eq!(bill.amount, dec!(950));
    assert_eq!(bill.due_date, march(1));
    assert_eq!(bill.payment_source, DbPaymentSource::Salary1);
    assert_eq!(bill.id.get_version_num(), 7);

    let found = repo.find_by_id(bill.id).await.unwrap().expect("Bill should exist");
    assert_eq!(found.id, bill.id);
}

#[tokio::test]
async fn test_create_bill_unknown_budget() {
    let (repo, _) = setup().await;

    let missing = Uuid::new_v4();
    let result = repo.create(rent(missing)).await;
    match result {
        Err(BillError::BudgetNotFound(id)) => assert_eq!(id, missing),
        other => panic!("Expected BudgetNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_bill_rejects_invalid_input() {
    let (repo, budget_id) = setup().await;

    let outside = CreateBillInput {
        due_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        ..rent(budget_id)
    };
    assert!(matches!(
        repo.create(outside).await,
        Err(BillError::Validation(CashFlowError::DueDateOutsideMonth { .. }))
    ));

    let negative = CreateBillInput {
        amount: dec!(-5),
        ..rent(budget_id)
    };
    assert!(matches!(
        repo.create(negative).await,
        Err(BillError::Validation(CashFlowError::NegativeAmount(_)))
    ));

    let sub_cent = CreateBillInput {
        amount: dec!(12.345),
        ..rent(budget_id)
    };
    assert!(matches!(
        repo.create(sub_cent).await,
        Err(BillError::Validation(CashFlowError::AmountOutOfRange(_)))
    ));

    let blank = CreateBillInput {
        description: "   ".to_string(),
        ..rent(budget_id)
    };
    assert!(matches!(
        repo.create(blank).await,
        Err(BillError::Validation(CashFlowError::EmptyDescription))
    ));

    assert!(repo.list_for_budget(budget_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_zero_amount_allowed() {
    let (repo, budget_id) = setup().await;

    let free = CreateBillInput {
        amount: dec!(0),
        ..rent(budget_id)
    };
    assert!(repo.create(free).await.is_ok());
}

#[tokio::test]
async fn test_list_for_budget_ordered_by_due_date() {
    let (repo, budget_id) = setup().await;

    for (day, source) in [
        (20, PaymentSource::Salary2),
        (3, PaymentSource::Salary1),
        (11, PaymentSource::Salary1),
    ] {
        repo.create(CreateBillInput {
            description: format!("Bill {day}"),
            due_date: march(day),
            payment_source: source,
            ..rent(budget_id)
        })
        .await
        .unwrap();
    }

    let dates: Vec<NaiveDate> = repo
        .list_for_budget(budget_id)
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.due_date)
        .collect();
    assert_eq!(dates, vec![march(3), march(11), march(20)]);
}

#[tokio::test]
async fn test_partial_update() {
    let (repo, budget_id) = setup().await;
    let bill = repo.create(rent(budget_id)).await.unwrap();

    let updated = repo
        .update(
            bill.id,
            UpdateBillInput {
                amount: Some(dec!(1000)),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update bill");
    assert_eq!(updated.amount, dec!(1000));
    assert_eq!(updated.description, "Rent");
    assert_eq!(updated.due_date, march(1));

    let moved = repo
        .update(
            bill.id,
            UpdateBillInput {
                description: Some("Rent (late)".to_string()),
                due_date: Some(march(31)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.description, "Rent (late)");
    assert_eq!(moved.due_date, march(31));
    assert_eq!(moved.amount, dec!(1000));
}

#[tokio::test]
async fn test_update_rejects_date_outside_month() {
    let (repo, budget_id) = setup().await;
    let bill = repo.create(rent(budget_id)).await.unwrap();

    let result = repo
        .update(
            bill.id,
            UpdateBillInput {
                due_date: Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(BillError::Validation(CashFlowError::DueDateOutsideMonth { .. }))
    ));

    let unchanged = repo.find_by_id(bill.id).await.unwrap().unwrap();
    assert_eq!(unchanged.due_date, march(1));
}

#[tokio::test]
async fn test_update_missing_bill() {
    let (repo, _) = setup().await;

    let result = repo.update(Uuid::new_v4(), UpdateBillInput::default()).await;
    assert!(matches!(result, Err(BillError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_bill() {
    let (repo, budget_id) = setup().await;
    let bill = repo.create(rent(budget_id)).await.unwrap();

    repo.delete(bill.id).await.expect("Failed to delete bill");
    assert!(repo.find_by_id(bill.id).await.unwrap().is_none());

    let again = repo.delete(bill.id).await;
    assert!(matches!(again, Err(BillError::NotFound(_))));
}
