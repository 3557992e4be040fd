//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Salary that pays a bill, stored as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum PaymentSource {
    #[sea_orm(num_value = 1)]
    Salary1,
    #[sea_orm(num_value = 2)]
    Salary2,
}
