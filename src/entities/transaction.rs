//! Transaction entity - the ledger of signed monetary amounts.
//!
//! Each transaction has a `user_id`, amount (negative for expenses, positive
//! for income), a [`Category`](super::category::Category), and a calendar
//! timestamp used for month bucketing. Only negative amounts inside the
//! current month window contribute to budget tracking.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user; every query is scoped by this
    pub user_id: String,
    /// Human-readable description of the transaction
    pub description: String,
    /// Transaction amount (positive for income, negative for expenses)
    pub amount: f64,
    /// Spending category
    pub category: Category,
    /// Calendar timestamp used for month bucketing
    pub date: DateTime,
}

/// Transactions stand alone; goals and alerts are correlated by category
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
