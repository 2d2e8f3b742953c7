//! Spending category - the closed set of classifications a transaction or
//! budget goal can carry.
//!
//! Categories are a fixed enumeration rather than free-form strings so that a
//! typo cannot silently create a goal that never matches any transaction.
//! The enum is stored in the database as its display string.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The fixed set of spending categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    /// Groceries and dining
    #[sea_orm(string_value = "Food")]
    Food,
    /// Movies, games, subscriptions
    #[sea_orm(string_value = "Entertainment")]
    Entertainment,
    /// Trips and holidays
    #[sea_orm(string_value = "Travel")]
    Travel,
    /// Retail purchases
    #[sea_orm(string_value = "Shopping")]
    Shopping,
    /// Housing rent
    #[sea_orm(string_value = "Rent")]
    Rent,
    /// Electricity, water, internet
    #[sea_orm(string_value = "Utilities")]
    Utilities,
    /// Medical and pharmacy
    #[sea_orm(string_value = "Healthcare")]
    Healthcare,
    /// Commute and fuel
    #[sea_orm(string_value = "Transportation")]
    Transportation,
    /// Tuition, courses, books
    #[sea_orm(string_value = "Education")]
    Education,
    /// Transfers into savings
    #[sea_orm(string_value = "Savings")]
    Savings,
    /// Anything that fits nowhere else
    #[sea_orm(string_value = "Others")]
    Others,
    /// Salary and other incoming funds
    #[sea_orm(string_value = "Income")]
    Income,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
