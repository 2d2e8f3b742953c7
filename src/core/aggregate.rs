//! Spend aggregation - reduces the transaction ledger to per-category
//! monthly totals.
//!
//! Only negative amounts count toward spend; their absolute values are
//! summed. Income rows are excluded entirely, even when categorized, and so
//! are rows outside the month window. Categories with no matching expenses
//! are simply absent from the result; callers treat absence as zero spend.
//! Both functions are pure reads with no side effects.

use std::collections::HashMap;

use sea_orm::{FromQueryResult, QuerySelect, prelude::*};

use crate::core::month::MonthWindow;
use crate::entities::{Category, Transaction, transaction};
use crate::errors::Result;

#[derive(FromQueryResult)]
struct CategorySpendRow {
    category: Category,
    total: f64,
}

/// Totals the current spend per category for one user inside a month window.
///
/// The reduction happens in SQL: expenses (negative amounts) within the
/// window are grouped by category and summed. Sums come back negative and
/// are negated into absolute spend.
pub async fn spent_by_category(
    db: &DatabaseConnection,
    user_id: &str,
    window: &MonthWindow,
) -> Result<HashMap<Category, f64>> {
    let rows = Transaction::find()
        .select_only()
        .column(transaction::Column::Category)
        .column_as(transaction::Column::Amount.sum(), "total")
        .filter(transaction::Column::UserId.eq(user_id))
        .filter(transaction::Column::Amount.lt(0.0))
        .filter(transaction::Column::Date.between(window.start, window.end))
        .group_by(transaction::Column::Category)
        .into_model::<CategorySpendRow>()
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|row| (row.category, -row.total)).collect())
}

/// Totals the current spend for a single category, the variant the
/// post-expense pipeline uses so one transaction write never re-aggregates
/// the whole ledger.
pub async fn spent_for_category(
    db: &DatabaseConnection,
    user_id: &str,
    category: Category,
    window: &MonthWindow,
) -> Result<f64> {
    let total: Option<Option<f64>> = Transaction::find()
        .select_only()
        .column_as(transaction::Column::Amount.sum(), "total")
        .filter(transaction::Column::UserId.eq(user_id))
        .filter(transaction::Column::Category.eq(category))
        .filter(transaction::Column::Amount.lt(0.0))
        .filter(transaction::Column::Date.between(window.start, window.end))
        .into_tuple()
        .one(db)
        .await?;

    Ok(total.flatten().map_or(0.0, |sum| -sum))
}
