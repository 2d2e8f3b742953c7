//! Shared test utilities for `BudgetWatch`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::core::goals::{self, GoalInput};
use crate::core::transaction::record_transaction;
use crate::entities::{Category, transaction};
use crate::errors::Result;

/// Creates an in-memory `SQLite` database with all tables and indexes
/// initialized. This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Sets a single category goal for a user.
pub async fn set_test_goal(
    db: &DatabaseConnection,
    user_id: &str,
    category: Category,
    goal: f64,
) -> Result<()> {
    goals::set_category_goals(db, user_id, &[GoalInput { category, goal }]).await
}

/// Records an expense of the given magnitude, dated now.
///
/// `spent` is the positive amount spent; the stored transaction amount is
/// its negation. The alert pipeline runs as it would in production.
pub async fn record_test_expense(
    db: &DatabaseConnection,
    user_id: &str,
    category: Category,
    spent: f64,
) -> Result<transaction::Model> {
    record_transaction(
        db,
        user_id,
        "Test expense".to_string(),
        -spent,
        category,
        None,
    )
    .await
}

/// Records an income transaction (positive amount), dated now.
pub async fn record_test_income(
    db: &DatabaseConnection,
    user_id: &str,
    category: Category,
    amount: f64,
) -> Result<transaction::Model> {
    record_transaction(
        db,
        user_id,
        "Test income".to_string(),
        amount,
        category,
        None,
    )
    .await
}

/// Records an expense with an explicit timestamp, for month-scoping tests.
pub async fn record_dated_expense(
    db: &DatabaseConnection,
    user_id: &str,
    category: Category,
    spent: f64,
    date: NaiveDateTime,
) -> Result<transaction::Model> {
    record_transaction(
        db,
        user_id,
        "Dated expense".to_string(),
        -spent,
        category,
        Some(date),
    )
    .await
}
