//! Transaction recording - the ledger write that feeds budget tracking.
//!
//! Recording an expense triggers the alert pipeline for the affected
//! category only; the rest of the ledger is never re-aggregated on a single
//! write. The pipeline is a best-effort side channel: its failure is logged
//! and swallowed so the ledger write itself always succeeds or fails on its
//! own terms.

use chrono::{Local, NaiveDateTime};
use sea_orm::{Set, prelude::*};
use tracing::warn;

use crate::core::alerts;
use crate::entities::{Category, transaction};
use crate::errors::{Error, Result};

/// Records a transaction and, for expenses, runs the budget alert pipeline
/// for the transaction's category.
///
/// The amount must be non-zero and finite; negative amounts are expenses,
/// positive amounts income. When no date is given the transaction lands at
/// the server-local current time. Alert generation errors do not propagate:
/// the returned model reflects the ledger write alone.
pub async fn record_transaction(
    db: &DatabaseConnection,
    user_id: &str,
    description: String,
    amount: f64,
    category: Category,
    date: Option<NaiveDateTime>,
) -> Result<transaction::Model> {
    if amount == 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    if !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }

    let transaction = transaction::ActiveModel {
        user_id: Set(user_id.to_string()),
        description: Set(description),
        amount: Set(amount),
        category: Set(category),
        date: Set(date.unwrap_or_else(|| Local::now().naive_local())),
        ..Default::default()
    };

    let saved = transaction.insert(db).await?;

    // Best-effort side channel: the ledger write must succeed even when the
    // alert subsystem cannot
    if saved.amount < 0.0 {
        if let Err(err) = alerts::check_budget_after_expense(db, user_id, saved.category).await {
            warn!("Failed to generate budget alert for {}: {}", saved.category, err);
        }
    }

    Ok(saved)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::alerts::get_budget_alerts;
    use crate::entities::AlertType;
    use crate::test_utils::{set_test_goal, setup_test_db};
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn test_record_transaction_validation() -> Result<()> {
        let db = setup_test_db().await?;

        // Zero amount
        let result = record_transaction(
            &db,
            "user123",
            "test".to_string(),
            0.0,
            Category::Food,
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { amount: 0.0 }));

        // NaN
        let result = record_transaction(
            &db,
            "user123",
            "test".to_string(),
            f64::NAN,
            Category::Food,
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { amount: _ }));

        // Infinity
        let result = record_transaction(
            &db,
            "user123",
            "test".to_string(),
            f64::INFINITY,
            Category::Food,
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { amount: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_record_transaction_persists_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let saved = record_transaction(
            &db,
            "user123",
            "Groceries".to_string(),
            -250.0,
            Category::Food,
            None,
        )
        .await?;

        assert_eq!(saved.user_id, "user123");
        assert_eq!(saved.description, "Groceries");
        assert_eq!(saved.amount, -250.0);
        assert_eq!(saved.category, Category::Food);

        Ok(())
    }

    #[tokio::test]
    async fn test_expense_crossing_threshold_creates_alert() -> Result<()> {
        let db = setup_test_db().await?;

        set_test_goal(&db, "user123", Category::Food, 1000.0).await?;
        record_transaction(
            &db,
            "user123",
            "Groceries".to_string(),
            -850.0,
            Category::Food,
            None,
        )
        .await?;

        let alerts = get_budget_alerts(&db, "user123", None).await?;
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].alert_type, AlertType::Warning);
        assert_eq!(alerts[0].current_spent, 850.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_income_never_triggers_alerts() -> Result<()> {
        let db = setup_test_db().await?;

        set_test_goal(&db, "user123", Category::Food, 100.0).await?;
        record_transaction(
            &db,
            "user123",
            "Refund".to_string(),
            500.0,
            Category::Food,
            None,
        )
        .await?;

        let alerts = get_budget_alerts(&db, "user123", None).await?;
        assert!(alerts.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_warning_then_exceeded_across_writes() -> Result<()> {
        let db = setup_test_db().await?;

        set_test_goal(&db, "user123", Category::Food, 1000.0).await?;
        record_transaction(&db, "user123", "a".to_string(), -850.0, Category::Food, None).await?;
        record_transaction(&db, "user123", "b".to_string(), -300.0, Category::Food, None).await?;

        let alerts = get_budget_alerts(&db, "user123", None).await?;
        assert_eq!(alerts.len(), 2);

        let types: Vec<AlertType> = alerts.iter().map(|a| a.alert_type).collect();
        assert!(types.contains(&AlertType::Warning));
        assert!(types.contains(&AlertType::Exceeded));

        Ok(())
    }

    #[tokio::test]
    async fn test_alert_failure_does_not_fail_the_ledger_write() -> Result<()> {
        let db = setup_test_db().await?;

        set_test_goal(&db, "user123", Category::Food, 1000.0).await?;

        // Break the alert store; the ledger write must still succeed
        db.execute_unprepared("DROP TABLE budget_alerts").await?;

        let saved = record_transaction(
            &db,
            "user123",
            "Groceries".to_string(),
            -900.0,
            Category::Food,
            None,
        )
        .await?;
        assert_eq!(saved.amount, -900.0);

        Ok(())
    }
}
