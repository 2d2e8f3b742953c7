//! Budget alert business logic - durable, deduplicated threshold
//! notifications.
//!
//! An alert is created at most once per (user, category, month, year,
//! alert type). Creation is a single conditional insert against the unique
//! index on that tuple, so two concurrent expense writes cannot both insert;
//! the loser of the race observes the conflict and resolves to "already
//! alerted". Once created, an alert keeps its snapshot values for the rest of
//! the month; the only mutation ever applied is marking it as read. A
//! category that crosses the warning threshold and later the exceeded
//! threshold in the same month produces two independent alert records.

use chrono::Local;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DbErr, QueryOrder, QuerySelect, Set, prelude::*};

use crate::core::evaluate::{self, ThresholdBreach};
use crate::core::month::MonthWindow;
use crate::core::{aggregate, goals};
use crate::entities::{BudgetAlert, Category, budget_alert};
use crate::errors::{Error, Result};

/// Maximum number of alerts returned by the notification-history query.
const ALERT_HISTORY_LIMIT: u64 = 50;

/// Inserts an alert unless its dedup tuple already exists.
///
/// This is the atomic "insert if absent": `ON CONFLICT DO NOTHING` against
/// the dedup index, not a read followed by a write. A conflicting insert
/// leaves the existing alert untouched and returns None.
async fn insert_if_absent(
    db: &DatabaseConnection,
    alert: budget_alert::ActiveModel,
) -> Result<Option<budget_alert::Model>> {
    let inserted = BudgetAlert::insert(alert)
        .on_conflict(
            OnConflict::columns([
                budget_alert::Column::UserId,
                budget_alert::Column::Category,
                budget_alert::Column::Month,
                budget_alert::Column::Year,
                budget_alert::Column::AlertType,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_with_returning(db)
        .await;

    match inserted {
        Ok(model) => Ok(Some(model)),
        // The tuple already fired this month; the existing snapshot stands
        Err(DbErr::RecordNotInserted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Evaluates a category's spend against its goal and persists an alert if a
/// threshold was crossed for the first time this month.
///
/// Returns the created alert, or None when no threshold is crossed or an
/// alert of the same type already exists for this month.
pub async fn generate_budget_alert(
    db: &DatabaseConnection,
    user_id: &str,
    category: Category,
    budget_goal: f64,
    current_spent: f64,
    window: &MonthWindow,
) -> Result<Option<budget_alert::Model>> {
    let Some(breach) = evaluate::evaluate_threshold(category, budget_goal, current_spent) else {
        return Ok(None);
    };

    let ThresholdBreach { alert_type, percentage, message } = breach;

    let alert = budget_alert::ActiveModel {
        user_id: Set(user_id.to_string()),
        category: Set(category),
        budget_goal: Set(budget_goal),
        current_spent: Set(current_spent),
        percentage: Set(percentage),
        alert_type: Set(alert_type),
        message: Set(message),
        is_read: Set(false),
        month: Set(window.key()),
        year: Set(window.year),
        created_at: Set(Local::now().naive_local()),
        ..Default::default()
    };

    insert_if_absent(db, alert).await
}

/// Runs the alert pipeline for a single category after an expense write.
///
/// Looks up the category's goal (no goal, or a zero goal, means nothing to
/// evaluate), aggregates the current month's spend for that category only,
/// and persists an alert if a threshold was crossed. The caller decides what
/// to do with errors; the ledger write path logs and swallows them.
pub async fn check_budget_after_expense(
    db: &DatabaseConnection,
    user_id: &str,
    category: Category,
) -> Result<Option<budget_alert::Model>> {
    let Some(goal) = goals::get_goal_for_category(db, user_id, category).await? else {
        return Ok(None);
    };

    if goal.goal <= 0.0 {
        return Ok(None);
    }

    let window = MonthWindow::current();
    let spent = aggregate::spent_for_category(db, user_id, category, &window).await?;

    generate_budget_alert(db, user_id, category, goal.goal, spent, &window).await
}

/// Retrieves a user's alerts, newest first, optionally filtered by read
/// state, capped at the notification-history limit.
pub async fn get_budget_alerts(
    db: &DatabaseConnection,
    user_id: &str,
    is_read: Option<bool>,
) -> Result<Vec<budget_alert::Model>> {
    let mut query = BudgetAlert::find().filter(budget_alert::Column::UserId.eq(user_id));

    if let Some(read_state) = is_read {
        query = query.filter(budget_alert::Column::IsRead.eq(read_state));
    }

    query
        .order_by_desc(budget_alert::Column::CreatedAt)
        .limit(ALERT_HISTORY_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the persisted alerts for one month window, for the tracking
/// response's notification section.
pub async fn get_alerts_for_month(
    db: &DatabaseConnection,
    user_id: &str,
    window: &MonthWindow,
) -> Result<Vec<budget_alert::Model>> {
    BudgetAlert::find()
        .filter(budget_alert::Column::UserId.eq(user_id))
        .filter(budget_alert::Column::Month.eq(window.key()))
        .filter(budget_alert::Column::Year.eq(window.year))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Marks one of the user's alerts as read.
///
/// The lookup is scoped by owner: an id belonging to another user fails with
/// [`Error::AlertNotFound`] exactly like a missing id, so alert ids leak
/// nothing across users.
pub async fn mark_alert_as_read(
    db: &DatabaseConnection,
    user_id: &str,
    alert_id: i64,
) -> Result<budget_alert::Model> {
    let alert = BudgetAlert::find_by_id(alert_id)
        .filter(budget_alert::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or(Error::AlertNotFound { id: alert_id })?;

    let mut alert: budget_alert::ActiveModel = alert.into();
    alert.is_read = Set(true);
    alert.update(db).await.map_err(Into::into)
}
