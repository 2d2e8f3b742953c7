//! Tracking report business logic - the live goal-vs-spend dashboard view.
//!
//! The report recomputes alert state from current spend on every call, so it
//! always reflects the ledger as of now. Persisted [`budget_alert`] records
//! are the opposite: snapshots frozen when a threshold was first crossed.
//! Both views are built over the same aggregation primitive but must stay
//! separate code paths; the report also returns the month's persisted alerts
//! for the notification center, unmerged with the live rows.

use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::core::month::MonthWindow;
use crate::core::{aggregate, alerts, evaluate, goals};
use crate::entities::{AlertType, Category, budget_alert};
use crate::errors::Result;

/// Live tracking state for one category with a goal.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTracking {
    /// Category being tracked
    pub category: Category,
    /// The user's standing monthly ceiling
    pub budget_goal: f64,
    /// Spend aggregated from the ledger at call time
    pub current_spent: f64,
    /// Goal minus spend; negative when the budget is blown
    pub remaining: f64,
    /// Utilization percentage, clamped to 100 for display
    pub percentage: f64,
    /// Live-recomputed threshold state, None below the warning threshold
    pub alert_type: Option<AlertType>,
    /// Live-recomputed notification text matching `alert_type`
    pub message: Option<String>,
}

/// The consolidated budget tracking response for one user.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetTrackingReport {
    /// One row per category that has a goal defined
    pub budget_tracking: Vec<CategoryTracking>,
    /// Month bucket of the report in "YYYY-MM" form
    pub month: String,
    /// Calendar year of the report
    pub year: i32,
    /// Persisted alert records for this month (snapshots, not live state)
    pub alerts: Vec<budget_alert::Model>,
}

/// Builds the budget tracking report for the current month.
///
/// Categories without a goal are omitted entirely; a category with a goal
/// but no expenses appears with zero spend. Alert type and message on each
/// row are recomputed from current spend, independent of whatever alerts
/// were persisted earlier in the month.
pub async fn get_budget_tracking(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<BudgetTrackingReport> {
    let window = MonthWindow::current();

    let goals = goals::get_category_goals(db, user_id).await?;
    let spent_by_category = aggregate::spent_by_category(db, user_id, &window).await?;

    let budget_tracking = goals
        .into_iter()
        .map(|goal| {
            let spent = spent_by_category.get(&goal.category).copied().unwrap_or(0.0);
            let percentage = evaluate::utilization_percent(spent, goal.goal);
            let breach = evaluate::evaluate_threshold(goal.category, goal.goal, spent);

            let (alert_type, message) = match breach {
                Some(breach) => (Some(breach.alert_type), Some(breach.message)),
                None => (None, None),
            };

            CategoryTracking {
                category: goal.category,
                budget_goal: goal.goal,
                current_spent: spent,
                remaining: goal.goal - spent,
                percentage: percentage.min(100.0),
                alert_type,
                message,
            }
        })
        .collect();

    let alerts = alerts::get_alerts_for_month(db, user_id, &window).await?;

    Ok(BudgetTrackingReport {
        budget_tracking,
        month: window.key(),
        year: window.year,
        alerts,
    })
}
