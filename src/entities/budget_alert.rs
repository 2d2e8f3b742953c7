//! Budget alert entity - a durable notification that spending crossed a
//! threshold.
//!
//! Identity for deduplication is (`user_id`, `category`, `month`, `year`,
//! `alert_type`); the store enforces it with a unique index so at most one
//! alert per tuple can ever exist. `budget_goal`, `current_spent`, and
//! `percentage` are snapshots taken when the threshold was first crossed and
//! are never updated afterwards; the only permitted mutation is marking the
//! alert as read.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Which threshold a budget alert signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AlertType {
    /// Spending reached 80% of the goal
    #[sea_orm(string_value = "WARNING")]
    Warning,
    /// Spending reached or passed 100% of the goal
    #[sea_orm(string_value = "EXCEEDED")]
    Exceeded,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// Budget alert database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_alerts")]
pub struct Model {
    /// Unique identifier for the alert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: String,
    /// Category whose budget was crossed
    pub category: Category,
    /// Goal ceiling at the time the alert was created
    pub budget_goal: f64,
    /// Spend total at the time the alert was created
    pub current_spent: f64,
    /// Utilization percentage at creation time, clamped to 100 for display
    pub percentage: f64,
    /// Which threshold was crossed
    pub alert_type: AlertType,
    /// Human-readable notification text
    pub message: String,
    /// Whether the user has seen this alert
    pub is_read: bool,
    /// Month bucket in "YYYY-MM" form
    pub month: String,
    /// Calendar year of the month bucket
    pub year: i32,
    /// When the alert was created; newest-first ordering key
    pub created_at: DateTime,
}

/// `BudgetAlert` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
