//! Category goal business logic - setting and reading monthly ceilings.
//!
//! Goal writes are batch upserts against the (user, category) identity: a
//! batch containing any invalid entry is rejected whole, before anything is
//! written, and valid batches are applied inside a single database
//! transaction so a partial batch can never be observed.

use sea_orm::sea_query::OnConflict;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

use crate::entities::{Category, CategoryGoal, category_goal};
use crate::errors::{Error, Result};

/// One (category, goal) pair in a goal-setting batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalInput {
    /// Category the ceiling applies to
    pub category: Category,
    /// Non-negative monthly ceiling
    pub goal: f64,
}

/// Upserts a batch of category goals for a user.
///
/// Every entry is validated first; a negative or non-finite goal anywhere in
/// the batch rejects the whole batch with no side effects. Valid entries are
/// then written with one upsert per category inside a single transaction,
/// overwriting any standing goal for the same category.
pub async fn set_category_goals(
    db: &DatabaseConnection,
    user_id: &str,
    goals: &[GoalInput],
) -> Result<()> {
    // Validate the whole batch before touching the store
    for entry in goals {
        if entry.goal < 0.0 {
            return Err(Error::InvalidGoal { amount: entry.goal });
        }

        if !entry.goal.is_finite() {
            return Err(Error::InvalidGoal { amount: entry.goal });
        }
    }

    let txn = db.begin().await?;

    for entry in goals {
        let goal = category_goal::ActiveModel {
            user_id: Set(user_id.to_string()),
            category: Set(entry.category),
            goal: Set(entry.goal),
            ..Default::default()
        };

        CategoryGoal::insert(goal)
            .on_conflict(
                OnConflict::columns([
                    category_goal::Column::UserId,
                    category_goal::Column::Category,
                ])
                .update_column(category_goal::Column::Goal)
                .to_owned(),
            )
            .exec(&txn)
            .await?;
    }

    txn.commit().await?;

    Ok(())
}

/// Retrieves all category goals for a user, ordered by category name.
pub async fn get_category_goals(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<category_goal::Model>> {
    CategoryGoal::find()
        .filter(category_goal::Column::UserId.eq(user_id))
        .order_by_asc(category_goal::Column::Category)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds the standing goal for one category, returning None when the user
/// has not set one.
pub async fn get_goal_for_category(
    db: &DatabaseConnection,
    user_id: &str,
    category: Category,
) -> Result<Option<category_goal::Model>> {
    CategoryGoal::find()
        .filter(category_goal::Column::UserId.eq(user_id))
        .filter(category_goal::Column::Category.eq(category))
        .one(db)
        .await
        .map_err(Into::into)
}
