//! Category goal entity - a user's monthly spending ceiling per category.
//!
//! Identity is (`user_id`, `category`); writes are upserts against that pair,
//! so a user has at most one standing goal per category. Goals do not vary
//! month-to-month; the stored value is the current target.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Category goal database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category_goals")]
pub struct Model {
    /// Unique identifier for the goal row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: String,
    /// Category this ceiling applies to
    pub category: Category,
    /// Non-negative monthly spending ceiling
    pub goal: f64,
}

/// `CategoryGoal` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
