//! Database configuration module for `BudgetWatch`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions via `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs. On top of the generated tables this
//! module creates the composite unique indexes the business rules depend on: one per
//! goal identity (`user_id`, `category`) and one per alert deduplication tuple
//! (`user_id`, `category`, `month`, `year`, `alert_type`). Alert creation relies on the
//! latter index for its conditional-insert semantics, so schema creation and alert
//! persistence must stay in sync.

use crate::entities::{budget_alert, category_goal, transaction, BudgetAlert, CategoryGoal, Transaction};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/budget_watch.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables and indexes from the entity definitions.
///
/// Alongside the tables this creates the unique indexes enforcing goal identity and
/// alert deduplication, plus the secondary indexes the common query paths use
/// (alerts by month, alerts by read state, transactions by user and date).
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let transaction_table = schema.create_table_from_entity(Transaction);
    let category_goal_table = schema.create_table_from_entity(CategoryGoal);
    let budget_alert_table = schema.create_table_from_entity(BudgetAlert);

    db.execute(builder.build(&transaction_table)).await?;
    db.execute(builder.build(&category_goal_table)).await?;
    db.execute(builder.build(&budget_alert_table)).await?;

    // One goal per (user, category); goal writes upsert against this index.
    let goal_identity = Index::create()
        .name("idx_category_goals_user_category")
        .table(CategoryGoal)
        .col(category_goal::Column::UserId)
        .col(category_goal::Column::Category)
        .unique()
        .to_owned();

    // At most one alert per (user, category, month, year, alert_type); alert
    // creation is a conditional insert against this index.
    let alert_identity = Index::create()
        .name("idx_budget_alerts_dedup")
        .table(BudgetAlert)
        .col(budget_alert::Column::UserId)
        .col(budget_alert::Column::Category)
        .col(budget_alert::Column::Month)
        .col(budget_alert::Column::Year)
        .col(budget_alert::Column::AlertType)
        .unique()
        .to_owned();

    let alerts_by_month = Index::create()
        .name("idx_budget_alerts_user_month_year")
        .table(BudgetAlert)
        .col(budget_alert::Column::UserId)
        .col(budget_alert::Column::Month)
        .col(budget_alert::Column::Year)
        .to_owned();

    let alerts_by_read_state = Index::create()
        .name("idx_budget_alerts_user_is_read")
        .table(BudgetAlert)
        .col(budget_alert::Column::UserId)
        .col(budget_alert::Column::IsRead)
        .to_owned();

    let transactions_by_user_date = Index::create()
        .name("idx_transactions_user_date")
        .table(Transaction)
        .col(transaction::Column::UserId)
        .col(transaction::Column::Date)
        .to_owned();

    db.execute(builder.build(&goal_identity)).await?;
    db.execute(builder.build(&alert_identity)).await?;
    db.execute(builder.build(&alerts_by_month)).await?;
    db.execute(builder.build(&alerts_by_read_state)).await?;
    db.execute(builder.build(&transactions_by_user_date)).await?;

    Ok(())
}
