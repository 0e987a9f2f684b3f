//! Productivity log repository implementation using SQLite
//!
//! Dates are stored as `YYYY-MM-DD` text so the `UNIQUE(user_id, date)`
//! constraint can arbitrate concurrent upserts for the same day.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use focusflow_core::analytics::ports::{DailySnapshot, LogRepository as LogRepositoryPort};
use focusflow_domain::{ProductivityLog, Result as DomainResult};
use rusqlite::{params, Row};
use tokio::task;
use uuid::Uuid;

use super::manager::DbManager;
use super::{map_join_error, map_sql_error};

const LOG_COLUMNS: &str = "id, user_id, date, tasks_completed, focus_minutes, \
                           habit_streak_bonus, score, created_at, updated_at";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-backed implementation of `LogRepository`
pub struct SqliteLogRepository {
    db: Arc<DbManager>,
}

impl SqliteLogRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogRepositoryPort for SqliteLogRepository {
    async fn find_for_user_and_day(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Option<ProductivityLog>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let date = date.format(DATE_FORMAT).to_string();

        task::spawn_blocking(move || -> DomainResult<Option<ProductivityLog>> {
            let conn = db.get_connection()?;
            let result = conn.query_row(
                &format!(
                    "SELECT {LOG_COLUMNS} FROM productivity_logs WHERE user_id = ?1 AND date = ?2"
                ),
                params![&user_id, &date],
                map_log_row,
            );
            match result {
                Ok(log) => Ok(Some(log)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn upsert_for_user_and_day(
        &self,
        user_id: &str,
        date: NaiveDate,
        snapshot: DailySnapshot,
    ) -> DomainResult<ProductivityLog> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let date = date.format(DATE_FORMAT).to_string();

        task::spawn_blocking(move || -> DomainResult<ProductivityLog> {
            let conn = db.get_connection()?;
            let now = Utc::now().timestamp();
            let id = Uuid::new_v4().to_string();

            // Single statement so the unique key decides who wins a race;
            // id and created_at survive from the first insert.
            conn.execute(
                "INSERT INTO productivity_logs
                     (id, user_id, date, tasks_completed, focus_minutes, habit_streak_bonus,
                      score, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
                 ON CONFLICT(user_id, date) DO UPDATE SET
                     tasks_completed = excluded.tasks_completed,
                     focus_minutes = excluded.focus_minutes,
                     habit_streak_bonus = excluded.habit_streak_bonus,
                     score = excluded.score,
                     updated_at = excluded.updated_at",
                params![
                    &id,
                    &user_id,
                    &date,
                    snapshot.tasks_completed,
                    snapshot.focus_minutes,
                    snapshot.habit_streak_bonus,
                    snapshot.score,
                    now,
                ],
            )
            .map_err(map_sql_error)?;

            conn.query_row(
                &format!(
                    "SELECT {LOG_COLUMNS} FROM productivity_logs WHERE user_id = ?1 AND date = ?2"
                ),
                params![&user_id, &date],
                map_log_row,
            )
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_for_user_in_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<ProductivityLog>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let from = from.format(DATE_FORMAT).to_string();
        let to = to.format(DATE_FORMAT).to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<ProductivityLog>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {LOG_COLUMNS} FROM productivity_logs
                     WHERE user_id = ?1 AND date >= ?2 AND date <= ?3
                     ORDER BY date ASC"
                ))
                .map_err(map_sql_error)?;
            let rows = stmt
                .query_map(params![&user_id, &from, &to], map_log_row)
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sql_error);
            rows
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_log_row(row: &Row<'_>) -> rusqlite::Result<ProductivityLog> {
    let date: String = row.get(2)?;
    let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(err))
    })?;
    Ok(ProductivityLog {
        id: row.get(0)?,
        user_id: row.get(1)?,
        date,
        tasks_completed: row.get(3)?,
        focus_minutes: row.get(4)?,
        habit_streak_bonus: row.get(5)?,
        score: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}
