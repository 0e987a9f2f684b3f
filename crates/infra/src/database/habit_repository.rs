//! Habit repository implementation using SQLite
//!
//! Check-in history lives in the `habit_check_ins` child table; `update`
//! appends only the timestamps the stored history does not have yet.

use std::sync::Arc;

use async_trait::async_trait;
use focusflow_core::habits::ports::HabitRepository as HabitRepositoryPort;
use focusflow_domain::{Habit, Result as DomainResult};
use rusqlite::{params, Connection, Row};
use tokio::task;

use super::manager::DbManager;
use super::{bool_to_int, int_to_bool, map_join_error, map_sql_error};

const HABIT_COLUMNS: &str = "id, user_id, name, description, streak, longest_streak, \
                             last_completed_at, is_active, created_at, updated_at";

/// SQLite-backed implementation of `HabitRepository`
pub struct SqliteHabitRepository {
    db: Arc<DbManager>,
}

impl SqliteHabitRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HabitRepositoryPort for SqliteHabitRepository {
    async fn create(&self, habit: Habit) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO habits (id, user_id, name, description, streak, longest_streak,
                                     last_completed_at, is_active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    &habit.id,
                    &habit.user_id,
                    &habit.name,
                    &habit.description,
                    habit.streak,
                    habit.longest_streak,
                    habit.last_completed_at,
                    bool_to_int(habit.is_active),
                    habit.created_at,
                    habit.updated_at,
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_active_for_user(&self, user_id: &str) -> DomainResult<Vec<Habit>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<Habit>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {HABIT_COLUMNS} FROM habits
                     WHERE user_id = ?1 AND is_active = 1
                     ORDER BY created_at DESC"
                ))
                .map_err(map_sql_error)?;
            let rows = stmt
                .query_map(params![&user_id], map_habit_row)
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sql_error)?;

            let mut habits = Vec::with_capacity(rows.len());
            for mut habit in rows {
                habit.completed_dates = load_check_ins(&conn, &habit.id)?;
                habits.push(habit);
            }
            Ok(habits)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_id_for_user(
        &self,
        habit_id: &str,
        user_id: &str,
    ) -> DomainResult<Option<Habit>> {
        let db = Arc::clone(&self.db);
        let habit_id = habit_id.to_string();
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Habit>> {
            let conn = db.get_connection()?;
            let result = conn.query_row(
                &format!("SELECT {HABIT_COLUMNS} FROM habits WHERE id = ?1 AND user_id = ?2"),
                params![&habit_id, &user_id],
                map_habit_row,
            );
            match result {
                Ok(mut habit) => {
                    habit.completed_dates = load_check_ins(&conn, &habit.id)?;
                    Ok(Some(habit))
                }
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update(&self, habit: Habit) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;

            tx.execute(
                "UPDATE habits SET name = ?1, description = ?2, streak = ?3, longest_streak = ?4,
                                   last_completed_at = ?5, is_active = ?6, updated_at = ?7
                 WHERE id = ?8 AND user_id = ?9",
                params![
                    &habit.name,
                    &habit.description,
                    habit.streak,
                    habit.longest_streak,
                    habit.last_completed_at,
                    bool_to_int(habit.is_active),
                    habit.updated_at,
                    &habit.id,
                    &habit.user_id,
                ],
            )
            .map_err(map_sql_error)?;

            // History is append-only, so persist only the tail the table lacks.
            let stored: usize = tx
                .query_row(
                    "SELECT COUNT(*) FROM habit_check_ins WHERE habit_id = ?1",
                    params![&habit.id],
                    |row| row.get::<_, i64>(0),
                )
                .map_err(map_sql_error)? as usize;
            for completed_at in habit.completed_dates.iter().skip(stored) {
                tx.execute(
                    "INSERT INTO habit_check_ins (habit_id, completed_at) VALUES (?1, ?2)",
                    params![&habit.id, completed_at],
                )
                .map_err(map_sql_error)?;
            }

            tx.commit().map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn soft_delete(&self, habit_id: &str, user_id: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let habit_id = habit_id.to_string();
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "UPDATE habits SET is_active = 0, updated_at = CAST(strftime('%s','now') AS INTEGER)
                 WHERE id = ?1 AND user_id = ?2",
                params![&habit_id, &user_id],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn total_streak_bonus(&self, user_id: &str) -> DomainResult<f64> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<f64> {
            let conn = db.get_connection()?;
            conn.query_row(
                "SELECT COALESCE(SUM(streak), 0) * 0.5 FROM habits
                 WHERE user_id = ?1 AND is_active = 1",
                params![&user_id],
                |row| row.get(0),
            )
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_habit_row(row: &Row<'_>) -> rusqlite::Result<Habit> {
    Ok(Habit {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        streak: row.get(4)?,
        longest_streak: row.get(5)?,
        last_completed_at: row.get(6)?,
        completed_dates: Vec::new(),
        is_active: int_to_bool(row.get(7)?),
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn load_check_ins(conn: &Connection, habit_id: &str) -> DomainResult<Vec<i64>> {
    let mut stmt = conn
        .prepare("SELECT completed_at FROM habit_check_ins WHERE habit_id = ?1 ORDER BY completed_at ASC")
        .map_err(map_sql_error)?;
    let rows = stmt
        .query_map(params![habit_id], |row| row.get(0))
        .map_err(map_sql_error)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(map_sql_error);
    rows
}
