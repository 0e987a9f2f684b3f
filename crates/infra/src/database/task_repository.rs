//! Task repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use focusflow_core::tasks::ports::TaskRepository as TaskRepositoryPort;
use focusflow_domain::{Result as DomainResult, Task, TaskFilters, TaskPriority, TaskStatus};
use rusqlite::{params, params_from_iter, Row, ToSql};
use tokio::task;

use super::manager::DbManager;
use super::{map_join_error, map_sql_error};

const TASK_COLUMNS: &str = "id, user_id, title, description, priority, due_date, status, \
                            completed_at, created_at, updated_at";

/// SQLite-backed implementation of `TaskRepository`
pub struct SqliteTaskRepository {
    db: Arc<DbManager>,
}

impl SqliteTaskRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepositoryPort for SqliteTaskRepository {
    async fn create(&self, task: Task) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO tasks (id, user_id, title, description, priority, due_date, status,
                                    completed_at, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    &task.id,
                    &task.user_id,
                    &task.title,
                    &task.description,
                    task.priority.as_str(),
                    task.due_date,
                    task.status.as_str(),
                    task.completed_at,
                    task.created_at,
                    task.updated_at,
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_for_user(&self, user_id: &str, filters: TaskFilters) -> DomainResult<Vec<Task>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<Task>> {
            let conn = db.get_connection()?;

            let mut sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = ?1");
            let mut sql_params: Vec<Box<dyn ToSql>> = vec![Box::new(user_id)];
            if let Some(status) = filters.status {
                sql_params.push(Box::new(status.as_str()));
                sql.push_str(&format!(" AND status = ?{}", sql_params.len()));
            }
            if let Some(priority) = filters.priority {
                sql_params.push(Box::new(priority.as_str()));
                sql.push_str(&format!(" AND priority = ?{}", sql_params.len()));
            }
            if let Some(due_before) = filters.due_before {
                sql_params.push(Box::new(due_before));
                sql.push_str(&format!(" AND due_date <= ?{}", sql_params.len()));
            }
            if let Some(due_after) = filters.due_after {
                sql_params.push(Box::new(due_after));
                sql.push_str(&format!(" AND due_date >= ?{}", sql_params.len()));
            }
            sql.push_str(" ORDER BY created_at DESC");

            let mut stmt = conn.prepare(&sql).map_err(map_sql_error)?;
            let rows = stmt
                .query_map(params_from_iter(sql_params), map_task_row)
                .map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_id_for_user(
        &self,
        task_id: &str,
        user_id: &str,
    ) -> DomainResult<Option<Task>> {
        let db = Arc::clone(&self.db);
        let task_id = task_id.to_string();
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Task>> {
            let conn = db.get_connection()?;
            let result = conn.query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1 AND user_id = ?2"),
                params![&task_id, &user_id],
                map_task_row,
            );
            match result {
                Ok(task) => Ok(Some(task)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update(&self, task: Task) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "UPDATE tasks SET title = ?1, description = ?2, priority = ?3, due_date = ?4,
                                  status = ?5, completed_at = ?6, updated_at = ?7
                 WHERE id = ?8 AND user_id = ?9",
                params![
                    &task.title,
                    &task.description,
                    task.priority.as_str(),
                    task.due_date,
                    task.status.as_str(),
                    task.completed_at,
                    task.updated_at,
                    &task.id,
                    &task.user_id,
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, task_id: &str, user_id: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let task_id = task_id.to_string();
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "DELETE FROM tasks WHERE id = ?1 AND user_id = ?2",
                params![&task_id, &user_id],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn count_completed_in_window(
        &self,
        user_id: &str,
        start: i64,
        end: i64,
    ) -> DomainResult<u32> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<u32> {
            let conn = db.get_connection()?;
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM tasks
                     WHERE user_id = ?1 AND status = 'completed'
                       AND completed_at >= ?2 AND completed_at < ?3",
                    params![&user_id, start, end],
                    |row| row.get(0),
                )
                .map_err(map_sql_error)?;
            Ok(count as u32)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_task_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let priority: String = row.get(4)?;
    let status: String = row.get(6)?;
    Ok(Task {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        priority: TaskPriority::parse(&priority).ok_or_else(|| bad_column(4, &priority))?,
        due_date: row.get(5)?,
        status: TaskStatus::parse(&status).ok_or_else(|| bad_column(6, &status))?,
        completed_at: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn bad_column(index: usize, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        rusqlite::types::Type::Text,
        format!("unrecognised value: {value}").into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::tests::{seed_user, setup_test_db};

    fn test_task(id: &str, status: TaskStatus, completed_at: Option<i64>) -> Task {
        Task {
            id: id.into(),
            user_id: "u1".into(),
            title: "Write report".into(),
            description: String::new(),
            priority: TaskPriority::Medium,
            due_date: None,
            status,
            completed_at,
            created_at: 100,
            updated_at: 100,
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_and_list_round_trip() {
        let (db, _temp_dir) = setup_test_db();
        seed_user(&db, "u1", "u1@example.com");
        let repo = SqliteTaskRepository::new(db);

        repo.create(test_task("t1", TaskStatus::Pending, None)).await.expect("create");
        let listed = repo.list_for_user("u1", TaskFilters::default()).await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "t1");
        assert_eq!(listed[0].priority, TaskPriority::Medium);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn filters_narrow_the_listing() {
        let (db, _temp_dir) = setup_test_db();
        seed_user(&db, "u1", "u1@example.com");
        let repo = SqliteTaskRepository::new(db);

        let mut due_soon = test_task("t1", TaskStatus::Pending, None);
        due_soon.due_date = Some(1_000);
        let mut due_late = test_task("t2", TaskStatus::Pending, None);
        due_late.due_date = Some(5_000);
        due_late.priority = TaskPriority::High;
        repo.create(due_soon).await.expect("create");
        repo.create(due_late).await.expect("create");
        repo.create(test_task("t3", TaskStatus::Completed, Some(500))).await.expect("create");

        let completed = repo
            .list_for_user(
                "u1",
                TaskFilters { status: Some(TaskStatus::Completed), ..TaskFilters::default() },
            )
            .await
            .expect("list");
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "t3");

        let high = repo
            .list_for_user(
                "u1",
                TaskFilters { priority: Some(TaskPriority::High), ..TaskFilters::default() },
            )
            .await
            .expect("list");
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].id, "t2");

        let due_window = repo
            .list_for_user(
                "u1",
                TaskFilters {
                    due_after: Some(2_000),
                    due_before: Some(9_000),
                    ..TaskFilters::default()
                },
            )
            .await
            .expect("list");
        assert_eq!(due_window.len(), 1);
        assert_eq!(due_window[0].id, "t2");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn tasks_are_scoped_to_their_owner() {
        let (db, _temp_dir) = setup_test_db();
        seed_user(&db, "u1", "u1@example.com");
        seed_user(&db, "u2", "u2@example.com");
        let repo = SqliteTaskRepository::new(db);
        repo.create(test_task("t1", TaskStatus::Pending, None)).await.expect("create");

        assert!(repo.find_by_id_for_user("t1", "u2").await.expect("find").is_none());
        assert!(repo.find_by_id_for_user("t1", "u1").await.expect("find").is_some());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn update_persists_status_transition() {
        let (db, _temp_dir) = setup_test_db();
        seed_user(&db, "u1", "u1@example.com");
        let repo = SqliteTaskRepository::new(db);
        repo.create(test_task("t1", TaskStatus::Pending, None)).await.expect("create");

        let mut task = repo.find_by_id_for_user("t1", "u1").await.expect("find").expect("present");
        task.status = TaskStatus::Completed;
        task.completed_at = Some(2_000);
        repo.update(task).await.expect("update");

        let stored = repo.find_by_id_for_user("t1", "u1").await.expect("find").expect("present");
        assert_eq!(stored.status, TaskStatus::Completed);
        assert_eq!(stored.completed_at, Some(2_000));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn count_completed_uses_half_open_window() {
        let (db, _temp_dir) = setup_test_db();
        seed_user(&db, "u1", "u1@example.com");
        let repo = SqliteTaskRepository::new(db);

        repo.create(test_task("t1", TaskStatus::Completed, Some(1_000))).await.expect("create");
        repo.create(test_task("t2", TaskStatus::Completed, Some(1_999))).await.expect("create");
        repo.create(test_task("t3", TaskStatus::Completed, Some(2_000))).await.expect("create");
        repo.create(test_task("t4", TaskStatus::Pending, None)).await.expect("create");

        let count = repo.count_completed_in_window("u1", 1_000, 2_000).await.expect("count");
        assert_eq!(count, 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_removes_only_the_owned_task() {
        let (db, _temp_dir) = setup_test_db();
        seed_user(&db, "u1", "u1@example.com");
        seed_user(&db, "u2", "u2@example.com");
        let repo = SqliteTaskRepository::new(db);
        repo.create(test_task("t1", TaskStatus::Pending, None)).await.expect("create");

        repo.delete("t1", "u2").await.expect("no-op delete");
        assert!(repo.find_by_id_for_user("t1", "u1").await.expect("find").is_some());

        repo.delete("t1", "u1").await.expect("delete");
        assert!(repo.find_by_id_for_user("t1", "u1").await.expect("find").is_none());
    }
}
