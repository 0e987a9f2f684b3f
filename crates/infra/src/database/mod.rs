//! SQLite persistence layer

pub mod habit_repository;
pub mod log_repository;
pub mod manager;
pub mod task_repository;
pub mod user_repository;

pub use habit_repository::SqliteHabitRepository;
pub use log_repository::SqliteLogRepository;
pub use manager::DbManager;
pub use task_repository::SqliteTaskRepository;
pub use user_repository::SqliteUserRepository;

use focusflow_domain::FocusFlowError;

/// Map a rusqlite error to the domain error type.
pub(crate) fn map_sql_error(err: rusqlite::Error) -> FocusFlowError {
    FocusFlowError::Database(format!("SQLite error: {err}"))
}

/// Map a blocking-task join error to the domain error type.
pub(crate) fn map_join_error(err: tokio::task::JoinError) -> FocusFlowError {
    FocusFlowError::Internal(format!("Task join error: {err}"))
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn int_to_bool(value: i64) -> bool {
    value != 0
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::manager::DbManager;

    /// Fresh migrated database on a tempdir.
    pub(crate) fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let manager = DbManager::new(&db_path, 5).expect("create db manager");
        manager.run_migrations().expect("run migrations");
        (Arc::new(manager), temp_dir)
    }

    /// Insert a bare user row so foreign keys on owned rows hold.
    pub(crate) fn seed_user(manager: &DbManager, id: &str, email: &str) {
        let conn = manager.get_connection().expect("connection");
        conn.execute(
            "INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
             VALUES (?1, ?2, ?3, 'x', 0, 0)",
            rusqlite::params![id, id, email],
        )
        .expect("seed user");
    }
}
