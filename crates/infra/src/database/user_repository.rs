//! User repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use focusflow_core::auth::ports::UserRepository as UserRepositoryPort;
use focusflow_domain::{FocusFlowError, Result as DomainResult, User};
use rusqlite::{params, Row};
use tokio::task;

use super::manager::DbManager;
use super::{map_join_error, map_sql_error};

const USER_COLUMNS: &str = "id, name, email, password_hash, fcm_token, created_at, updated_at";

/// SQLite-backed implementation of `UserRepository`
pub struct SqliteUserRepository {
    db: Arc<DbManager>,
}

impl SqliteUserRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn create(&self, user: User) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO users (id, name, email, password_hash, fcm_token, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    &user.id,
                    &user.name,
                    &user.email,
                    &user.password_hash,
                    &user.fcm_token,
                    user.created_at,
                    user.updated_at,
                ],
            )
            .map_err(map_constraint_to_conflict)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let email = email.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<User>> {
            let conn = db.get_connection()?;
            let result = conn.query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1"),
                params![&email],
                map_user_row,
            );
            match result {
                Ok(user) => Ok(Some(user)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<User>> {
            let conn = db.get_connection()?;
            let result = conn.query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                params![&id],
                map_user_row,
            );
            match result {
                Ok(user) => Ok(Some(user)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn set_fcm_token(&self, user_id: &str, fcm_token: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let fcm_token = fcm_token.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "UPDATE users SET fcm_token = ?1 WHERE id = ?2",
                params![&fcm_token, &user_id],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        fcm_token: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// The unique index on `email` is the registration conflict check of last
/// resort; surface it as a domain conflict rather than a database error.
fn map_constraint_to_conflict(err: rusqlite::Error) -> FocusFlowError {
    match &err {
        rusqlite::Error::SqliteFailure(code, _)
            if code.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            FocusFlowError::Conflict("email already registered".to_string())
        }
        _ => map_sql_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::tests::setup_test_db;

    fn test_user(id: &str, email: &str) -> User {
        User {
            id: id.into(),
            name: "Test User".into(),
            email: email.into(),
            password_hash: "$argon2id$test".into(),
            fcm_token: None,
            created_at: 100,
            updated_at: 100,
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_and_find_by_email_and_id() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteUserRepository::new(db);
        let user = test_user("u1", "ada@example.com");

        repo.create(user.clone()).await.expect("create user");

        let by_email =
            repo.find_by_email("ada@example.com").await.expect("find by email").expect("present");
        assert_eq!(by_email.id, "u1");
        assert_eq!(by_email.password_hash, "$argon2id$test");

        let by_id = repo.find_by_id("u1").await.expect("find by id").expect("present");
        assert_eq!(by_id.email, "ada@example.com");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn duplicate_email_is_a_conflict() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteUserRepository::new(db);

        repo.create(test_user("u1", "ada@example.com")).await.expect("create user");
        let result = repo.create(test_user("u2", "ada@example.com")).await;
        assert!(matches!(result, Err(FocusFlowError::Conflict(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_user_returns_none() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteUserRepository::new(db);

        assert!(repo.find_by_id("missing").await.expect("find").is_none());
        assert!(repo.find_by_email("no@example.com").await.expect("find").is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fcm_token_round_trip() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteUserRepository::new(db);
        repo.create(test_user("u1", "ada@example.com")).await.expect("create user");

        repo.set_fcm_token("u1", "fcm-123").await.expect("set token");
        let user = repo.find_by_id("u1").await.expect("find").expect("present");
        assert_eq!(user.fcm_token.as_deref(), Some("fcm-123"));
    }
}
