//! Application context - dependency injection container

use std::sync::Arc;

use focusflow_core::{AnalyticsService, AuthService, HabitService, TaskService};
use focusflow_domain::{Config, Result};
use focusflow_infra::{
    Argon2PasswordHasher, DbManager, JwtTokenService, SqliteHabitRepository, SqliteLogRepository,
    SqliteTaskRepository, SqliteUserRepository,
};

/// Application context - holds all services and dependencies
#[derive(Clone)]
pub struct AppContext {
    pub db: Arc<DbManager>,
    pub auth: Arc<AuthService>,
    pub tasks: Arc<TaskService>,
    pub habits: Arc<HabitService>,
    pub analytics: Arc<AnalyticsService>,
}

impl AppContext {
    /// Wire repositories, credential adapters and services from the config.
    ///
    /// Runs migrations on the configured database before returning.
    pub fn new(config: &Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let users = Arc::new(SqliteUserRepository::new(Arc::clone(&db)));
        let tasks_repo = Arc::new(SqliteTaskRepository::new(Arc::clone(&db)));
        let habits_repo = Arc::new(SqliteHabitRepository::new(Arc::clone(&db)));
        let logs = Arc::new(SqliteLogRepository::new(Arc::clone(&db)));

        let hasher = Arc::new(Argon2PasswordHasher::new());
        let tokens = Arc::new(JwtTokenService::new(
            &config.auth.jwt_secret,
            config.auth.token_ttl_seconds,
        ));

        Ok(Self {
            db,
            auth: Arc::new(AuthService::new(users, hasher, tokens)),
            tasks: Arc::new(TaskService::new(tasks_repo.clone())),
            habits: Arc::new(HabitService::new(habits_repo.clone())),
            analytics: Arc::new(AnalyticsService::new(logs, tasks_repo, habits_repo)),
        })
    }
}
