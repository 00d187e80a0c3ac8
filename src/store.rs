//! Data access for the `user` table. `UserStore` is the seam handlers depend on;
//! `MySqlUserStore` is the production implementation over a sqlx pool.

mod memory;

pub use memory::InMemoryUserStore;

use crate::error::AppError;
use crate::model::User;
use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::Connection;

/// Pool size used for every deployment.
const MAX_CONNECTIONS: u32 = 5;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows, in whatever order the store returns them.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// `Ok(None)` when no row has this id.
    async fn get_user(&self, id: i64) -> Result<Option<User>, AppError>;

    async fn create_user(&self, user: &User) -> Result<(), AppError>;

    async fn ping(&self) -> Result<(), AppError>;

    async fn close(&self);
}

#[derive(Clone)]
pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    /// Open a pool against `dsn` and ping it once before returning.
    pub async fn connect(dsn: &str) -> Result<Self, AppError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(dsn)
            .await?;
        let store = Self { pool };
        store.ping().await?;
        Ok(store)
    }

    /// Wrap an already-open pool without pinging it.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let sql = "SELECT id, username FROM `user`";
        tracing::debug!(sql = %sql, "query");
        let users = sqlx::query_as::<_, User>(sql).fetch_all(&self.pool).await?;
        Ok(users)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let sql = "SELECT id, username FROM `user` WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let user = sqlx::query_as::<_, User>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create_user(&self, user: &User) -> Result<(), AppError> {
        let sql = "INSERT INTO `user` (id, username) VALUES (?, ?)";
        tracing::debug!(sql = %sql, id = user.id, "execute");
        sqlx::query(sql)
            .bind(user.id)
            .bind(&user.username)
            .execute(&self.pool)
            .await
            .map_err(AppError::Insert)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
