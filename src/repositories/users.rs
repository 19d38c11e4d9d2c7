use crate::structs::users::User;
use async_trait::async_trait;
use sqlx::{Error, PgPool};

/// users 表的讀取介面
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 取全部 users, 表是空的就回傳空陣列
    async fn find_all(&self) -> Result<Vec<User>, Error>;

    /// 依 id 取單一 user, 找不到回傳 `None`
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, Error>;
}

pub struct PostgresUserRepository {
    pool: PgPool,
    select_all: String,
    select_by_id: String,
}

impl PostgresUserRepository {
    /// `table` 必須是已檢查過的表名, 例如 `users` 或 `app.users`
    pub fn new(pool: PgPool, table: &str) -> Self {
        Self {
            pool,
            select_all: format!("SELECT id, name, email FROM {} ORDER BY id", table),
            select_by_id: format!("SELECT id, name, email FROM {} WHERE id = $1", table),
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, Error> {
        sqlx::query_as::<_, User>(&self.select_all)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>(&self.select_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
