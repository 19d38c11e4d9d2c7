use crate::repositories::users::{PostgresUserRepository, UserRepository};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub fn postgres(connection: Pool<Postgres>, table: &str) -> Self {
        Self::new(Arc::new(PostgresUserRepository::new(connection, table)))
    }
}
