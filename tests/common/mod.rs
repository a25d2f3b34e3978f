#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use user_service::application::services::UserService;
use user_service::infrastructure::persistence::{PgGateway, PgUserRepository};
use user_service::state::AppState;

pub async fn create_test_user(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let gateway = PgGateway::new(pool.clone());
    let user_repo = Arc::new(PgUserRepository::new(gateway));
    let user_service = Arc::new(UserService::new(user_repo));

    AppState {
        db: pool,
        user_service,
    }
}
