//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::persistence::PgUserRepository;

/// Application state shared across all request handlers.
///
/// The pool is kept alongside the services for the health check's
/// connectivity probe.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub user_service: Arc<UserService<PgUserRepository>>,
}
