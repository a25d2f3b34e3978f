//! Generic persistence gateway over PostgreSQL.

use sqlx::PgPool;
use std::sync::Arc;

use super::record::{Record, UnitOfWork};
use crate::error::AppError;

/// Facade mediating typed read/write access to the store.
///
/// The gateway itself holds no state beyond the connection pool and never
/// commits: every operation runs within a caller-owned [`UnitOfWork`], so
/// commit timing belongs to the caller. A unit of work dropped without a
/// commit rolls back.
pub struct PgGateway {
    pool: Arc<PgPool>,
}

impl PgGateway {
    /// Creates a new gateway with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a new unit of work.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a connection cannot be acquired.
    pub async fn begin(&self) -> Result<UnitOfWork<'static>, AppError> {
        Ok(self.pool.begin().await?)
    }

    /// Registers a record for storage within the caller's unit of work.
    ///
    /// Returns the stored row, including the identifier assigned by the
    /// store. The insert becomes durable only when the unit of work commits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on unique-constraint violations and
    /// [`AppError::Internal`] on other database errors.
    pub async fn save<R: Record>(
        &self,
        uow: &mut UnitOfWork<'_>,
        new: R::New,
    ) -> Result<R, AppError> {
        Ok(R::insert(uow, new).await?)
    }

    /// Looks up a single record of type `R` by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if not found — absence is a valid result, not an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_id<R: Record>(
        &self,
        uow: &mut UnitOfWork<'_>,
        id: i64,
    ) -> Result<Option<R>, AppError> {
        let statement = format!("SELECT * FROM {} WHERE id = $1", R::TABLE);

        Ok(sqlx::query_as::<_, R>(&statement)
            .bind(id)
            .fetch_optional(&mut **uow)
            .await?)
    }

    /// Runs a backend-native statement verbatim, bypassing the typed record
    /// model.
    ///
    /// The statement is executed with no parameterization. Callers are fully
    /// responsible for escaping; never build the statement from untrusted
    /// input. Side effects become durable when the unit of work commits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the statement fails to execute.
    pub async fn execute_statement(
        &self,
        uow: &mut UnitOfWork<'_>,
        statement: &str,
    ) -> Result<(), AppError> {
        sqlx::raw_sql(statement).execute(&mut **uow).await?;

        Ok(())
    }
}
