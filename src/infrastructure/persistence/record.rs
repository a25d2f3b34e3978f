//! Generic record contract for the persistence gateway.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{FromRow, Postgres, Row, Transaction};

use crate::domain::entities::{NewUser, User};

/// A scope within which persistence operations commit or roll back together.
///
/// Obtained from [`crate::infrastructure::persistence::PgGateway::begin`].
/// Dropping a unit of work without committing rolls it back.
pub type UnitOfWork<'a> = Transaction<'a, Postgres>;

/// A typed, identifiable unit of stored data.
///
/// Ties an entity type to its backing table so the gateway can dispatch
/// generic lookups through the type parameter, and describes how the
/// pre-insert form becomes a stored row.
#[async_trait]
pub trait Record: Sized + for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin {
    /// Table backing this record type.
    const TABLE: &'static str;

    /// Pre-insert form of the record, without a store-assigned identifier.
    type New: Send;

    /// Inserts `new` within the given unit of work and returns the stored
    /// row, including the identifier assigned by the store.
    async fn insert(uow: &mut UnitOfWork<'_>, new: Self::New) -> Result<Self, sqlx::Error>;
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let Json(attributes): Json<Map<String, Value>> = row.try_get("attributes")?;

        Ok(User::new(row.try_get("id")?, row.try_get("name")?, attributes))
    }
}

#[async_trait]
impl Record for User {
    const TABLE: &'static str = "users";

    type New = NewUser;

    async fn insert(uow: &mut UnitOfWork<'_>, new: NewUser) -> Result<User, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, attributes) VALUES ($1, $2) RETURNING id",
        )
        .bind(&new.name)
        .bind(Json(&new.attributes))
        .fetch_one(&mut **uow)
        .await?;

        Ok(User::new(id, new.name, new.attributes))
    }
}
