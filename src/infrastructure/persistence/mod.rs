//! PostgreSQL persistence layer.
//!
//! # Structure
//!
//! - [`record`] - The generic [`Record`] contract tying entity types to
//!   their backing tables, and the [`UnitOfWork`] transaction scope
//! - [`gateway`] - [`PgGateway`], the typed facade over the store
//! - [`pg_user_repository`] - [`PgUserRepository`], the
//!   [`crate::domain::repositories::UserRepository`] implementation composed
//!   on the gateway

pub mod gateway;
pub mod pg_user_repository;
pub mod record;

pub use gateway::PgGateway;
pub use pg_user_repository::PgUserRepository;
pub use record::{Record, UnitOfWork};
