//! Infrastructure layer: database access and persistence plumbing.

pub mod persistence;
