//! Database layer - connection pool, repositories and the catalog seam
//!
//! # Design Principles
//!
//! - One pool built at startup and owned by the app state, no globals
//! - Album reads use JOINs, no N+1 queries
//! - Rely on DB constraints, no check-then-insert
//! - One statement per operation, no explicit transactions

pub mod catalog;
pub mod memory;
pub mod pool;
pub mod repos;

pub use catalog::{Catalog, PgCatalog};
pub use memory::MemoryCatalog;
pub use pool::{connect_with_retry, ConnectError, RetryPolicy};
pub use repos::*;
