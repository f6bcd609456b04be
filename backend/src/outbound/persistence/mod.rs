//! PostgreSQL adapters for the personnel ports.
//!
//! The database owns the business rules through stored functions,
//! procedures and views, so these adapters issue fixed raw SQL and decode
//! the rows. Connections come from a `bb8` pool driven by `diesel-async`.
//!
//! ```ignore
//! use personnel::outbound::persistence::{DbPool, DieselPersonnelQuery, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/personnel")).await?;
//! let personnel = DieselPersonnelQuery::new(pool);
//! ```

mod diesel_personnel_command;
mod diesel_personnel_query;
mod diesel_reports_query;
mod error_mapping;
mod pool;
mod rows;
mod statements;

pub use diesel_personnel_command::DieselPersonnelCommand;
pub use diesel_personnel_query::DieselPersonnelQuery;
pub use diesel_reports_query::DieselReportsQuery;
pub use pool::{DbPool, PoolConfig, PoolError};
