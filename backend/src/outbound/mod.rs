//! Outbound adapters implementing the domain ports.
//!
//! Only PostgreSQL is reached from here. Adapters translate between SQL
//! rows and domain records and hold no business logic.

pub mod persistence;
