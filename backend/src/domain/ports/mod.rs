//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Ports describe how the domain reaches the personnel database. Each trait
//! reports failures as a [`GatewayError`] so adapters map their errors into
//! predictable variants. Fixture implementations stand in when no database
//! is configured.

mod macros;
pub(crate) use macros::define_port_error;

mod fixture_data;
mod gateway_error;
mod personnel_command;
mod personnel_query;
mod reports_query;

pub use gateway_error::GatewayError;
#[cfg(test)]
pub use personnel_command::MockPersonnelCommand;
pub use personnel_command::{FixturePersonnelCommand, PersonnelCommand};
#[cfg(test)]
pub use personnel_query::MockPersonnelQuery;
pub use personnel_query::{FixturePersonnelQuery, PersonnelQuery};
#[cfg(test)]
pub use reports_query::MockReportsQuery;
pub use reports_query::{FixtureReportsQuery, ReportsQuery};
