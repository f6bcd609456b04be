//! Builders for the HTTP state and its driven ports.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::warn;

use personnel::domain::ports::{
    FixturePersonnelCommand, FixturePersonnelQuery, FixtureReportsQuery,
};
use personnel::domain::{PersonnelPorts, PersonnelService, RuntimeMode};
use personnel::inbound::http::state::HttpState;
use personnel::outbound::persistence::{
    DbPool, DieselPersonnelCommand, DieselPersonnelQuery, DieselReportsQuery,
};

/// Diesel adapters sharing one pool.
fn diesel_ports(pool: &DbPool) -> PersonnelPorts {
    PersonnelPorts {
        personnel: Arc::new(DieselPersonnelQuery::new(pool.clone())),
        commands: Arc::new(DieselPersonnelCommand::new(pool.clone())),
        reports: Arc::new(DieselReportsQuery::new(pool.clone())),
    }
}

fn fixture_ports() -> PersonnelPorts {
    PersonnelPorts {
        personnel: Arc::new(FixturePersonnelQuery),
        commands: Arc::new(FixturePersonnelCommand),
        reports: Arc::new(FixtureReportsQuery),
    }
}

fn build_ports(pool: Option<&DbPool>) -> PersonnelPorts {
    match pool {
        Some(pool) => diesel_ports(pool),
        None => {
            warn!("no database configured; serving fixture personnel data");
            fixture_ports()
        }
    }
}

/// Build the shared HTTP state, backed by Diesel when a pool is present.
pub(super) fn build_http_state(
    pool: Option<&DbPool>,
    runtime_mode: RuntimeMode,
) -> web::Data<HttpState> {
    let service = PersonnelService::new(build_ports(pool), Arc::new(DefaultClock), runtime_mode);
    web::Data::new(HttpState::new(service))
}
