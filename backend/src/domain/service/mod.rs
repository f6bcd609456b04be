//! Personnel service orchestrating validation, gateway calls and response
//! shaping.
//!
//! Each public method serves one endpoint: it validates the raw draft,
//! runs any existence checks, calls the driven ports and hands the rows to
//! the [`reports`](crate::domain::reports) builders. Gateway failures pass
//! through the [`ErrorClassifier`] with the [`Operation`] they occurred in.

mod functions;
mod procedures;
mod views;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;

use crate::domain::classifier::{ErrorClassifier, Operation};
use crate::domain::ports::{GatewayError, PersonnelCommand, PersonnelQuery, ReportsQuery};
use crate::domain::{Error, RuntimeMode};

/// Driven ports consumed by [`PersonnelService`].
#[derive(Clone)]
pub struct PersonnelPorts {
    pub personnel: Arc<dyn PersonnelQuery>,
    pub commands: Arc<dyn PersonnelCommand>,
    pub reports: Arc<dyn ReportsQuery>,
}

/// Application service behind every `/api` endpoint.
#[derive(Clone)]
pub struct PersonnelService {
    personnel: Arc<dyn PersonnelQuery>,
    commands: Arc<dyn PersonnelCommand>,
    reports: Arc<dyn ReportsQuery>,
    clock: Arc<dyn Clock>,
    classifier: ErrorClassifier,
}

impl PersonnelService {
    /// Create a service over the given ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use personnel::domain::RuntimeMode;
    /// use personnel::domain::ports::{
    ///     FixturePersonnelCommand, FixturePersonnelQuery, FixtureReportsQuery,
    /// };
    /// use personnel::domain::service::{PersonnelPorts, PersonnelService};
    ///
    /// let service = PersonnelService::new(
    ///     PersonnelPorts {
    ///         personnel: Arc::new(FixturePersonnelQuery),
    ///         commands: Arc::new(FixturePersonnelCommand),
    ///         reports: Arc::new(FixtureReportsQuery),
    ///     },
    ///     Arc::new(DefaultClock),
    ///     RuntimeMode::Development,
    /// );
    /// assert_eq!(service.runtime_mode(), RuntimeMode::Development);
    /// ```
    pub fn new(ports: PersonnelPorts, clock: Arc<dyn Clock>, mode: RuntimeMode) -> Self {
        let PersonnelPorts {
            personnel,
            commands,
            reports,
        } = ports;
        Self {
            personnel,
            commands,
            reports,
            clock,
            classifier: ErrorClassifier::new(mode),
        }
    }

    #[must_use]
    pub const fn runtime_mode(&self) -> RuntimeMode {
        self.classifier.mode()
    }

    /// Server-local calendar date used by the age and date rules.
    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    fn classify(&self, operation: Operation) -> impl Fn(GatewayError) -> Error + '_ {
        move |failure| self.classifier.classify(operation, &failure)
    }
}

#[cfg(test)]
mod tests;
