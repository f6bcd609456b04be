//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only reach the database
//! through the ports held by the service.

use std::sync::Arc;

use crate::domain::PersonnelService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub personnel: Arc<PersonnelService>,
}

impl HttpState {
    #[must_use]
    pub fn new(personnel: PersonnelService) -> Self {
        Self {
            personnel: Arc::new(personnel),
        }
    }
}

impl From<PersonnelService> for HttpState {
    fn from(personnel: PersonnelService) -> Self {
        Self::new(personnel)
    }
}
