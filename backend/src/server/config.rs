//! HTTP server configuration object.

use personnel::domain::RuntimeMode;
use personnel::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) runtime_mode: RuntimeMode,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration without a database; fixture ports
    /// answer every request until [`ServerConfig::with_db_pool`] is called.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, runtime_mode: RuntimeMode) -> Self {
        Self {
            bind_addr,
            runtime_mode,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the Diesel adapters.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "create_server destructures the config")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn starts_without_a_database() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().expect("socket address");
        let config = ServerConfig::new(addr, RuntimeMode::Development);
        assert_eq!(config.bind_addr(), addr);
        assert_eq!(config.runtime_mode, RuntimeMode::Development);
        assert!(config.db_pool.is_none());
    }
}
