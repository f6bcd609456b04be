//! Inbound adapters translating external requests into service calls.

pub mod http;
