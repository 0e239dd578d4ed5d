//! configurator_core - types and pure functions for the Elfsquad configurator API.
//!
//! Everything here is free of I/O: wire models, response merging, root
//! inference, authentication decisions and endpoint URLs. The HTTP shell
//! lives in `configurator_client`.

pub mod auth;
pub mod configuration;
pub mod endpoints;
pub mod models;
pub mod serde;
