// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod gateway;
#[cfg(test)]
pub(crate) mod mock_transport;
pub mod place_store;
pub mod request;
pub mod subscription;
pub mod transport;

pub use gateway::*;
pub use place_store::*;
pub use request::*;
pub use subscription::*;
pub use transport::*;
