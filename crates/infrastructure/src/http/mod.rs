//! HTTP infrastructure.
//!
//! This module provides the API gateway: the single egress point through
//! which every backend call travels.

mod gateway;

pub use gateway::ApiGateway;
