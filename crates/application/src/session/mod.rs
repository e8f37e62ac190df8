//! Session ownership and lifecycle.
//!
//! This module provides the process-wide source of truth for "who is
//! logged in": hydration from the credential store, the two login flows,
//! logout, and in-place user updates.

mod service;

pub use service::SessionService;
