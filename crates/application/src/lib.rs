//! Hustings Application - Session core and ports
//!
//! This crate holds the client's session/authorization core: the ports the
//! infrastructure layer implements, the session service that owns the
//! authenticated identity, the route guards, and the typed gateway events
//! the app shell subscribes to.

pub mod error;
pub mod events;
pub mod ports;
pub mod routing;
pub mod session;
pub mod shell;

pub use error::{ApplicationError, ApplicationResult};
pub use events::{GatewayEvent, GatewayEvents};
pub use session::SessionService;
pub use shell::{AppShell, Navigator};
