//! Hustings Domain - Core portal types
//!
//! This crate defines the domain model for the Hustings nomination portal
//! client. All types here are pure Rust with no I/O dependencies.

pub mod credentials;
pub mod error;
pub mod portal;
pub mod role;
pub mod route;
pub mod session;
pub mod settings;
pub mod user;

pub use credentials::CredentialRecord;
pub use error::{DomainError, DomainResult};
pub use portal::{
    ElectionConfig, Manifesto, Nomination, PortalStatistics, ReviewerComment, StatisticsBucket,
    SupporterRequest, SupporterRole,
};
pub use role::Role;
pub use route::{Route, RouteAccess, RouteDecision};
pub use session::{Session, SessionSnapshot, SessionState};
pub use settings::ClientSettings;
pub use user::User;
