//! Typed endpoint clients.
//!
//! One thin client per backend resource, all funneled through the
//! [`ApiGateway`](crate::http::ApiGateway). Clients decode the backend's
//! envelope bodies and return domain records; they hold no state of their
//! own.

mod auth;
mod manifestos;
mod nominations;
mod reviewers;
mod superadmin;
mod supporters;

pub use auth::{AuthClient, RegistrationDetails};
pub use manifestos::ManifestosClient;
pub use nominations::NominationsClient;
pub use reviewers::ReviewersClient;
pub use superadmin::SuperadminClient;
pub use supporters::SupportersClient;
