//! Portal record types.
//!
//! Simple serde records fetched and rendered by the portal views. Status and
//! phase values are backend-owned strings, carried verbatim; every record
//! tolerates unknown fields so a newer backend never breaks deserialization.

mod admin;
mod manifesto;
mod nomination;
mod supporter;

pub use admin::{ElectionConfig, PortalStatistics, StatisticsBucket};
pub use manifesto::{Manifesto, ReviewerComment};
pub use nomination::Nomination;
pub use supporter::{SupporterRequest, SupporterRole};
