//! Session types for the authenticated identity.
//!
//! A [`Session`] is the token/user pair proving an authenticated browser
//! context; the pair is constructed together and can only be torn down
//! together. [`SessionSnapshot`] is the observable state of the session
//! service at a point in time, and [`SessionState`] is the three-state
//! machine the route guards dispatch on.

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::user::User;

/// An authenticated session: bearer token plus the user it belongs to.
///
/// The invariant that token and user exist together or not at all is
/// enforced structurally: there is no way to build a `Session` with only
/// one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    token: String,
    user: User,
}

impl Session {
    /// Creates a session from a token and the user it authenticates.
    #[must_use]
    pub const fn new(token: String, user: User) -> Self {
        Self { token, user }
    }

    /// The opaque bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The authenticated user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Consumes the session into its parts.
    #[must_use]
    pub fn into_parts(self) -> (String, User) {
        (self.token, self.user)
    }

    /// Returns a copy with the user replaced and the token kept.
    ///
    /// Role-change flows (promotion to candidate) re-persist the new user
    /// with the existing token; re-authentication is never required.
    #[must_use]
    pub fn with_user(&self, user: User) -> Self {
        Self {
            token: self.token.clone(),
            user,
        }
    }
}

/// Observable state of the session service at a point in time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    /// The current user, if authenticated.
    pub user: Option<User>,
    /// True while startup hydration or a login call is in flight.
    pub loading: bool,
    /// Last recorded credential-failure message, if any.
    pub error: Option<String>,
}

impl SessionSnapshot {
    /// True when a user is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Derives the three-state machine the route guards consume.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.loading {
            SessionState::Loading
        } else {
            self.user.clone().map_or(SessionState::Unauthenticated, |user| {
                SessionState::Authenticated { user }
            })
        }
    }
}

/// The session state machine consumed by route guards.
///
/// - `Loading`: hydration in progress, no routing decision may be made
/// - `Unauthenticated`: no user; protected routes redirect to login
/// - `Authenticated`: a user is present; public routes redirect away
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Startup hydration has not completed.
    Loading,
    /// No authenticated user.
    Unauthenticated,
    /// An authenticated user.
    Authenticated {
        /// The current user.
        user: User,
    },
}

impl SessionState {
    /// True while hydration is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True when a user is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The classified role of the authenticated user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Authenticated { user } => Some(user.role_kind()),
            _ => None,
        }
    }
}
