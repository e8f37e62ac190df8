//! The session service.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use hustings_domain::{Role, Session, SessionSnapshot, SessionState, User};

use crate::error::ApplicationResult;
use crate::ports::{ApiError, AuthApi, CredentialStore};

/// Process-wide owner of the authenticated identity.
///
/// Constructed once at startup and shared by `Arc`; all views reach the
/// session through this handle, so there is no way to observe session state
/// outside its provisioning scope. Interior state lives behind an async
/// `RwLock` and is only ever replaced whole.
///
/// The lock is never held across a network await: a login takes the lock
/// once to mark the attempt and once to apply its outcome. Two concurrent
/// logins are therefore not mutually excluded; the last response to
/// resolve wins, matching the portal's observed behavior.
#[derive(Debug, Clone)]
pub struct SessionService<C, A> {
    store: C,
    api: A,
    state: Arc<RwLock<SessionSnapshot>>,
    revalidate_on_start: bool,
}

impl<C: CredentialStore, A: AuthApi> SessionService<C, A> {
    /// Creates a service in the loading state, before hydration.
    #[must_use]
    pub fn new(store: C, api: A) -> Self {
        Self {
            store,
            api,
            state: Arc::new(RwLock::new(SessionSnapshot {
                user: None,
                loading: true,
                error: None,
            })),
            revalidate_on_start: false,
        }
    }

    /// Enables the eager profile call during [`initialize`].
    ///
    /// Off by default: the cached session is trusted on read, accepting a
    /// staleness window until the first rejected request.
    ///
    /// [`initialize`]: Self::initialize
    #[must_use]
    pub const fn with_revalidation(mut self, revalidate_on_start: bool) -> Self {
        self.revalidate_on_start = revalidate_on_start;
        self
    }

    /// Hydrates the session from the credential store.
    ///
    /// Runs once at startup. With revalidation enabled and credentials
    /// present, additionally refreshes the profile from the backend; an
    /// authorization rejection there degrades to a logged-out session,
    /// while a transport failure keeps the cached user. Always leaves
    /// `loading = false`.
    pub async fn initialize(&self) {
        let stored = match self.store.load().await {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "credential load failed, starting logged out");
                None
            }
        };

        let user = match stored {
            Some(session) if self.revalidate_on_start => self.revalidate(session).await,
            Some(session) => Some(session.into_parts().1),
            None => None,
        };

        let mut state = self.state.write().await;
        state.user = user;
        state.loading = false;
        debug!(authenticated = state.user.is_some(), "session hydrated");
    }

    /// Refreshes the stored user from the profile endpoint.
    async fn revalidate(&self, session: Session) -> Option<User> {
        match self.api.profile().await {
            Ok(user) => {
                let refreshed = session.with_user(user.clone());
                if let Err(err) = self.store.save(&refreshed).await {
                    warn!(error = %err, "could not persist revalidated profile");
                }
                Some(user)
            }
            Err(ApiError::Unauthorized) => {
                debug!("stored session rejected during revalidation");
                None
            }
            Err(err) => {
                // Transport trouble is not evidence the session is bad.
                warn!(error = %err, "revalidation failed, trusting stored session");
                Some(session.into_parts().1)
            }
        }
    }

    /// Logs in with student credentials.
    ///
    /// On success the session is persisted and installed, and the user is
    /// returned. On failure an error message is recorded for the views and
    /// the failure is re-raised. `loading` is set for the duration of the
    /// call and reset on both paths.
    ///
    /// # Errors
    ///
    /// Returns the login failure after recording its message.
    pub async fn login(&self, email: &str, password: &str) -> ApplicationResult<User> {
        self.begin_attempt().await;
        match self.api.login(email, password).await {
            Ok(session) => self.adopt(session).await,
            Err(err) => self.reject(err, "Login failed").await,
        }
    }

    /// Logs in with reviewer credentials for an election phase.
    ///
    /// The backend returns a principal without a role; a synthetic
    /// `reviewer` role is stamped before the session is persisted, so role
    /// dispatch lands reviewers on their view.
    ///
    /// # Errors
    ///
    /// Returns the login failure after recording its message.
    pub async fn login_as_reviewer(
        &self,
        username: &str,
        password: &str,
        phase: &str,
    ) -> ApplicationResult<User> {
        self.begin_attempt().await;
        match self.api.reviewer_login(username, password, phase).await {
            Ok(session) => {
                let (token, reviewer) = session.into_parts();
                let stamped = Session::new(token, reviewer.with_role(Role::Reviewer.as_str()));
                self.adopt(stamped).await
            }
            Err(err) => self.reject(err, "Reviewer login failed").await,
        }
    }

    /// Logs out: clears the store and the in-memory user. No network call.
    pub async fn logout(&self) {
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "credential clear failed during logout");
        }
        let mut state = self.state.write().await;
        state.user = None;
        debug!("session cleared");
    }

    /// Replaces the current user and re-persists it with the existing
    /// token.
    ///
    /// Role-change flows (promotion to candidate) call this with the
    /// backend's updated user record; re-authentication is never required.
    ///
    /// # Errors
    ///
    /// Returns an error if re-persisting fails; the in-memory user is
    /// updated regardless.
    pub async fn update_user(&self, user: User) -> ApplicationResult<()> {
        {
            let mut state = self.state.write().await;
            state.user = Some(user.clone());
        }

        match self.store.load().await? {
            Some(session) => {
                self.store.save(&session.with_user(user)).await?;
                Ok(())
            }
            None => {
                warn!("update_user with no persisted credentials");
                Ok(())
            }
        }
    }

    /// True when a user is present.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// The current user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// The full observable state.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.clone()
    }

    /// The three-state machine the route guards consume.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.state()
    }

    /// Marks a login attempt: `loading = true`, previous error cleared.
    async fn begin_attempt(&self) {
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
    }

    /// Persists and installs a freshly authenticated session.
    async fn adopt(&self, session: Session) -> ApplicationResult<User> {
        let saved = self.store.save(&session).await;
        let (_, user) = session.into_parts();

        let mut state = self.state.write().await;
        state.loading = false;
        match saved {
            Ok(()) => {
                state.user = Some(user.clone());
                state.error = None;
                debug!(user = %user.id, "login succeeded");
                Ok(user)
            }
            Err(err) => {
                state.error = Some("Could not persist session".to_string());
                Err(err.into())
            }
        }
    }

    /// Records a login failure and re-raises it.
    async fn reject(&self, err: ApiError, fallback: &str) -> ApplicationResult<User> {
        let message = err.user_message(fallback);
        let mut state = self.state.write().await;
        state.loading = false;
        state.error = Some(message);
        debug!(error = %err, "login failed");
        Err(err.into())
    }
}
