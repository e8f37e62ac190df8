//! The app shell: navigation plus gateway-event handling.
//!
//! The shell is the single subscriber of gateway events. When the gateway
//! reports an authorization rejection it has already cleared the
//! credential store; the shell finishes the job by dropping the in-memory
//! session and navigating to the login view. Keeping that translation here
//! leaves the networking layer with no navigation concerns at all.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use hustings_domain::{Route, RouteDecision, SessionState};

use crate::events::{GatewayEvent, GatewayEvents};
use crate::ports::{AuthApi, CredentialStore};
use crate::routing;
use crate::session::SessionService;

/// Tracks the current route and applies guard decisions.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    /// Creates a navigator parked on the root route.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Route::Root,
        }
    }

    /// The route currently rendered.
    #[must_use]
    pub const fn current(&self) -> Route {
        self.current
    }

    /// Navigates to `path`, following redirect decisions until a route
    /// renders.
    ///
    /// Redirect chains are short (at most unknown path → root → role
    /// home); the hop bound only guards against a future cycle in the
    /// route table. A `Pending` decision leaves the current route in
    /// place.
    pub fn go(&mut self, state: &SessionState, path: &str) -> RouteDecision {
        let mut decision = routing::resolve_path(state, path);
        for _ in 0..4 {
            match decision {
                RouteDecision::Redirect(next) => decision = routing::decide(state, next),
                _ => break,
            }
        }

        if let RouteDecision::Render(route) = decision {
            debug!(from = %self.current, to = %route, "navigated");
            self.current = route;
        }
        decision
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level shell tying the session service, the navigator, and the
/// gateway event stream together.
pub struct AppShell<C, A> {
    session: Arc<SessionService<C, A>>,
    navigator: RwLock<Navigator>,
    events: GatewayEvents,
}

impl<C: CredentialStore, A: AuthApi> AppShell<C, A> {
    /// Creates the shell. Call [`start`] before navigating.
    ///
    /// [`start`]: Self::start
    pub fn new(session: Arc<SessionService<C, A>>, events: GatewayEvents) -> Self {
        Self {
            session,
            navigator: RwLock::new(Navigator::new()),
            events,
        }
    }

    /// The session service the shell drives.
    #[must_use]
    pub fn session(&self) -> &Arc<SessionService<C, A>> {
        &self.session
    }

    /// Hydrates the session and resolves the landing route.
    pub async fn start(&self) {
        self.session.initialize().await;
        self.navigate(Route::Root.path()).await;
    }

    /// Navigates to `path` under the current session state.
    pub async fn navigate(&self, path: &str) -> RouteDecision {
        let state = self.session.state().await;
        self.navigator.write().await.go(&state, path)
    }

    /// The route currently rendered.
    pub async fn current_route(&self) -> Route {
        self.navigator.read().await.current()
    }

    /// Consumes gateway events until the channel closes.
    ///
    /// Run this alongside the UI loop; it resolves only when every event
    /// sender has been dropped.
    pub async fn run(&self) {
        let mut rx = self.events.subscribe();
        loop {
            match rx.recv().await {
                Ok(event) => self.handle_event(event).await,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "gateway event stream lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    async fn handle_event(&self, event: GatewayEvent) {
        match event {
            GatewayEvent::Unauthorized { path } => {
                info!(path, "session rejected by backend, returning to login");
                // The gateway already cleared the store; drop the
                // in-memory user too, then land on login.
                self.session.logout().await;
                self.navigate(Route::Login.path()).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hustings_domain::User;
    use pretty_assertions::assert_eq;

    fn authed(role: &str) -> SessionState {
        SessionState::Authenticated {
            user: User::new("u1").with_role(role),
        }
    }

    #[test]
    fn test_visitor_lands_on_login_from_root() {
        let mut navigator = Navigator::new();
        let decision = navigator.go(&SessionState::Unauthenticated, "/");
        assert_eq!(decision, RouteDecision::Render(Route::Login));
        assert_eq!(navigator.current(), Route::Login);
    }

    #[test]
    fn test_candidate_visiting_login_lands_home() {
        let mut navigator = Navigator::new();
        let decision = navigator.go(&authed("candidate"), "/login");
        assert_eq!(decision, RouteDecision::Render(Route::CandidateHome));
        assert_eq!(navigator.current(), Route::CandidateHome);
    }

    #[test]
    fn test_unknown_path_resolves_through_root() {
        let mut navigator = Navigator::new();
        let decision = navigator.go(&authed("SUPERADMIN"), "/no-such-page");
        assert_eq!(decision, RouteDecision::Render(Route::SuperadminHome));
    }

    #[test]
    fn test_pending_keeps_current_route() {
        let mut navigator = Navigator::new();
        navigator.go(&SessionState::Unauthenticated, "/login");
        let decision = navigator.go(&SessionState::Loading, "/student");
        assert_eq!(decision, RouteDecision::Pending);
        assert_eq!(navigator.current(), Route::Login);
    }
}
