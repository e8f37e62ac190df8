//! Guard decisions for the navigation surface.
//!
//! A guard is a pure function of the session state and the requested
//! route. All redirects are expressed as decisions; actually moving is the
//! navigator's job, so every rule here is testable without a UI.

use hustings_domain::{Route, RouteAccess, RouteDecision, SessionState};

/// Consults the guards for one navigation.
///
/// Rules, in order:
/// - open routes (email verification, reviewer login) always render;
/// - while the session is loading, no decision is made;
/// - public routes render only for visitors; an authenticated user is
///   sent to their role's home instead of re-seeing login/register;
/// - protected routes require authentication, and where a role is
///   required, a case-insensitive match on the user's wire role;
/// - the root route is pure role dispatch.
#[must_use]
pub fn decide(state: &SessionState, route: Route) -> RouteDecision {
    match route.access() {
        RouteAccess::Open => RouteDecision::Render(route),

        _ if state.is_loading() => RouteDecision::Pending,

        RouteAccess::Public => match state {
            SessionState::Authenticated { user } => {
                RouteDecision::Redirect(Route::home_for(user.role_kind()))
            }
            _ => RouteDecision::Render(route),
        },

        RouteAccess::Protected { required } => match state {
            SessionState::Authenticated { user } => match required {
                Some(role) if !role.is_named_by(user.role.as_deref()) => {
                    RouteDecision::Redirect(Route::Root)
                }
                _ => RouteDecision::Render(route),
            },
            _ => RouteDecision::Redirect(Route::Login),
        },

        RouteAccess::Dispatch => match state {
            SessionState::Authenticated { user } => {
                RouteDecision::Redirect(Route::home_for(user.role_kind()))
            }
            _ => RouteDecision::Redirect(Route::Login),
        },
    }
}

/// Resolves a raw path: paths outside the route table redirect to root,
/// which then dispatches by role.
#[must_use]
pub fn resolve_path(state: &SessionState, path: &str) -> RouteDecision {
    Route::from_path(path)
        .map_or(RouteDecision::Redirect(Route::Root), |route| {
            decide(state, route)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hustings_domain::User;
    use pretty_assertions::assert_eq;

    fn authed(role: Option<&str>) -> SessionState {
        let mut user = User::new("u1");
        user.role = role.map(str::to_string);
        SessionState::Authenticated { user }
    }

    #[test]
    fn test_loading_makes_no_decision() {
        assert_eq!(
            decide(&SessionState::Loading, Route::Login),
            RouteDecision::Pending
        );
        assert_eq!(
            decide(&SessionState::Loading, Route::SuperadminHome),
            RouteDecision::Pending
        );
    }

    #[test]
    fn test_open_routes_render_even_while_loading() {
        assert_eq!(
            decide(&SessionState::Loading, Route::VerifyEmail),
            RouteDecision::Render(Route::VerifyEmail)
        );
        assert_eq!(
            decide(&SessionState::Unauthenticated, Route::ReviewerLogin),
            RouteDecision::Render(Route::ReviewerLogin)
        );
    }

    #[test]
    fn test_visitor_renders_public_routes() {
        assert_eq!(
            decide(&SessionState::Unauthenticated, Route::Login),
            RouteDecision::Render(Route::Login)
        );
        assert_eq!(
            decide(&SessionState::Unauthenticated, Route::Register),
            RouteDecision::Render(Route::Register)
        );
    }

    #[test]
    fn test_authenticated_candidate_leaves_login() {
        assert_eq!(
            decide(&authed(Some("candidate")), Route::Login),
            RouteDecision::Redirect(Route::CandidateHome)
        );
    }

    #[test]
    fn test_visitor_protected_route_goes_to_login() {
        // Even when the route names a required role, the missing session
        // wins: the redirect is to login, not to root.
        assert_eq!(
            decide(&SessionState::Unauthenticated, Route::SuperadminHome),
            RouteDecision::Redirect(Route::Login)
        );
        assert_eq!(
            decide(&SessionState::Unauthenticated, Route::StudentHome),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_role_mismatch_goes_to_root() {
        assert_eq!(
            decide(&authed(Some("student")), Route::SuperadminHome),
            RouteDecision::Redirect(Route::Root)
        );
        assert_eq!(
            decide(&authed(Some("xyz")), Route::CandidateHome),
            RouteDecision::Redirect(Route::Root)
        );
    }

    #[test]
    fn test_role_match_is_case_insensitive() {
        assert_eq!(
            decide(&authed(Some("Candidate")), Route::CandidateHome),
            RouteDecision::Render(Route::CandidateHome)
        );
        assert_eq!(
            decide(&authed(Some("SUPERADMIN")), Route::SuperadminHome),
            RouteDecision::Render(Route::SuperadminHome)
        );
    }

    #[test]
    fn test_any_role_routes_admit_everyone_authenticated() {
        assert_eq!(
            decide(&authed(Some("candidate")), Route::StudentHome),
            RouteDecision::Render(Route::StudentHome)
        );
        assert_eq!(
            decide(&authed(None), Route::ReviewerHome),
            RouteDecision::Render(Route::ReviewerHome)
        );
    }

    #[test]
    fn test_root_dispatches_by_role() {
        assert_eq!(
            decide(&authed(Some("SUPERADMIN")), Route::Root),
            RouteDecision::Redirect(Route::SuperadminHome)
        );
        assert_eq!(
            decide(&authed(Some("Candidate")), Route::Root),
            RouteDecision::Redirect(Route::CandidateHome)
        );
        assert_eq!(
            decide(&authed(Some("reviewer")), Route::Root),
            RouteDecision::Redirect(Route::ReviewerHome)
        );
        // Unknown and absent roles land on the student view.
        assert_eq!(
            decide(&authed(Some("xyz")), Route::Root),
            RouteDecision::Redirect(Route::StudentHome)
        );
        assert_eq!(
            decide(&authed(None), Route::Root),
            RouteDecision::Redirect(Route::StudentHome)
        );
    }

    #[test]
    fn test_root_without_session_goes_to_login() {
        assert_eq!(
            decide(&SessionState::Unauthenticated, Route::Root),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_unknown_path_redirects_to_root() {
        assert_eq!(
            resolve_path(&authed(Some("student")), "/no-such-page"),
            RouteDecision::Redirect(Route::Root)
        );
        assert_eq!(
            resolve_path(&SessionState::Unauthenticated, "/login"),
            RouteDecision::Render(Route::Login)
        );
    }
}
