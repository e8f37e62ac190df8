//! The navigation surface: routes, access categories, and guard decisions.

use crate::role::Role;

/// The portal's top-level routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Role dispatch with no content of its own.
    Root,
    /// Student/credential login form.
    Login,
    /// Registration form (email-link flow entry).
    Register,
    /// Password reset request form.
    ForgotPassword,
    /// Email-link verification landing page.
    VerifyEmail,
    /// Reviewer credential login form.
    ReviewerLogin,
    /// Student landing view.
    StudentHome,
    /// Candidate landing view.
    CandidateHome,
    /// Reviewer landing view.
    ReviewerHome,
    /// Superadmin landing view.
    SuperadminHome,
}

/// Access category of a route, mirroring the five categories of the
/// navigation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Renders only while unauthenticated; authenticated visitors are
    /// redirected to their role's home.
    Public,
    /// Always renders regardless of session state (email verification,
    /// reviewer login).
    Open,
    /// Requires authentication; `required` further restricts by role.
    Protected {
        /// Role required to render, or `None` for any authenticated role.
        required: Option<Role>,
    },
    /// The root route: pure role dispatch.
    Dispatch,
}

/// Outcome of a guard consultation for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session is still loading; render a neutral wait state, decide
    /// nothing.
    Pending,
    /// Render the requested route.
    Render(Route),
    /// Navigate to another route instead.
    Redirect(Route),
}

impl Route {
    /// The canonical path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
            Self::VerifyEmail => "/verify-email",
            Self::ReviewerLogin => "/reviewer/login",
            Self::StudentHome => "/student",
            Self::CandidateHome => "/candidate",
            Self::ReviewerHome => "/reviewer",
            Self::SuperadminHome => "/superadmin",
        }
    }

    /// Resolves a path to a route, or `None` for paths outside the table.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        match path {
            "/" => Some(Self::Root),
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/forgot-password" => Some(Self::ForgotPassword),
            "/verify-email" => Some(Self::VerifyEmail),
            "/reviewer/login" => Some(Self::ReviewerLogin),
            "/student" => Some(Self::StudentHome),
            "/candidate" => Some(Self::CandidateHome),
            "/reviewer" => Some(Self::ReviewerHome),
            "/superadmin" => Some(Self::SuperadminHome),
            _ => None,
        }
    }

    /// The access category this route is gated by.
    #[must_use]
    pub const fn access(self) -> RouteAccess {
        match self {
            Self::Root => RouteAccess::Dispatch,
            Self::Login | Self::Register | Self::ForgotPassword => RouteAccess::Public,
            Self::VerifyEmail | Self::ReviewerLogin => RouteAccess::Open,
            Self::StudentHome | Self::ReviewerHome => RouteAccess::Protected { required: None },
            Self::CandidateHome => RouteAccess::Protected {
                required: Some(Role::Candidate),
            },
            Self::SuperadminHome => RouteAccess::Protected {
                required: Some(Role::Superadmin),
            },
        }
    }

    /// The landing view for a role. Exhaustive, default-last: anything that
    /// is not superadmin, candidate, or reviewer lands on the student view.
    #[must_use]
    pub const fn home_for(role: Role) -> Self {
        match role {
            Role::Superadmin => Self::SuperadminHome,
            Role::Candidate => Self::CandidateHome,
            Role::Reviewer => Self::ReviewerHome,
            Role::Student => Self::StudentHome,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
