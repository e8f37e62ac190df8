//! Integration tests for the session core: hydration from disk, the login
//! flows, route guarding, and the forced-logout path, all over the real
//! file-backed credential store.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::tempdir;

use hustings_application::ports::{ApiError, AuthApi, CredentialStore};
use hustings_application::{AppShell, GatewayEvent, GatewayEvents, SessionService};
use hustings_domain::{Role, Route, RouteDecision, Session, User};
use hustings_infrastructure::{FileCredentialStore, TokioFileSystem};

/// Scripted stand-in for the backend auth endpoints.
#[derive(Debug, Default)]
struct ScriptedApi {
    login: Option<Result<Session, ApiError>>,
    reviewer_login: Option<Result<Session, ApiError>>,
    profile: Option<Result<User, ApiError>>,
}

#[async_trait]
impl AuthApi for ScriptedApi {
    async fn login(&self, _email: &str, _password: &str) -> Result<Session, ApiError> {
        self.login.clone().expect("login not scripted")
    }

    async fn reviewer_login(
        &self,
        _username: &str,
        _password: &str,
        _phase: &str,
    ) -> Result<Session, ApiError> {
        self.reviewer_login.clone().expect("reviewer login not scripted")
    }

    async fn profile(&self) -> Result<User, ApiError> {
        self.profile.clone().expect("profile not scripted")
    }
}

fn store_at(dir: &Path) -> FileCredentialStore<TokioFileSystem> {
    FileCredentialStore::new(TokioFileSystem::new(), dir.join("credentials.json"))
}

fn shell_with(
    store: FileCredentialStore<TokioFileSystem>,
    api: ScriptedApi,
    events: GatewayEvents,
) -> Arc<AppShell<FileCredentialStore<TokioFileSystem>, ScriptedApi>> {
    let session = Arc::new(SessionService::new(store, api));
    Arc::new(AppShell::new(session, events))
}

fn candidate_session() -> Session {
    Session::new(
        "tok-cand".to_string(),
        User::new("u1").with_name("Grace").with_role("candidate"),
    )
}

#[tokio::test]
async fn test_cold_start_lands_on_login() {
    let dir = tempdir().expect("temp dir");
    let shell = shell_with(store_at(dir.path()), ScriptedApi::default(), GatewayEvents::default());

    shell.start().await;

    assert_eq!(shell.current_route().await, Route::Login);
    assert!(!shell.session().is_authenticated().await);
}

#[tokio::test]
async fn test_stored_session_lands_on_role_home() {
    let dir = tempdir().expect("temp dir");
    let store = store_at(dir.path());
    store.save(&candidate_session()).await.unwrap();

    let shell = shell_with(store, ScriptedApi::default(), GatewayEvents::default());
    shell.start().await;

    // Trust-on-read: no backend call happened, yet the session is live.
    assert_eq!(shell.current_route().await, Route::CandidateHome);

    // A logged-in candidate cannot re-see the login page.
    let decision = shell.navigate("/login").await;
    assert_eq!(decision, RouteDecision::Render(Route::CandidateHome));
}

#[tokio::test]
async fn test_protected_route_requires_login_first() {
    let dir = tempdir().expect("temp dir");
    let shell = shell_with(store_at(dir.path()), ScriptedApi::default(), GatewayEvents::default());
    shell.start().await;

    // The missing session wins over the role requirement: the visitor is
    // sent to login, not to the root dispatcher.
    let decision = shell.navigate("/superadmin").await;
    assert_eq!(decision, RouteDecision::Render(Route::Login));
}

#[tokio::test]
async fn test_login_persists_across_restart() {
    let dir = tempdir().expect("temp dir");
    let api = ScriptedApi {
        login: Some(Ok(candidate_session())),
        ..ScriptedApi::default()
    };
    let shell = shell_with(store_at(dir.path()), api, GatewayEvents::default());
    shell.start().await;

    let user = shell.session().login("grace@campus.edu", "pw").await.unwrap();
    assert_eq!(user.role_kind(), Role::Candidate);
    assert_eq!(
        shell.navigate("/").await,
        RouteDecision::Render(Route::CandidateHome)
    );

    // A second process sees the same credentials.
    let restarted = store_at(dir.path());
    let stored = restarted.load().await.unwrap().expect("stored session");
    assert_eq!(stored.token(), "tok-cand");
    assert_eq!(stored.user().id, "u1");
}

#[tokio::test]
async fn test_logout_clears_persisted_credentials() {
    let dir = tempdir().expect("temp dir");
    let store = store_at(dir.path());
    store.save(&candidate_session()).await.unwrap();

    let shell = shell_with(store, ScriptedApi::default(), GatewayEvents::default());
    shell.start().await;
    shell.session().logout().await;

    assert!(!shell.session().is_authenticated().await);
    assert_eq!(store_at(dir.path()).load().await.unwrap(), None);
}

#[tokio::test]
async fn test_corrupt_credential_file_degrades_to_login() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("credentials.json"), b"{ definitely not json")
        .expect("write corrupt file");

    let shell = shell_with(store_at(dir.path()), ScriptedApi::default(), GatewayEvents::default());
    shell.start().await;

    assert!(!shell.session().is_authenticated().await);
    assert_eq!(shell.current_route().await, Route::Login);
}

#[tokio::test]
async fn test_unauthorized_event_returns_to_login() {
    let dir = tempdir().expect("temp dir");
    let store = store_at(dir.path());
    store.save(&candidate_session()).await.unwrap();

    let events = GatewayEvents::default();
    let shell = shell_with(store.clone(), ScriptedApi::default(), events.clone());
    shell.start().await;
    assert_eq!(shell.current_route().await, Route::CandidateHome);

    let loop_handle = {
        let shell = Arc::clone(&shell);
        tokio::spawn(async move { shell.run().await })
    };

    // What the gateway does when a non-login endpoint answers 401: clear
    // the store, then emit the event.
    store.clear().await.unwrap();
    events.emit(GatewayEvent::Unauthorized {
        path: "/nominations".to_string(),
    });

    // Give the shell loop a moment to consume the event.
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        if shell.current_route().await == Route::Login {
            break;
        }
        assert!(tokio::time::Instant::now() < deadline, "shell never navigated to login");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert!(!shell.session().is_authenticated().await);
    assert_eq!(store_at(dir.path()).load().await.unwrap(), None);
    loop_handle.abort();
}

#[tokio::test]
async fn test_reviewer_login_lands_on_reviewer_home() {
    let dir = tempdir().expect("temp dir");
    // The backend's reviewer principal has no role field.
    let api = ScriptedApi {
        reviewer_login: Some(Ok(Session::new(
            "tok-rev".to_string(),
            User::new("r1").with_name("Panel A"),
        ))),
        ..ScriptedApi::default()
    };
    let shell = shell_with(store_at(dir.path()), api, GatewayEvents::default());
    shell.start().await;

    let reviewer = shell
        .session()
        .login_as_reviewer("panel-a", "pw", "phase1")
        .await
        .unwrap();
    assert_eq!(reviewer.role_kind(), Role::Reviewer);
    assert_eq!(
        shell.navigate("/").await,
        RouteDecision::Render(Route::ReviewerHome)
    );
}
