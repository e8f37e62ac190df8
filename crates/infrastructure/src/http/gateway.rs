//! The API gateway.
//!
//! Every outbound request is decorated with the bearer token read fresh
//! from the credential store at request time, so a logout/login between
//! calls is reflected immediately. A 401 from any endpoint except a login
//! endpoint tears the session down: the store is cleared and a typed
//! `Unauthorized` event is emitted for the app shell. The gateway itself
//! never navigates.

use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use hustings_application::ports::{ApiError, CancellationToken, CredentialStore};
use hustings_application::{GatewayEvent, GatewayEvents};
use hustings_domain::ClientSettings;

/// Single egress point for all backend calls.
#[derive(Debug, Clone)]
pub struct ApiGateway<S> {
    client: Client,
    base_url: String,
    store: S,
    events: GatewayEvents,
}

impl<S: CredentialStore> ApiGateway<S> {
    /// Creates a gateway for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(
        settings: &ClientSettings,
        store: S,
        events: GatewayEvents,
    ) -> Result<Self, ApiError> {
        let base = Url::parse(&settings.api_base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid base URL: {e}")))?;

        let client = Client::builder()
            .user_agent("Hustings/0.1.0")
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base.as_str().trim_end_matches('/').to_string(),
            store,
            events,
        })
    }

    /// GET returning a decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<T, ApiError> {
        let builder = self.request_builder(Method::GET, path)?;
        self.execute(builder, path, cancel).await
    }

    /// GET returning the raw body bytes (PDF views, CSV exports).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_bytes(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<u8>, ApiError> {
        let builder = self.request_builder(Method::GET, path)?;
        self.dispatch(builder, path, cancel).await
    }

    /// POST with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        cancel: Option<&CancellationToken>,
    ) -> Result<T, ApiError> {
        let builder = self.request_builder(Method::POST, path)?.json(body);
        self.execute(builder, path, cancel).await
    }

    /// POST without a body (submit, become-candidate).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<T, ApiError> {
        let builder = self.request_builder(Method::POST, path)?;
        self.execute(builder, path, cancel).await
    }

    /// POST with a multipart form (manifesto upload).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
        cancel: Option<&CancellationToken>,
    ) -> Result<T, ApiError> {
        let builder = self.request_builder(Method::POST, path)?.multipart(form);
        self.execute(builder, path, cancel).await
    }

    /// PUT with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        cancel: Option<&CancellationToken>,
    ) -> Result<T, ApiError> {
        let builder = self.request_builder(Method::PUT, path)?.json(body);
        self.execute(builder, path, cancel).await
    }

    /// PUT without a body (accept/reject flows).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<T, ApiError> {
        let builder = self.request_builder(Method::PUT, path)?;
        self.execute(builder, path, cancel).await
    }

    fn request_builder(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| ApiError::InvalidRequest(format!("{e}: {path}")))?;
        Ok(self.client.request(method, url))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<T, ApiError> {
        let bytes = self.dispatch(builder, path, cancel).await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Sends the request, racing it against the cancellation token when
    /// one is supplied. A cancelled call never observes its response.
    async fn dispatch(
        &self,
        builder: RequestBuilder,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<u8>, ApiError> {
        match cancel {
            None => self.send(builder, path).await,
            Some(token) => tokio::select! {
                () = token.cancelled() => {
                    debug!(path, "request cancelled");
                    Err(ApiError::Cancelled)
                }
                result = self.send(builder, path) => result,
            },
        }
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> Result<Vec<u8>, ApiError> {
        let builder = self.authorize(builder).await;
        let response = builder.send().await.map_err(map_transport_error)?;
        self.check(response, path).await
    }

    /// Attaches the bearer token, read fresh from the store.
    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.store.load().await {
            Ok(Some(session)) => builder.bearer_auth(session.token()),
            Ok(None) => builder,
            Err(err) => {
                warn!(error = %err, "credential read failed, sending unauthenticated");
                builder
            }
        }
    }

    async fn check(&self, response: Response, path: &str) -> Result<Vec<u8>, ApiError> {
        let status = response.status();

        if should_intercept(status, path) {
            warn!(path, "authorization rejected, tearing down session");
            self.force_logout(path).await;
            return Err(ApiError::Unauthorized);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?
            .to_vec();

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: extract_message(&bytes),
            });
        }

        Ok(bytes)
    }

    /// Clears the store and notifies the shell. Navigation happens in the
    /// subscriber, never here.
    async fn force_logout(&self, path: &str) {
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "credential clear failed during forced logout");
        }
        self.events.emit(GatewayEvent::Unauthorized {
            path: path.to_string(),
        });
    }
}

/// True when a 401 on `path` must tear the session down.
///
/// Login endpoints are excluded: a failed login is a credential error for
/// the caller, and intercepting it would turn every typo into a forced
/// logout loop.
fn should_intercept(status: StatusCode, path: &str) -> bool {
    status == StatusCode::UNAUTHORIZED && !is_login_path(path)
}

fn is_login_path(path: &str) -> bool {
    path.contains("/login")
}

/// Pulls the backend's `message` field out of a JSON error body.
fn extract_message(bytes: &[u8]) -> Option<String> {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Network(format!("request timed out: {err}"))
    } else if err.is_connect() {
        ApiError::Network(format!("connection failed: {err}"))
    } else {
        ApiError::Network(err.to_string())
    }
}
