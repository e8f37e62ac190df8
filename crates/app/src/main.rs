//! Hustings - Main Entry Point
//!
//! Wires the file-backed stores, the API gateway, and the session service
//! together, hydrates the session, and runs the shell's event loop until
//! interrupted.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use hustings_application::{AppShell, GatewayEvents, SessionService};
use hustings_infrastructure::{
    ApiGateway, AuthClient, FileCredentialStore, FileSettingsRepository, TokioFileSystem,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let fs = TokioFileSystem::new();
    let settings = FileSettingsRepository::at_default_location(fs.clone())
        .load()
        .await;
    info!(base_url = %settings.api_base_url, "starting hustings client");

    let store = FileCredentialStore::at_default_location(fs);
    let events = GatewayEvents::default();
    let gateway = Arc::new(ApiGateway::new(&settings, store.clone(), events.clone())?);
    let auth = AuthClient::new(Arc::clone(&gateway));

    let session = Arc::new(
        SessionService::new(store, auth).with_revalidation(settings.revalidate_on_start),
    );
    let shell = AppShell::new(session, events);

    shell.start().await;
    info!(route = %shell.current_route().await, "session hydrated, landing route resolved");

    tokio::select! {
        () = shell.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
        }
    }

    Ok(())
}
