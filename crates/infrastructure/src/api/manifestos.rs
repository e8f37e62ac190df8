//! Manifesto endpoints.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use hustings_application::ports::{ApiError, CancellationToken, CredentialStore};
use hustings_domain::Manifesto;

use crate::http::ApiGateway;

/// Client for the `/manifestos` endpoints.
#[derive(Debug, Clone)]
pub struct ManifestosClient<S> {
    gateway: Arc<ApiGateway<S>>,
}

/// The backend answers with `{ data, manifesto }` on some deployments; the
/// explicit key wins when both are present.
#[derive(Deserialize)]
struct ManifestoEnvelope {
    #[serde(default)]
    manifesto: Option<Manifesto>,
    #[serde(default)]
    data: Option<Manifesto>,
}

impl ManifestoEnvelope {
    fn into_manifesto(self) -> Option<Manifesto> {
        self.manifesto.or(self.data)
    }
}

impl<S: CredentialStore> ManifestosClient<S> {
    /// Creates the client over a shared gateway.
    #[must_use]
    pub fn new(gateway: Arc<ApiGateway<S>>) -> Self {
        Self { gateway }
    }

    /// Uploads a manifesto PDF for an election phase.
    ///
    /// Only PDFs are accepted; the check runs client-side so a wrong file
    /// never leaves the machine.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not a PDF, the upload window is
    /// closed, or the call fails.
    pub async fn upload(
        &self,
        file_name: &str,
        contents: Vec<u8>,
        phase: &str,
    ) -> Result<Option<Manifesto>, ApiError> {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        if mime != mime::APPLICATION_PDF {
            return Err(ApiError::InvalidRequest(format!(
                "manifesto must be a PDF, got {mime}"
            )));
        }
        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(mime.as_ref())
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        let form = Form::new()
            .part("manifesto", part)
            .text("phase", phase.to_string());

        let envelope: ManifestoEnvelope = self
            .gateway
            .post_multipart("/manifestos/upload", form, None)
            .await?;
        Ok(envelope.into_manifesto())
    }

    /// Fetches the manifesto for a nomination and phase, or `None` before
    /// one has been uploaded.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than the backend's 404 for
    /// "no upload yet".
    pub async fn for_nomination(
        &self,
        nomination_id: &str,
        phase: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Manifesto>, ApiError> {
        match self
            .gateway
            .get::<ManifestoEnvelope>(&format!("/manifestos/{nomination_id}/{phase}"), cancel)
            .await
        {
            Ok(envelope) => Ok(envelope.into_manifesto()),
            Err(ApiError::Status { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Fetches the PDF bytes of a manifesto for viewing.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn view(
        &self,
        manifesto_id: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<u8>, ApiError> {
        self.gateway
            .get_bytes(&format!("/manifestos/view/{manifesto_id}"), cancel)
            .await
    }
}
