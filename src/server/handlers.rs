use super::page;
use crate::{
    Result,
    report::{ImageSelection, ReportOutcome, ReportRenderer, SessionInput},
};
use axum::{
    extract::{Multipart, State},
    response::Html,
};
use std::sync::Arc;
use tracing::{debug, warn};

pub const CREDENTIAL_FIELD: &str = "api_key";
pub const IMAGE_FIELD: &str = "image";

#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<ReportRenderer>,
    pub default_credential: Arc<str>,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render_index(&state.default_credential))
}

pub async fn report(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let mut input = SessionInput::default();
    let (credential, outcome) = match collect_input(multipart, &mut input).await {
        Ok(()) => {
            let credential = input.credential.clone();
            (credential, state.renderer.render(input).await)
        }
        Err(e) => {
            warn!("Failed to read form submission: {}", e);
            // Keep whatever the user typed if the credential field arrived before the failure
            let credential = if input.credential.is_empty() {
                state.default_credential.to_string()
            } else {
                input.credential
            };
            (
                credential,
                ReportOutcome::Failed {
                    preview: None,
                    message: e.to_string(),
                },
            )
        }
    };

    Html(page::render_result(&credential, &outcome))
}

pub async fn health() -> &'static str {
    "ok"
}

/// Reads the credential and image fields of a form submission into `input`.
/// Unknown fields are skipped. Fields read before an error stay in `input`.
pub async fn collect_input(mut multipart: Multipart, input: &mut SessionInput) -> Result<()> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            CREDENTIAL_FIELD => {
                input.credential = field.text().await?;
            }
            IMAGE_FIELD => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                input.image = ImageSelection::from_upload(&file_name, bytes.to_vec());
            }
            other => {
                debug!("Ignoring form field: {}", other);
            }
        }
    }

    Ok(())
}
