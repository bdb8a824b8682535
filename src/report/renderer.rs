use super::{COACH_PROMPT, ImageSelection, ImageUpload, SessionInput, contains_marker};
use crate::{
    Error, Result,
    llm::{GenerateContentRequest, InlineImage, VisionClient},
};
use base64::{Engine as _, engine::general_purpose};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

/// The uploaded image, echoed back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// What the page shows after one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    MissingCredential,
    MissingImage,
    UnsupportedFormat {
        file_name: String,
    },
    Completed {
        preview: ImagePreview,
        text: String,
        flagged: bool,
    },
    /// `preview` is set when the image decoded before the failure.
    Failed {
        preview: Option<ImagePreview>,
        message: String,
    },
}

pub struct ReportRenderer {
    client: Arc<dyn VisionClient>,
}

impl ReportRenderer {
    pub fn new(client: Arc<dyn VisionClient>) -> Self {
        Self { client }
    }

    pub async fn render(&self, input: SessionInput) -> ReportOutcome {
        if input.credential.trim().is_empty() {
            return ReportOutcome::MissingCredential;
        }

        let upload = match input.image {
            ImageSelection::None => return ReportOutcome::MissingImage,
            ImageSelection::Unsupported { file_name } => {
                return ReportOutcome::UnsupportedFormat { file_name };
            }
            ImageSelection::Accepted(upload) => upload,
        };

        let run_id = Uuid::new_v4();
        let span = info_span!("report", %run_id, format = %upload.format);

        async move {
            info!("Generating report for {} ({} bytes)", upload.file_name, upload.bytes.len());

            let preview = match build_preview(&upload) {
                Ok(preview) => preview,
                Err(e) => return failed(None, e),
            };

            match self.generate(input.credential, upload).await {
                Ok(text) => {
                    let flagged = contains_marker(&text);
                    info!(flagged, "Report generated");
                    ReportOutcome::Completed {
                        preview,
                        text,
                        flagged,
                    }
                }
                Err(e) => failed(Some(preview), e),
            }
        }
        .instrument(span)
        .await
    }

    async fn generate(&self, credential: String, upload: ImageUpload) -> Result<String> {
        let response = self
            .client
            .generate_content(GenerateContentRequest {
                api_key: credential,
                prompt: COACH_PROMPT.to_string(),
                image: InlineImage {
                    mime_type: upload.format.mime_type().to_string(),
                    data: upload.bytes,
                },
            })
            .await?;

        Ok(response.text)
    }
}

/// Decodes the upload to prove it is an image; the preview keeps the original bytes.
fn build_preview(upload: &ImageUpload) -> Result<ImagePreview> {
    let decoded = image::load_from_memory(&upload.bytes)?;
    Ok(ImagePreview {
        data_url: format!(
            "data:{};base64,{}",
            upload.format.mime_type(),
            general_purpose::STANDARD.encode(&upload.bytes)
        ),
        width: decoded.width(),
        height: decoded.height(),
    })
}

fn failed(preview: Option<ImagePreview>, e: Error) -> ReportOutcome {
    error!("Report generation failed: {}", e);
    ReportOutcome::Failed {
        preview,
        message: e.to_string(),
    }
}
