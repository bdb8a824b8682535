use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use tracing::debug;

#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl VisionClient for GeminiClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        debug!(
            "Sending generateContent to model {} with {} image bytes",
            self.model,
            request.image.data.len()
        );

        let body = WireRequest {
            contents: vec![WireContent {
                parts: vec![
                    WirePart::Text {
                        text: request.prompt,
                    },
                    WirePart::InlineData {
                        inline_data: WireBlob {
                            mime_type: request.image.mime_type,
                            data: general_purpose::STANDARD.encode(&request.image.data),
                        },
                    },
                ],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", request.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(Error::llm(format!(
                "API error {}: {}",
                status, response_text
            )));
        }

        let wire: WireResponse = serde_json::from_str(&response_text)?;
        let candidate = wire
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| Error::llm("No candidates in response"))?;

        let texts: Vec<String> = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if texts.is_empty() {
            return Err(Error::llm(format!(
                "No text in response (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        debug!("Received generateContent response");

        Ok(GenerateContentResponse {
            text: texts.concat(),
            model_version: wire.model_version,
            finish_reason: candidate.finish_reason,
        })
    }
}
