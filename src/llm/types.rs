use serde::{Deserialize, Serialize};
use std::fmt;

/// One multimodal generation call: a text instruction plus a single image.
#[derive(Clone)]
pub struct GenerateContentRequest {
    pub api_key: String,
    pub prompt: String,
    pub image: InlineImage,
}

// Never print the credential.
impl fmt::Debug for GenerateContentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateContentRequest")
            .field("api_key", &"[REDACTED]")
            .field("prompt", &self.prompt)
            .field("image", &self.image)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl fmt::Debug for InlineImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineImage")
            .field("mime_type", &self.mime_type)
            .field("data", &format_args!("{} bytes", self.data.len()))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct GenerateContentResponse {
    pub text: String,
    pub model_version: Option<String>,
    pub finish_reason: Option<String>,
}

// Wire format of the generateContent endpoint.

#[derive(Debug, Serialize)]
pub(crate) struct WireRequest {
    pub contents: Vec<WireContent>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireContent {
    pub parts: Vec<WirePart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum WirePart {
    Text { text: String },
    InlineData { inline_data: WireBlob },
}

#[derive(Debug, Serialize)]
pub(crate) struct WireBlob {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireResponse {
    #[serde(default)]
    pub candidates: Vec<WireCandidate>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireCandidate {
    #[serde(default)]
    pub content: Option<WireResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResponseContent {
    #[serde(default)]
    pub parts: Vec<WireResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}
