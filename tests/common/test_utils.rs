use coach_report::{
    Result,
    report::{ImageSelection, ReportRenderer, SessionInput},
    server::AppState,
};
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

use super::mocks::MockVisionClient;

pub const MULTIPART_BOUNDARY: &str = "coach-report-test-boundary";

pub const PLAIN_REPORT: &str = "**2024-05-12 | Bike**\n* **Stats:** 40 km | 1:10:00 | 34.3 km/h | 142 bpm | 210 W\n\n**Mechanical & Physio Check (CRITICAL):**\n* **L/R Balance:** 50/50\n* **Cadence:** 88\n* **TSS/Load:** 75\n* **Equipment:** N/A\n";

pub const FLAGGED_REPORT: &str = "**2024-05-12 | Bike**\n* **L/R Balance:** 55/45. **FLAG: Imbalance Detected**\n* **Cadence:** 90\n";

/// Encodes a tiny solid image in the given format.
pub fn sample_image(format: ImageFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, image::Rgb([200, 40, 40])));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .expect("Failed to encode sample image");
    bytes
}

/// PNG of pseudo-random pixels; barely compresses, so the size tracks the dimensions.
pub fn noisy_png(width: u32, height: u32) -> Vec<u8> {
    let mut state: u32 = 0x2545_f491;
    let image = RgbImage::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let [r, g, b, _] = state.to_le_bytes();
        image::Rgb([r, g, b])
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode noisy image");
    bytes
}

pub fn sample_png() -> Vec<u8> {
    sample_image(ImageFormat::Png)
}

pub fn session_input(credential: &str, file_name: &str, bytes: Vec<u8>) -> SessionInput {
    SessionInput {
        credential: credential.to_string(),
        image: ImageSelection::from_upload(file_name, bytes),
    }
}

pub fn create_test_state(client: MockVisionClient, default_credential: &str) -> AppState {
    AppState {
        renderer: Arc::new(ReportRenderer::new(Arc::new(client))),
        default_credential: Arc::from(default_credential),
    }
}

/// Builds a multipart/form-data body. `image` is (file name, bytes).
pub fn multipart_body(credential: Option<&str>, image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some(credential) = credential {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"api_key\"\r\n\r\n");
        body.extend_from_slice(credential.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((file_name, bytes)) = image {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\n",
                file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}

/// Extracts the contents of the report `<pre>` block and reverses the HTML escaping.
pub fn report_block_text(html: &str) -> Option<String> {
    let start = html.find(r#"<pre class="report">"#)? + r#"<pre class="report">"#.len();
    let end = start + html[start..].find("</pre>")?;
    Some(
        html[start..end]
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&"),
    )
}

/// Multipart body cut off in the middle of the image part, after the credential.
pub fn truncated_multipart_body(credential: &str) -> Vec<u8> {
    let mut body = multipart_body(Some(credential), Some(("ride.png", &sample_png()[..])));
    body.truncate(body.len() - 40);
    body
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"

llm:
  provider: "gemini"
  base_url: "http://localhost:4010"
  model: "gemini-1.5-pro"
  api_key_env: "COACH_REPORT_KEY"
"#;

pub const PARTIAL_CONFIG_YAML: &str = r#"
server:
  port: 9100
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
