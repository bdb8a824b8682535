use super::handlers::{CREDENTIAL_FIELD, IMAGE_FIELD};
use crate::report::{ACCEPTED_EXTENSIONS, ImagePreview, ReportOutcome};

pub const MISSING_CREDENTIAL_PROMPT: &str =
    "Please enter your Gemini API Key in the sidebar to proceed.";
pub const MISSING_IMAGE_PROMPT: &str = "Please upload a workout screenshot to generate a report.";
pub const SUCCESS_BANNER: &str = "Analysis Complete!";
pub const IMBALANCE_BANNER: &str =
    "Mechanical Issue Detected (L/R Balance or Drag). Check the summary.";

const STYLE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; display: flex; min-height: 100vh; color: #262730; }
aside { width: 280px; background: #f0f2f6; padding: 24px; box-sizing: border-box; }
main { flex: 1; max-width: 730px; margin: 0 auto; padding: 32px 24px; }
label { display: block; font-size: 0.9em; margin: 12px 0 4px; }
input[type=password] { width: 100%; padding: 6px; box-sizing: border-box; }
.help { font-size: 0.8em; color: #808495; }
.caption { color: #808495; }
.banner { padding: 12px 16px; border-radius: 6px; margin: 16px 0; }
.success { background: #dff5e3; color: #177233; }
.warning { background: #fffbe6; color: #926c05; }
.error { background: #ffe9e9; color: #a51d1d; }
pre.report { background: #f0f2f6; padding: 16px; border-radius: 6px; white-space: pre-wrap; font-family: 'Source Code Pro', monospace; }
figure { margin: 16px 0; }
figure img { max-width: 100%; height: auto; }
figcaption { text-align: center; color: #808495; font-size: 0.9em; }
"#;

/// Escapes text for safe inclusion in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_index(credential: &str) -> String {
    if credential.is_empty() {
        return layout(credential, &banner("warning", MISSING_CREDENTIAL_PROMPT));
    }
    layout(credential, "")
}

pub fn render_result(credential: &str, outcome: &ReportOutcome) -> String {
    layout(credential, &render_outcome(outcome))
}

fn render_outcome(outcome: &ReportOutcome) -> String {
    match outcome {
        ReportOutcome::MissingCredential => banner("warning", MISSING_CREDENTIAL_PROMPT),
        ReportOutcome::MissingImage => banner("warning", MISSING_IMAGE_PROMPT),
        ReportOutcome::UnsupportedFormat { file_name } => banner(
            "warning",
            &format!(
                "{} is not a supported image. Accepted formats: {}.",
                file_name,
                ACCEPTED_EXTENSIONS.join(", ")
            ),
        ),
        ReportOutcome::Completed {
            preview,
            text,
            flagged,
        } => {
            let mut html = figure(preview);
            html.push_str(&banner("success", SUCCESS_BANNER));
            html.push_str("<h3>Copy This Text</h3>");
            html.push_str(&format!(r#"<pre class="report">{}</pre>"#, escape_html(text)));
            if *flagged {
                html.push_str(&banner("error", IMBALANCE_BANNER));
            }
            html
        }
        ReportOutcome::Failed { preview, message } => {
            let mut html = preview.as_ref().map(figure).unwrap_or_default();
            html.push_str(&banner("error", &format!("Error: {}", message)));
            html
        }
    }
}

fn figure(preview: &ImagePreview) -> String {
    format!(
        r#"<figure><img src="{}" width="{}" height="{}" alt="Uploaded Screenshot"><figcaption>Uploaded Screenshot</figcaption></figure>"#,
        escape_html(&preview.data_url),
        preview.width,
        preview.height
    )
}

fn banner(kind: &str, message: &str) -> String {
    format!(
        r#"<div class="banner {}">{}</div>"#,
        kind,
        escape_html(message)
    )
}

fn layout(credential: &str, body: &str) -> String {
    let accept = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Coach Report Generator</title>
<style>{style}</style>
</head>
<body>
<form method="post" action="/report" enctype="multipart/form-data" style="display: contents">
<aside>
<h2>Settings</h2>
<label for="{credential_field}">Gemini API Key</label>
<input type="password" id="{credential_field}" name="{credential_field}" value="{credential}">
<div class="help">Get your key from Google AI Studio</div>
<hr>
<p><strong>Optimization Focus:</strong><br>This tool specifically scans for:</p>
<ul>
<li><strong>L/R Imbalance</strong> (&gt;52/48)</li>
<li><strong>Swim Drag</strong> (Buoy vs No Buoy)</li>
<li><strong>High Fatigue</strong> (TSS Spikes)</li>
</ul>
</aside>
<main>
<h1>Workout Parser</h1>
<p class="caption">Upload a screenshot -&gt; Get a coach-ready summary.</p>
<label for="{image_field}">Upload Workout Screenshot</label>
<input type="file" id="{image_field}" name="{image_field}" accept="{accept}">
<button type="submit">Analyze</button>
{body}
</main>
</form>
</body>
</html>
"#,
        style = STYLE,
        credential_field = CREDENTIAL_FIELD,
        credential = escape_html(credential),
        image_field = IMAGE_FIELD,
        accept = accept,
        body = body,
    )
}
