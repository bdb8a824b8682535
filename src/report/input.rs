use std::fmt;

/// Extensions the upload control accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Jpeg,
    Png,
    Webp,
}

impl UploadFormat {
    /// Maps a file name to a format by extension, ignoring case.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }
}

impl fmt::Display for UploadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub format: UploadFormat,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub enum ImageSelection {
    #[default]
    None,
    Unsupported {
        file_name: String,
    },
    Accepted(ImageUpload),
}

impl ImageSelection {
    /// Classifies an uploaded file. An empty name or empty body counts as no selection.
    pub fn from_upload(file_name: &str, bytes: Vec<u8>) -> Self {
        if file_name.is_empty() || bytes.is_empty() {
            return Self::None;
        }

        match UploadFormat::from_file_name(file_name) {
            Some(format) => Self::Accepted(ImageUpload {
                file_name: file_name.to_string(),
                format,
                bytes,
            }),
            None => Self::Unsupported {
                file_name: file_name.to_string(),
            },
        }
    }
}

/// Everything one form submission carries. Built per request, never stored.
#[derive(Debug, Clone, Default)]
pub struct SessionInput {
    pub credential: String,
    pub image: ImageSelection,
}
