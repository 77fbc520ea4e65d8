use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// MIME types the backend accepts for processing. Matching is exact and
/// case-sensitive on the type string.
pub const ACCEPTED_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "image/png",
    "image/jpeg",
    "image/tiff",
];

/// Upload ceiling, matching the server's 16MB request limit. The bound
/// is inclusive: a file of exactly this size is accepted.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// How long a transient notice stays on screen before auto-dismissing.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// The file currently chosen for upload. Replaced wholesale on every
/// selection event, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self {
            name,
            mime_type: mime_type_for(path).to_string(),
            size_bytes: metadata.len(),
            path: path.to_path_buf(),
        })
    }
}

/// Maps a file extension to the MIME type a browser would report for it.
/// Unknown extensions fall back to a generic binary type, which the type
/// rule then rejects.
fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Icon shown next to the selected file name. The fallback arm is
/// unreachable for a file that already passed the type rule but still
/// applies when the mapping is used on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Pdf,
    Image,
    Generic,
}

impl FileIcon {
    pub fn for_mime_type(mime_type: &str) -> Self {
        if mime_type == "application/pdf" {
            Self::Pdf
        } else if mime_type.starts_with("image/") {
            Self::Image
        } else {
            Self::Generic
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Danger,
}

/// A transient user-facing message. The surface owns rendering and the
/// dismiss timer; the controller supplies message, severity and delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub dismiss_after: Duration,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
            dismiss_after: NOTICE_TTL,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Danger,
            dismiss_after: NOTICE_TTL,
        }
    }
}

/// What the file display area should show. `Selected` carries the full
/// rendering payload, so the display is either complete or untouched,
/// never half-populated.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Empty,
    Selected {
        name: String,
        size: String,
        icon: FileIcon,
    },
    Submitting,
}

/// Why a candidate file was refused. The display strings double as the
/// notice text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Invalid file type. Please select a PDF, PNG, JPG, JPEG, or TIFF file.")]
    InvalidType,
    #[error("File too large. Maximum size is 16MB.")]
    TooLarge,
}

/// Why a submission attempt was blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please select a file to upload.")]
    MissingFile,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
