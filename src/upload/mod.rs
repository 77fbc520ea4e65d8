mod client;
mod selection;
mod status;
mod types;

pub use client::{UploadClient, UploadError, UploadReceipt};
pub use selection::{is_valid_email, validate, SelectionController, UiSurface};
pub use status::{JobStatus, StatusError, StatusPoller};
pub use types::{
    Feedback, FileIcon, Notice, Rejection, SelectedFile, Severity, SubmitError,
    ACCEPTED_MIME_TYPES, MAX_UPLOAD_BYTES, NOTICE_TTL,
};
