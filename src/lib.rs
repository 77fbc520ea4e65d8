pub mod app;
pub mod config;
pub mod upload;
pub mod utils;

pub use config::Config;
pub use upload::{
    JobStatus, SelectedFile, SelectionController, StatusError, StatusPoller, UiSurface,
    UploadClient,
};
