mod state;
mod ui;

pub use state::{ActiveNotice, FileCard, UploadEvent, UploadPhase, ViewState};

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use eframe::{egui, App};

use crate::config::Config;
use crate::upload::{
    Notice, SelectedFile, SelectionController, StatusPoller, UiSurface, UploadClient,
};

/// Caller-side polling cadence. The status check itself is single-shot;
/// this loop decides how often to repeat it and when to give up.
const POLL_INTERVAL: Duration = Duration::from_secs(2);
const MAX_POLLS: u32 = 30;

pub struct UploaderApp {
    controller: SelectionController<ViewState>,
    email: String,
    phase: UploadPhase,
    events: Option<Receiver<UploadEvent>>,
    config: Config,
}

impl UploaderApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        tracing::info!(base_url = %config.base_url, "starting document uploader");
        Self {
            controller: SelectionController::new(ViewState::default()),
            email: String::new(),
            phase: UploadPhase::Idle,
            events: None,
            config,
        }
    }

    pub(crate) fn browse_for_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Documents", &["pdf", "png", "jpg", "jpeg", "tif", "tiff"])
            .pick_file();
        let Some(path) = picked else {
            return;
        };
        match SelectedFile::from_path(&path) {
            Ok(candidate) => self.controller.on_browse_selected(Some(candidate)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read picked file");
                self.controller
                    .surface_mut()
                    .show_notice(Notice::danger(format!("Could not read file: {}", e)));
            }
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        let mut candidates = Vec::new();
        for file in &dropped {
            let Some(path) = &file.path else { continue };
            match SelectedFile::from_path(path) {
                Ok(candidate) => candidates.push(candidate),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "could not read dropped file");
                }
            }
        }
        self.controller.on_dropped(candidates);
    }

    pub(crate) fn submit(&mut self) {
        if self.controller.validate_on_submit(&self.email).is_err() {
            return;
        }
        let Some(file) = self.controller.file_field().cloned() else {
            return;
        };

        self.phase = UploadPhase::Submitting;

        let (sender, receiver) = mpsc::channel();
        self.events = Some(receiver);

        let email = self.email.clone();
        let base_url = self.config.base_url.clone();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(run_submission(base_url, file, email, sender));
        });
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        let Some(receiver) = &self.events else { return };
        let mut had_updates = false;

        while let Ok(event) = receiver.try_recv() {
            had_updates = true;
            match event {
                UploadEvent::Accepted { job_id } => {
                    self.phase = UploadPhase::Tracking {
                        job_id,
                        status_line: None,
                    };
                    self.controller.surface_mut().show_notice(Notice::info(
                        "File uploaded successfully! Processing will begin shortly.",
                    ));
                }
                UploadEvent::Status(status) => {
                    if let UploadPhase::Tracking { status_line, .. } = &mut self.phase {
                        let line = match (status.status(), status.message()) {
                            (Some(state), Some(message)) => format!("{}: {}", state, message),
                            (Some(state), None) => state.to_string(),
                            (None, Some(message)) => message.to_string(),
                            (None, None) => "status received".to_string(),
                        };
                        *status_line = Some(line);
                    }
                }
                UploadEvent::Failed(message) => match &mut self.phase {
                    // The upload itself went through; only a status
                    // check failed.
                    UploadPhase::Tracking { status_line, .. } => {
                        *status_line = Some(format!("status check failed: {}", message));
                    }
                    _ => {
                        self.phase = UploadPhase::Idle;
                        self.controller
                            .surface_mut()
                            .show_notice(Notice::danger(format!("Upload failed: {}", message)));
                        self.controller.abort_submission();
                    }
                },
            }
        }

        if had_updates {
            ctx.request_repaint();
        }
    }
}

async fn run_submission(
    base_url: String,
    file: SelectedFile,
    email: String,
    sender: Sender<UploadEvent>,
) {
    let client = UploadClient::new(base_url.clone());
    let receipt = match client.submit(&file, &email).await {
        Ok(receipt) => receipt,
        Err(e) => {
            tracing::error!(error = %e, "upload failed");
            let _ = sender.send(UploadEvent::Failed(e.to_string()));
            return;
        }
    };

    tracing::info!(job_id = %receipt.job_id, "upload accepted");
    let _ = sender.send(UploadEvent::Accepted {
        job_id: receipt.job_id.clone(),
    });

    let poller = StatusPoller::new(base_url);
    for _ in 0..MAX_POLLS {
        tokio::time::sleep(POLL_INTERVAL).await;
        match poller.fetch_status(&receipt.job_id).await {
            Ok(status) => {
                let done = matches!(status.status(), Some("completed") | Some("failed"));
                let _ = sender.send(UploadEvent::Status(status));
                if done {
                    break;
                }
            }
            Err(e) => {
                let _ = sender.send(UploadEvent::Failed(e.to_string()));
                break;
            }
        }
    }
}

impl App for UploaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);
        self.controller.surface_mut().prune_notices(Instant::now());
        if self.phase == UploadPhase::Idle {
            self.handle_dropped_files(ctx);
        }
        self.render(ctx);

        // Keep the frame loop awake while a worker is reporting or a
        // notice is waiting to expire.
        let waiting = self.events.is_some() || !self.controller.surface().notices.is_empty();
        if waiting {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
