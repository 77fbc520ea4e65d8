use std::time::Instant;

use crate::upload::{Feedback, FileIcon, JobStatus, Notice, UiSurface};

/// Events the upload worker thread reports back to the window.
#[derive(Debug)]
pub enum UploadEvent {
    Accepted { job_id: String },
    Status(JobStatus),
    Failed(String),
}

/// Where the submission currently stands, from the window's point of
/// view. `Tracking` replaces the form for good, the way the browser
/// original navigates to a success page.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Submitting,
    Tracking {
        job_id: String,
        status_line: Option<String>,
    },
}

/// Rendering payload for the selected-file row.
#[derive(Debug, Clone, PartialEq)]
pub struct FileCard {
    pub name: String,
    pub size: String,
    pub icon: FileIcon,
}

/// An on-screen notice and the instant it disappears.
pub struct ActiveNotice {
    pub notice: Notice,
    pub expires_at: Instant,
}

/// Concrete rendering surface backing the egui widgets. The selection
/// controller drives it through [`UiSurface`]; the renderer reads it
/// every frame.
#[derive(Default)]
pub struct ViewState {
    pub card: Option<FileCard>,
    pub notices: Vec<ActiveNotice>,
    pub submit_busy: bool,
}

impl ViewState {
    /// Drops notices whose dismiss timer has elapsed.
    pub fn prune_notices(&mut self, now: Instant) {
        self.notices.retain(|n| n.expires_at > now);
    }
}

impl UiSurface for ViewState {
    fn show_feedback(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Empty => self.card = None,
            Feedback::Selected { name, size, icon } => {
                self.card = Some(FileCard { name, size, icon });
            }
            // The file row keeps its last rendering while a submission
            // is in flight.
            Feedback::Submitting => {}
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        let expires_at = Instant::now() + notice.dismiss_after;
        self.notices.push(ActiveNotice { notice, expires_at });
    }

    fn set_submit_busy(&mut self, busy: bool) {
        self.submit_busy = busy;
    }
}
