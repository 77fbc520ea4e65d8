use regex::Regex;

use crate::upload::types::{
    Feedback, FileIcon, Notice, Rejection, SelectedFile, SubmitError, ACCEPTED_MIME_TYPES,
    MAX_UPLOAD_BYTES,
};
use crate::utils::file_size::FileSizeUtils;

/// Rendering operations the controller drives. Implemented by the egui
/// view state in the application and by a recording mock in tests; the
/// controller never touches concrete widgets.
pub trait UiSurface {
    fn show_feedback(&mut self, feedback: Feedback);
    fn show_notice(&mut self, notice: Notice);
    fn set_submit_busy(&mut self, busy: bool);
}

/// Single authority for which file is currently chosen and whether it is
/// acceptable. Both input paths (file dialog and drag-and-drop) converge
/// on [`evaluate_candidate`](Self::evaluate_candidate), and the form's
/// file field is synchronized on every accepting transition, so a
/// submission transmits the same file regardless of how it was picked.
pub struct SelectionController<S> {
    surface: S,
    selected: Option<SelectedFile>,
    file_field: Option<SelectedFile>,
    feedback: Feedback,
}

impl<S: UiSurface> SelectionController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            selected: None,
            file_field: None,
            feedback: Feedback::Empty,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// The form's file field. This is what a submission transmits, so it
    /// is the authoritative check at submit time.
    pub fn file_field(&self) -> Option<&SelectedFile> {
        self.file_field.as_ref()
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// File-dialog result. `None` models the picker reporting an empty
    /// selection.
    pub fn on_browse_selected(&mut self, candidate: Option<SelectedFile>) {
        self.evaluate_candidate(candidate);
    }

    /// Drag-and-drop completion. Only the first dropped file is
    /// considered; the rest are silently ignored.
    pub fn on_dropped(&mut self, mut files: Vec<SelectedFile>) {
        if files.is_empty() {
            return;
        }
        let first = files.swap_remove(0);
        self.evaluate_candidate(Some(first));
    }

    pub fn evaluate_candidate(&mut self, candidate: Option<SelectedFile>) {
        let Some(file) = candidate else {
            self.selected = None;
            self.file_field = None;
            self.feedback = Feedback::Empty;
            self.surface.show_feedback(Feedback::Empty);
            return;
        };

        if let Err(rejection) = validate(&file) {
            // Candidate discarded; whatever was selected before stays.
            tracing::debug!(file = %file.name, %rejection, "candidate rejected");
            self.surface
                .show_notice(Notice::danger(rejection.to_string()));
            return;
        }

        let feedback = Feedback::Selected {
            name: file.name.clone(),
            size: FileSizeUtils::format_size(file.size_bytes),
            icon: FileIcon::for_mime_type(&file.mime_type),
        };
        tracing::info!(file = %file.name, size = file.size_bytes, "file selected");
        self.file_field = Some(file.clone());
        self.selected = Some(file);
        self.feedback = feedback.clone();
        self.surface.show_feedback(feedback);
    }

    /// Re-validates at submit time instead of trusting earlier results;
    /// a submit can arrive without any selection event having fired.
    /// Both checks run and every failure is reported.
    pub fn validate_on_submit(&mut self, email: &str) -> Result<(), Vec<SubmitError>> {
        let mut failures = Vec::new();
        if self.file_field.is_none() {
            failures.push(SubmitError::MissingFile);
        }
        if !is_valid_email(email) {
            failures.push(SubmitError::InvalidEmail);
        }

        if failures.is_empty() {
            self.feedback = Feedback::Submitting;
            self.surface.set_submit_busy(true);
            return Ok(());
        }

        for failure in &failures {
            self.surface
                .show_notice(Notice::danger(failure.to_string()));
        }
        // The affordance may still show the busy state from an earlier
        // attempt.
        self.surface.set_submit_busy(false);
        self.revert_submitting();
        Err(failures)
    }

    /// Best-effort return from `Submitting` once no submission is in
    /// flight anymore.
    pub fn abort_submission(&mut self) {
        self.surface.set_submit_busy(false);
        self.revert_submitting();
    }

    fn revert_submitting(&mut self) {
        if self.feedback != Feedback::Submitting {
            return;
        }
        self.feedback = match &self.selected {
            Some(file) => Feedback::Selected {
                name: file.name.clone(),
                size: FileSizeUtils::format_size(file.size_bytes),
                icon: FileIcon::for_mime_type(&file.mime_type),
            },
            None => Feedback::Empty,
        };
    }
}

/// Type rule first, then size; only the first failing rule is reported.
pub fn validate(file: &SelectedFile) -> Result<(), Rejection> {
    if !ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(Rejection::InvalidType);
    }
    if file.size_bytes > MAX_UPLOAD_BYTES {
        return Err(Rejection::TooLarge);
    }
    Ok(())
}

/// Syntactic hint only; the server remains the actual authority.
pub fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::types::Severity;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockSurface {
        feedback_calls: Vec<Feedback>,
        notices: Vec<Notice>,
        busy_calls: Vec<bool>,
    }

    impl UiSurface for MockSurface {
        fn show_feedback(&mut self, feedback: Feedback) {
            self.feedback_calls.push(feedback);
        }

        fn show_notice(&mut self, notice: Notice) {
            self.notices.push(notice);
        }

        fn set_submit_busy(&mut self, busy: bool) {
            self.busy_calls.push(busy);
        }
    }

    fn file(name: &str, mime_type: &str, size_bytes: u64) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes,
            path: PathBuf::from(name),
        }
    }

    fn controller() -> SelectionController<MockSurface> {
        SelectionController::new(MockSurface::default())
    }

    #[test]
    fn accepts_valid_candidate_and_records_attributes() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("scan.pdf", "application/pdf", 2048)));

        let selected = c.selected().expect("file should be selected");
        assert_eq!(selected.name, "scan.pdf");
        assert_eq!(selected.size_bytes, 2048);
        assert_eq!(
            *c.feedback(),
            Feedback::Selected {
                name: "scan.pdf".to_string(),
                size: "2 KB".to_string(),
                icon: FileIcon::Pdf,
            }
        );
    }

    #[test]
    fn rejects_unknown_type_and_keeps_prior_state() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("scan.pdf", "application/pdf", 2048)));
        let feedback_before = c.feedback().clone();
        let surface_calls_before = c.surface().feedback_calls.len();

        c.evaluate_candidate(Some(file("setup.exe", "application/x-msdownload", 10)));

        assert_eq!(*c.feedback(), feedback_before);
        assert_eq!(c.selected().map(|f| f.name.as_str()), Some("scan.pdf"));
        assert_eq!(c.file_field().map(|f| f.name.as_str()), Some("scan.pdf"));
        // No partial UI update on rejection.
        assert_eq!(c.surface().feedback_calls.len(), surface_calls_before);

        let notice = c.surface().notices.last().expect("a notice was shown");
        assert_eq!(notice.severity, Severity::Danger);
        assert!(notice.message.starts_with("Invalid file type"));
    }

    #[test]
    fn empty_mime_type_string_is_invalid() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("mystery", "", 10)));

        assert_eq!(*c.feedback(), Feedback::Empty);
        assert!(c.selected().is_none());
        assert_eq!(c.surface().notices.len(), 1);
    }

    #[test]
    fn rejects_oversized_file_even_with_valid_type() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("huge.png", "image/png", MAX_UPLOAD_BYTES + 1)));

        assert_eq!(*c.feedback(), Feedback::Empty);
        assert!(c.selected().is_none());
        let notice = c.surface().notices.last().expect("a notice was shown");
        assert_eq!(notice.severity, Severity::Danger);
        assert!(notice.message.starts_with("File too large"));
    }

    #[test]
    fn accepts_file_exactly_at_the_size_ceiling() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("exact.png", "image/png", MAX_UPLOAD_BYTES)));

        assert_eq!(c.selected().map(|f| f.size_bytes), Some(MAX_UPLOAD_BYTES));
        assert!(matches!(c.feedback(), Feedback::Selected { .. }));
    }

    #[test]
    fn type_rule_is_reported_before_size_rule() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("huge.exe", "application/x-msdownload", MAX_UPLOAD_BYTES + 1)));

        assert_eq!(c.surface().notices.len(), 1);
        assert!(c.surface().notices[0].message.starts_with("Invalid file type"));
    }

    #[test]
    fn evaluating_the_same_valid_file_twice_is_idempotent() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("photo.jpg", "image/jpeg", 4096)));
        let after_first = c.feedback().clone();

        c.evaluate_candidate(Some(file("photo.jpg", "image/jpeg", 4096)));

        assert_eq!(*c.feedback(), after_first);
        assert_eq!(c.selected().map(|f| f.name.as_str()), Some("photo.jpg"));
    }

    #[test]
    fn empty_candidate_clears_the_selection() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("scan.pdf", "application/pdf", 2048)));
        c.evaluate_candidate(None);

        assert_eq!(*c.feedback(), Feedback::Empty);
        assert!(c.selected().is_none());
        assert!(c.file_field().is_none());
        assert_eq!(c.surface().feedback_calls.last(), Some(&Feedback::Empty));
    }

    #[test]
    fn drop_considers_only_the_first_file() {
        let mut c = controller();
        c.on_dropped(vec![
            file("first.pdf", "application/pdf", 100),
            file("second.png", "image/png", 200),
            file("third.jpg", "image/jpeg", 300),
        ]);

        assert_eq!(c.selected().map(|f| f.name.as_str()), Some("first.pdf"));
        assert_eq!(c.file_field().map(|f| f.name.as_str()), Some("first.pdf"));
    }

    #[test]
    fn drop_and_browse_fill_the_file_field_identically() {
        let dropped_on = {
            let mut c = controller();
            c.on_dropped(vec![file("scan.tiff", "image/tiff", 512)]);
            c.file_field().cloned()
        };
        let browsed = {
            let mut c = controller();
            c.on_browse_selected(Some(file("scan.tiff", "image/tiff", 512)));
            c.file_field().cloned()
        };

        assert!(dropped_on.is_some());
        assert_eq!(dropped_on, browsed);
    }

    #[test]
    fn submit_without_file_and_with_bad_email_collects_both_failures() {
        let mut c = controller();
        let failures = c
            .validate_on_submit("not-an-email")
            .expect_err("submission should be blocked");

        assert_eq!(
            failures,
            vec![SubmitError::MissingFile, SubmitError::InvalidEmail]
        );
        let danger_count = c
            .surface()
            .notices
            .iter()
            .filter(|n| n.severity == Severity::Danger)
            .count();
        assert_eq!(danger_count, 2);
        // The affordance is restored to idle.
        assert_eq!(c.surface().busy_calls.last(), Some(&false));
    }

    #[test]
    fn successful_submit_enters_submitting_and_marks_busy() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("scan.pdf", "application/pdf", 2048)));

        c.validate_on_submit("user@example.com")
            .expect("submission should proceed");

        assert_eq!(*c.feedback(), Feedback::Submitting);
        assert_eq!(c.surface().busy_calls.last(), Some(&true));
        assert!(c.surface().notices.is_empty());
    }

    #[test]
    fn failed_attempt_after_submitting_reverts_to_selected() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("scan.pdf", "application/pdf", 2048)));
        c.validate_on_submit("user@example.com")
            .expect("first attempt should proceed");

        c.validate_on_submit("broken")
            .expect_err("second attempt should be blocked");

        assert!(matches!(c.feedback(), Feedback::Selected { .. }));
        assert_eq!(c.surface().busy_calls.last(), Some(&false));
    }

    #[test]
    fn aborting_a_submission_restores_the_selected_state() {
        let mut c = controller();
        c.evaluate_candidate(Some(file("scan.pdf", "application/pdf", 2048)));
        c.validate_on_submit("user@example.com")
            .expect("submission should proceed");

        c.abort_submission();

        assert!(matches!(c.feedback(), Feedback::Selected { .. }));
        assert_eq!(c.surface().busy_calls.last(), Some(&false));
    }

    #[test]
    fn email_pattern_accepts_plain_addresses_only() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@dot"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("spaced user@example.com"));
        assert!(!is_valid_email("two@@example.com"));
    }
}
