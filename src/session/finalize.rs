//! Session completion and export payload production.

use super::Session;
use crate::config::FinalizePolicy;
use crate::error::SessionError;
use crate::export::ExportPayload;
use crate::state::SessionPhase;

impl Session {
    /// Whether the configured policy says the session is ready to be
    /// finalized without further user action.
    ///
    /// The core cannot call the host by itself; under the auto policy the
    /// presentation layer polls this after each operation and invokes
    /// [`Session::finalize`] when it turns true.
    pub fn finalize_due(&self) -> bool {
        self.config.finalize == FinalizePolicy::AutoOnLastItem
            && self.phase == SessionPhase::Active
            && !self.items.is_empty()
            && self.cursor + 1 == self.items.len()
            && self.last_item_touched
    }

    /// Conclude the run: record the annotator, produce the export payload,
    /// and transition to the terminal phase.
    ///
    /// Items are exported in their current order, unlabeled ones included;
    /// there is no completeness gate. Calling this twice is an error, and
    /// the payload produced by the first call is never altered.
    pub fn finalize(&mut self, annotator: impl Into<String>) -> Result<ExportPayload, SessionError> {
        self.ensure_active()?;

        let annotator = annotator.into();
        self.annotator = Some(annotator.clone());
        self.phase = SessionPhase::Finalized;

        let progress = self.progress();
        log::debug!(
            "Session finalized by {annotator}: {} of {} item(s) labeled",
            progress.labeled,
            progress.total
        );

        Ok(ExportPayload {
            annotator,
            labelled_dataset: self.items.clone(),
        })
    }
}
