//! The annotation session: state plus the operations that mutate it.
//!
//! Operations are grouped by family:
//! - navigation: cursor movement and bound flags
//! - labeling: label assignment, clearing, progress
//! - finalize: completion and export payload production

mod finalize;
mod labeling;
mod navigation;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::labels::LabelSet;
use crate::state::{DatasetItem, SessionPhase, working_copy};

/// One annotator's labeling run over one dataset.
///
/// The session owns the working copy of the items and is the single
/// source of truth for annotation progress. Consumers read snapshots and
/// request mutations through the operation methods; nothing else touches
/// the item list. Construction deep-copies the supplied dataset, so no
/// operation here is ever visible in the caller's data.
pub struct Session {
    items: Vec<DatasetItem>,
    cursor: usize,
    labels: LabelSet,
    config: SessionConfig,
    phase: SessionPhase,
    annotator: Option<String>,
    last_item_touched: bool,
}

impl Session {
    /// Create a session over a working copy of `dataset`, ordered per
    /// `config`. The cursor starts on the first item.
    pub fn new(dataset: &[DatasetItem], labels: LabelSet, config: SessionConfig) -> Self {
        let items = working_copy(dataset, config.ordering);
        if labels.is_empty() {
            log::warn!("Empty label set; no item can be labeled");
        }
        log::debug!("Session over {} item(s), {} label(s)", items.len(), labels.len());

        Self {
            items,
            cursor: 0,
            labels,
            config,
            phase: SessionPhase::Active,
            annotator: None,
            last_item_touched: false,
        }
    }

    /// The working copy, in its current order.
    pub fn items(&self) -> &[DatasetItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cursor position, or `None` for the degenerate empty session.
    pub fn cursor(&self) -> Option<usize> {
        if self.items.is_empty() { None } else { Some(self.cursor) }
    }

    /// The item currently presented to the annotator.
    pub fn current(&self) -> Result<&DatasetItem, SessionError> {
        if self.items.is_empty() {
            return Err(SessionError::EmptySession);
        }
        Ok(&self.items[self.cursor])
    }

    /// The item at `index`.
    pub fn item(&self, index: usize) -> Result<&DatasetItem, SessionError> {
        self.ensure_index(index)?;
        Ok(&self.items[index])
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_finalized(&self) -> bool {
        self.phase == SessionPhase::Finalized
    }

    /// Annotator identity, recorded at finalize.
    pub fn annotator(&self) -> Option<&str> {
        self.annotator.as_deref()
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Active => Ok(()),
            SessionPhase::Finalized => Err(SessionError::AlreadyFinalized),
        }
    }

    fn ensure_index(&self, index: usize) -> Result<(), SessionError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(SessionError::OutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}
