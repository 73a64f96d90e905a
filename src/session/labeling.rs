//! Label assignment, clearing, and progress.

use super::Session;
use crate::config::{LabelAddressing, SelectionModel};
use crate::error::SessionError;
use crate::labels::LabelRef;
use crate::state::Progress;

impl Session {
    /// Assign `label` to the item at `index` and return the item's label
    /// position after the call.
    ///
    /// Under the toggle model, reassigning the label an item already
    /// carries clears it instead (`None`). Exactly one item is touched;
    /// the cursor never moves.
    pub fn assign_label(
        &mut self,
        index: usize,
        label: &LabelRef,
    ) -> Result<Option<usize>, SessionError> {
        self.ensure_active()?;
        self.ensure_index(index)?;
        let Some(resolved) = self.labels.resolve(label) else {
            return Err(SessionError::UnknownLabel(label.to_string()));
        };

        let current = self.items[index]
            .label
            .as_ref()
            .and_then(|stored| self.labels.resolve(stored));

        let next = match self.config.selection {
            SelectionModel::Toggle if current == Some(resolved) => None,
            _ => Some(resolved),
        };

        let stored = next.map(|position| self.stored_label(position));
        self.items[index].label = stored;
        self.touch(index);
        Ok(next)
    }

    /// Explicitly remove the label at `index`. Clearing an unlabeled item
    /// is a no-op, not an error.
    pub fn clear_label(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.ensure_index(index)?;
        self.items[index].label = None;
        self.touch(index);
        Ok(())
    }

    /// Labeled/total counts, recomputed from live state on every call.
    /// Nothing is cached.
    pub fn progress(&self) -> Progress {
        let labeled = self.items.iter().filter(|item| item.is_labeled()).count();
        Progress {
            labeled,
            total: self.items.len(),
        }
    }

    /// The stored form follows the session's addressing mode.
    fn stored_label(&self, position: usize) -> LabelRef {
        match self.config.addressing {
            LabelAddressing::ByIndex => LabelRef::Index(position),
            LabelAddressing::ByName => self
                .labels
                .name(position)
                .map(|name| LabelRef::Name(name.to_string()))
                .unwrap_or(LabelRef::Index(position)),
        }
    }

    fn touch(&mut self, index: usize) {
        if index + 1 == self.items.len() {
            self.last_item_touched = true;
        }
    }
}
