//! Cursor movement over the working copy.
//!
//! Handles: previous, next, and direct jumps from an all-items view.

use super::Session;
use crate::error::SessionError;
use crate::state::Direction;

impl Session {
    /// Move the cursor one step and return its new position. Moves past
    /// either end are no-ops, not errors.
    pub fn navigate(&mut self, direction: Direction) -> Result<usize, SessionError> {
        self.ensure_active()?;
        if self.items.is_empty() {
            return Err(SessionError::EmptySession);
        }

        match direction {
            Direction::Previous => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            Direction::Next => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
            }
        }

        Ok(self.cursor)
    }

    /// Jump straight to `index`. Out-of-range jumps are rejected, not
    /// clamped: a clamp would hide a broken caller.
    pub fn goto(&mut self, index: usize) -> Result<usize, SessionError> {
        self.ensure_active()?;
        self.ensure_index(index)?;
        self.cursor = index;
        Ok(self.cursor)
    }

    /// True when the cursor has nothing before it. Holds on empty sessions.
    pub fn at_first(&self) -> bool {
        self.cursor == 0
    }

    /// True when the cursor has nothing after it. Holds on empty sessions.
    pub fn at_last(&self) -> bool {
        self.cursor + 1 >= self.items.len()
    }
}
