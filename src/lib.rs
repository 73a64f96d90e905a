//! Annotation session core for text labeling trials.
//!
//! One session covers one annotator's run over one dataset: a working copy
//! of the items, a cursor over them, label assignment with progress
//! tracking, and a final export payload carrying the annotator identity.
//! Rendering, keyboard wiring, and the surrounding trial lifecycle are the
//! embedding host's concern; it drives the session through the operation
//! methods and re-renders from snapshot reads after every mutation.
//!
//! ```
//! use text_annotator::{DatasetItem, Direction, LabelRef, LabelSet, Session, SessionConfig};
//!
//! let dataset = vec![
//!     DatasetItem::new(1, "the acting was superb"),
//!     DatasetItem::new(2, "two hours I will never get back"),
//! ];
//! let labels = LabelSet::new(["positive", "negative"]);
//! let mut session = Session::new(&dataset, labels, SessionConfig::default());
//!
//! session.assign_label(0, &LabelRef::Name("positive".into()))?;
//! session.navigate(Direction::Next)?;
//! assert_eq!(session.progress().labeled, 1);
//!
//! let payload = session.finalize("alice")?;
//! assert_eq!(payload.labelled_dataset.len(), 2);
//! # Ok::<(), text_annotator::SessionError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod labels;
pub mod session;
pub mod state;

pub use config::{
    FinalizePolicy, ItemOrdering, LabelAddressing, SelectionModel, SessionConfig, load_config,
    save_config,
};
pub use error::{FileError, SessionError};
pub use export::{ExportDocument, ExportFormat, ExportPayload, ExportStats, save_payload};
pub use labels::{LabelConfig, LabelDefinition, LabelRef, LabelSet, load_labels};
pub use session::Session;
pub use state::{DatasetItem, Direction, Progress, SessionPhase, load_dataset, metadata_line};
