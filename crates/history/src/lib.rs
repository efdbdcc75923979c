//! # Rewind History
//!
//! Linear undo/redo history over asynchronous reversible commands.
//!
//! A [`HistoryManager`] records commands — pairs of forward/reverse
//! actions with optional labels — and keeps a single cursor between the
//! applied and the reversed part of the list. Undo and redo move the
//! cursor synchronously and fire the corresponding action on its own
//! tokio task; the eventual outcome reaches the success/error
//! collaborators wired at construction.
//!
//! ## Core Types
//!
//! - [`HistoryManager`] — the command list, the cursor, and the
//!   `record`/`undo`/`redo` transitions
//! - [`ReversibleCommand`] — object-safe trait for a reversible action
//!   pair
//! - [`FnCommand`] — closure-based command for one-off use
//! - [`SharedHistory`] — clonable handle sharing one manager between
//!   collaborators
//! - [`HistoryError`] — synchronous precondition failures of undo/redo
//! - [`ActionKind`] / [`ActionFailure`] — payloads of the two
//!   notification channels
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rewind_history::{FnCommand, HistoryManager};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut history = HistoryManager::builder()
//!         .on_error(|failure| eprintln!("{failure}"))
//!         .build();
//!
//!     history.record(Arc::new(
//!         FnCommand::new(
//!             || async { Ok(()) }, // forward: perform or re-perform
//!             || async { Ok(()) }, // reverse: take it back
//!         )
//!         .with_undo_label("insert row"),
//!     ));
//!
//!     assert!(history.can_undo());
//!     assert_eq!(history.undo_label(), Some("insert row"));
//!     history.undo().unwrap();
//!     assert!(history.can_redo());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod history;
pub mod report;
pub mod shared;

pub use command::{ActionResult, FnCommand, ReversibleCommand};
pub use error::{ActionError, HistoryError};
pub use history::{HistoryManager, HistoryManagerBuilder};
pub use report::{ActionFailure, ActionKind};
pub use shared::SharedHistory;
