//! Clone-able handle sharing one history between collaborators.
//!
//! The history is owned by exactly one [`HistoryManager`] for its whole
//! lifetime. When nested callers all need to record or trigger undo/redo
//! on the same instance, they each hold a [`SharedHistory`] clone instead
//! of reaching for global state: the handle scopes access to whoever was
//! explicitly given one.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::command::ReversibleCommand;
use crate::error::HistoryError;
use crate::history::HistoryManager;

/// A cheaply clonable handle over a single [`HistoryManager`].
///
/// Every operation takes the lock for the duration of the synchronous
/// state change, so no caller can observe a torn cursor/list pair. The
/// lock is never held across an action's suspension points; actions run
/// on their own tasks exactly as they do for an owned manager.
#[derive(Debug, Clone)]
pub struct SharedHistory {
    inner: Arc<Mutex<HistoryManager>>,
}

impl SharedHistory {
    /// Wraps a manager, taking over as its sole owner.
    pub fn new(manager: HistoryManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Records a command. See [`HistoryManager::record`].
    pub fn record(&self, command: Arc<dyn ReversibleCommand>) {
        self.inner.lock().record(command);
    }

    /// Undoes the newest applied command. See [`HistoryManager::undo`].
    ///
    /// # Errors
    ///
    /// [`HistoryError::NothingToUndo`] when nothing is applied.
    pub fn undo(&self) -> Result<(), HistoryError> {
        self.inner.lock().undo()
    }

    /// Redoes the oldest reversed command. See [`HistoryManager::redo`].
    ///
    /// # Errors
    ///
    /// [`HistoryError::NothingToRedo`] when nothing is reversed.
    pub fn redo(&self) -> Result<(), HistoryError> {
        self.inner.lock().redo()
    }

    /// True when at least one command is currently applied.
    pub fn can_undo(&self) -> bool {
        self.inner.lock().can_undo()
    }

    /// True when at least one command is currently reversed.
    pub fn can_redo(&self) -> bool {
        self.inner.lock().can_redo()
    }

    /// Description of the current undo target, cloned out of the lock.
    pub fn undo_label(&self) -> Option<String> {
        self.inner.lock().undo_label().map(str::to_owned)
    }

    /// Description of the current redo target, cloned out of the lock.
    pub fn redo_label(&self) -> Option<String> {
        self.inner.lock().redo_label().map(str::to_owned)
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.inner.lock().cursor()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::command::FnCommand;

    fn noop() -> Arc<dyn ReversibleCommand> {
        Arc::new(FnCommand::new(|| async { Ok(()) }, || async { Ok(()) }))
    }

    #[tokio::test]
    async fn clones_observe_the_same_history() {
        let shared = SharedHistory::new(HistoryManager::new());
        let recorder = shared.clone();
        let controls = shared.clone();

        recorder.record(noop());
        recorder.record(noop());
        assert_eq!(controls.len(), 2);
        assert!(controls.can_undo());

        controls.undo().unwrap();
        assert_eq!(shared.cursor(), 1);
        assert!(recorder.can_redo());
    }

    #[test]
    fn precondition_errors_pass_through_the_handle() {
        let shared = SharedHistory::new(HistoryManager::new());
        assert_eq!(shared.undo(), Err(HistoryError::NothingToUndo));
        assert_eq!(shared.redo(), Err(HistoryError::NothingToRedo));
    }
}
