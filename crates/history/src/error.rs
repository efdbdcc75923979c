//! Error types for history operations and command actions.

/// Synchronous precondition failure of [`undo`] or [`redo`].
///
/// These are programmer errors: a correct caller gates the calls behind
/// [`can_undo`] / [`can_redo`] and never triggers them in normal
/// operation.
///
/// [`undo`]: crate::HistoryManager::undo
/// [`redo`]: crate::HistoryManager::redo
/// [`can_undo`]: crate::HistoryManager::can_undo
/// [`can_redo`]: crate::HistoryManager::can_redo
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HistoryError {
    /// The cursor is already at the oldest state; nothing is applied.
    ///
    /// Covers both the empty-history and at-oldest-state cases, which
    /// are the same condition (`cursor == 0`).
    #[error("nothing to undo: cursor is at the oldest state")]
    NothingToUndo,

    /// The cursor is already at the newest state; nothing was reversed.
    #[error("nothing to redo: cursor is at the newest state")]
    NothingToRedo,
}

/// Failure reason reported by a command's forward or reverse action.
///
/// Action failures are expected runtime conditions (a network-backed
/// reverse action failing, say). They are delivered to the error
/// collaborator, never thrown from the manager, and never unwind a
/// cursor move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ActionError {
    /// The action reported a failure with a human-readable reason.
    #[error("{0}")]
    Failed(String),
}

impl ActionError {
    /// Create an action failure from a human-readable reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}
