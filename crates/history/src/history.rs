//! Linear undo/redo history over reversible commands.

use std::fmt;
use std::sync::Arc;

use crate::command::ReversibleCommand;
use crate::error::HistoryError;
use crate::report::{ActionFailure, ActionKind, Reporter};

/// Owns the ordered command list and the cursor separating applied
/// commands from reversed ones.
///
/// Commands at indices `[0, cursor)` are currently applied (undoable);
/// commands at `[cursor, len)` are currently reversed (redoable). The
/// invariant `0 <= cursor <= len` holds after every operation.
///
/// State moves synchronously: [`record`] appends, [`undo`] and [`redo`]
/// move the cursor before the underlying action resolves. The actions
/// themselves run on spawned tasks and report their eventual outcome
/// through the collaborators wired at construction, so `undo`/`redo`
/// must be called from within a tokio runtime.
///
/// The cursor is optimistic: an action failure is reported but never
/// rolls the cursor back.
///
/// There is no clear or reset operation; construct a fresh manager
/// instead.
///
/// [`record`]: HistoryManager::record
/// [`undo`]: HistoryManager::undo
/// [`redo`]: HistoryManager::redo
pub struct HistoryManager {
    commands: Vec<Arc<dyn ReversibleCommand>>,
    cursor: usize,
    reporter: Reporter,
}

impl HistoryManager {
    /// Creates an empty history with silent reporting.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a history with success/error collaborators.
    pub fn builder() -> HistoryManagerBuilder {
        HistoryManagerBuilder::default()
    }

    /// Records a command as the newest applied action.
    ///
    /// Any commands past the cursor (the redoable branch left behind by
    /// prior undos) are discarded permanently, matching standard editor
    /// undo semantics. Afterwards `can_undo` is true and `can_redo` is
    /// false. Always succeeds, synchronously.
    pub fn record(&mut self, command: Arc<dyn ReversibleCommand>) {
        self.commands.truncate(self.cursor);
        self.commands.push(command);
        self.cursor += 1;
        tracing::debug!(
            cursor = self.cursor,
            len = self.commands.len(),
            "recorded command"
        );
    }

    /// Moves the cursor back one step and fires the reverse action of
    /// the command just before it.
    ///
    /// The cursor moves synchronously; the action runs to completion on
    /// its own task and reports through the collaborators. Overlapping
    /// calls are not serialized: a second `undo` issued before the first
    /// action resolves is accepted and moves the cursor again.
    ///
    /// # Errors
    ///
    /// [`HistoryError::NothingToUndo`] when the cursor is already at 0.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::NothingToUndo);
        }
        self.cursor -= 1;
        let command = Arc::clone(&self.commands[self.cursor]);
        tracing::debug!(cursor = self.cursor, "undo: cursor moved back");
        self.dispatch(ActionKind::Undo, command);
        Ok(())
    }

    /// Moves the cursor forward one step and fires the forward action of
    /// the command at it. Symmetric to [`undo`](HistoryManager::undo).
    ///
    /// # Errors
    ///
    /// [`HistoryError::NothingToRedo`] when the cursor is already at the
    /// end of the list.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        if !self.can_redo() {
            return Err(HistoryError::NothingToRedo);
        }
        let command = Arc::clone(&self.commands[self.cursor]);
        self.cursor += 1;
        tracing::debug!(cursor = self.cursor, "redo: cursor moved forward");
        self.dispatch(ActionKind::Redo, command);
        Ok(())
    }

    /// True when at least one command is currently applied.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// True when at least one command is currently reversed.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Description of what the next undo would do, if the current undo
    /// target carries one.
    pub fn undo_label(&self) -> Option<&str> {
        self.cursor
            .checked_sub(1)
            .and_then(|target| self.commands.get(target))
            .and_then(|target| target.undo_label())
    }

    /// Description of what the next redo would do, if the current redo
    /// target carries one.
    pub fn redo_label(&self) -> Option<&str> {
        self.commands
            .get(self.cursor)
            .and_then(|target| target.redo_label())
    }

    /// Number of recorded commands, applied and reversed together.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing has been recorded (or everything recorded was
    /// truncated away, which cannot happen without a record).
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current cursor position in `[0, len]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn dispatch(&self, kind: ActionKind, command: Arc<dyn ReversibleCommand>) {
        let reporter = self.reporter.clone();
        let _ = tokio::spawn(async move {
            let result = match kind {
                ActionKind::Undo => command.revert().await,
                ActionKind::Redo => command.apply().await,
            };
            match result {
                Ok(()) => reporter.success(kind),
                Err(reason) => reporter.failure(ActionFailure { kind, reason }),
            }
        });
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HistoryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryManager")
            .field("len", &self.commands.len())
            .field("cursor", &self.cursor)
            .field("reporter", &self.reporter)
            .finish()
    }
}

/// Builder wiring the optional success/error collaborators.
#[derive(Debug, Default)]
pub struct HistoryManagerBuilder {
    reporter: Reporter,
}

impl HistoryManagerBuilder {
    /// Invoked after a reverse/forward action resolves successfully.
    pub fn on_success(mut self, on_success: impl Fn(ActionKind) + Send + Sync + 'static) -> Self {
        self.reporter.on_success = Some(Arc::new(on_success));
        self
    }

    /// Invoked after a reverse/forward action fails, with the direction
    /// and the underlying reason.
    pub fn on_error(mut self, on_error: impl Fn(ActionFailure) + Send + Sync + 'static) -> Self {
        self.reporter.on_error = Some(Arc::new(on_error));
        self
    }

    /// Builds an empty history with the configured collaborators.
    pub fn build(self) -> HistoryManager {
        HistoryManager {
            commands: Vec::new(),
            cursor: 0,
            reporter: self.reporter,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::command::FnCommand;

    fn noop() -> Arc<dyn ReversibleCommand> {
        Arc::new(FnCommand::new(|| async { Ok(()) }, || async { Ok(()) }))
    }

    fn labeled(redo: &str, undo: &str) -> Arc<dyn ReversibleCommand> {
        Arc::new(
            FnCommand::new(|| async { Ok(()) }, || async { Ok(()) })
                .with_redo_label(redo)
                .with_undo_label(undo),
        )
    }

    #[test]
    fn starts_empty_with_both_flags_off() {
        let history = HistoryManager::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_label(), None);
        assert_eq!(history.redo_label(), None);
    }

    #[test]
    fn undo_and_redo_fail_on_empty_history() {
        let mut history = HistoryManager::new();
        assert_eq!(history.undo(), Err(HistoryError::NothingToUndo));
        assert_eq!(history.redo(), Err(HistoryError::NothingToRedo));
    }

    #[test]
    fn record_advances_cursor_and_enables_undo() {
        let mut history = HistoryManager::new();
        history.record(noop());
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.len(), 1);
        assert!(history.can_undo());
        assert!(!history.can_redo());

        history.record(noop());
        history.record(noop());
        assert_eq!(history.cursor(), 3);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[tokio::test]
    async fn undo_moves_cursor_without_touching_the_list() {
        let mut history = HistoryManager::new();
        history.record(noop());
        history.record(noop());

        history.undo().unwrap();
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.len(), 2);
        assert!(history.can_undo());
        assert!(history.can_redo());

        history.undo().unwrap();
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(history.can_redo());
        assert_eq!(history.undo(), Err(HistoryError::NothingToUndo));
    }

    #[tokio::test]
    async fn redo_is_symmetric_to_undo() {
        let mut history = HistoryManager::new();
        history.record(noop());
        history.undo().unwrap();

        history.redo().unwrap();
        assert_eq!(history.cursor(), 1);
        assert!(history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.redo(), Err(HistoryError::NothingToRedo));
    }

    #[tokio::test]
    async fn round_trip_restores_the_cursor() {
        let mut history = HistoryManager::new();
        history.record(noop());
        let after_record = history.cursor();

        history.undo().unwrap();
        history.redo().unwrap();
        assert_eq!(history.cursor(), after_record);
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn record_after_undo_discards_the_redo_branch() {
        let mut history = HistoryManager::new();
        history.record(noop());
        history.record(noop());
        history.undo().unwrap();

        history.record(noop());
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 2);
        assert!(!history.can_redo());
        assert_eq!(history.redo(), Err(HistoryError::NothingToRedo));
    }

    #[tokio::test]
    async fn labels_follow_the_cursor() {
        let mut history = HistoryManager::new();
        history.record(labeled("redo first", "undo first"));
        history.record(labeled("redo second", "undo second"));

        assert_eq!(history.undo_label(), Some("undo second"));
        assert_eq!(history.redo_label(), None);

        history.undo().unwrap();
        assert_eq!(history.undo_label(), Some("undo first"));
        assert_eq!(history.redo_label(), Some("redo second"));

        history.undo().unwrap();
        assert_eq!(history.undo_label(), None);
        assert_eq!(history.redo_label(), Some("redo first"));
    }

    #[test]
    fn unlabeled_commands_yield_no_descriptions() {
        let mut history = HistoryManager::new();
        history.record(noop());
        assert_eq!(history.undo_label(), None);
        assert_eq!(history.redo_label(), None);
    }
}
