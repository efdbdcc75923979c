//! Command trait and the closure-based command adapter.

use std::fmt;
use std::future::Future;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::ActionError;

/// Result of a command's forward or reverse action.
pub type ActionResult = Result<(), ActionError>;

/// A recorded pair of reversible actions with optional labels.
///
/// Commands are immutable once recorded: the history never inspects or
/// mutates their contents, only invokes the two actions and reads the
/// labels. Both actions are asynchronous and report success or failure;
/// each command stores enough context to both apply and revert its
/// change.
#[async_trait]
pub trait ReversibleCommand: Send + Sync {
    /// Performs or re-performs the action. Invoked by redo.
    async fn apply(&self) -> ActionResult;

    /// Undoes the action. Invoked by undo.
    async fn revert(&self) -> ActionResult;

    /// Human-readable description of what redoing this command would do.
    ///
    /// Shown by presentation layers as the redo control's tooltip.
    fn redo_label(&self) -> Option<&str> {
        None
    }

    /// Human-readable description of what undoing this command would do.
    fn undo_label(&self) -> Option<&str> {
        None
    }
}

type ActionFn = Box<dyn Fn() -> BoxFuture<'static, ActionResult> + Send + Sync>;

/// A command built from a pair of closures, for simple one-off commands.
///
/// Each closure produces a fresh future per invocation, so a command may
/// be applied and reverted any number of times as the cursor moves over
/// it.
pub struct FnCommand {
    forward: ActionFn,
    reverse: ActionFn,
    redo_label: Option<String>,
    undo_label: Option<String>,
}

impl FnCommand {
    /// Creates a command from a forward and a reverse action.
    pub fn new<F, Ff, R, Rf>(forward: F, reverse: R) -> Self
    where
        F: Fn() -> Ff + Send + Sync + 'static,
        Ff: Future<Output = ActionResult> + Send + 'static,
        R: Fn() -> Rf + Send + Sync + 'static,
        Rf: Future<Output = ActionResult> + Send + 'static,
    {
        Self {
            forward: Box::new(move || -> BoxFuture<'static, ActionResult> {
                Box::pin(forward())
            }),
            reverse: Box::new(move || -> BoxFuture<'static, ActionResult> {
                Box::pin(reverse())
            }),
            redo_label: None,
            undo_label: None,
        }
    }

    /// Sets the description shown for redoing this command.
    pub fn with_redo_label(mut self, label: impl Into<String>) -> Self {
        self.redo_label = Some(label.into());
        self
    }

    /// Sets the description shown for undoing this command.
    pub fn with_undo_label(mut self, label: impl Into<String>) -> Self {
        self.undo_label = Some(label.into());
        self
    }
}

#[async_trait]
impl ReversibleCommand for FnCommand {
    async fn apply(&self) -> ActionResult {
        (self.forward)().await
    }

    async fn revert(&self) -> ActionResult {
        (self.reverse)().await
    }

    fn redo_label(&self) -> Option<&str> {
        self.redo_label.as_deref()
    }

    fn undo_label(&self) -> Option<&str> {
        self.undo_label.as_deref()
    }
}

impl fmt::Debug for FnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand")
            .field("redo_label", &self.redo_label)
            .field("undo_label", &self.undo_label)
            .finish_non_exhaustive()
    }
}
