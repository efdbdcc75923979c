//! Completion reporting for spawned command actions.
//!
//! Undo and redo move the cursor synchronously and let the action run to
//! completion on its own task. The eventual outcome is delivered through
//! the two collaborators held here: one for successes, one for failures.
//! Both are optional; absence means silent reporting.

use std::fmt;
use std::sync::Arc;

use crate::error::ActionError;

/// Which direction of the history produced a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// A command's reverse action, triggered by undo.
    Undo,
    /// A command's forward action, triggered by redo.
    Redo,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}

/// Asynchronous failure of a command action, delivered to the error
/// collaborator.
///
/// Carries the direction that failed and the underlying reason. Delivery
/// never unwinds the cursor move that triggered the action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} action failed: {reason}")]
pub struct ActionFailure {
    /// The direction whose action failed.
    pub kind: ActionKind,
    /// The reason reported by the action.
    pub reason: ActionError,
}

type SuccessFn = dyn Fn(ActionKind) + Send + Sync;
type ErrorFn = dyn Fn(ActionFailure) + Send + Sync;

/// The optional success/error collaborators supplied at construction.
///
/// Cloned into each spawned action task, so callbacks stay reachable
/// however long an action takes to resolve.
#[derive(Clone, Default)]
pub(crate) struct Reporter {
    pub(crate) on_success: Option<Arc<SuccessFn>>,
    pub(crate) on_error: Option<Arc<ErrorFn>>,
}

impl Reporter {
    pub(crate) fn success(&self, kind: ActionKind) {
        tracing::debug!(%kind, "action completed");
        if let Some(on_success) = &self.on_success {
            on_success(kind);
        }
    }

    pub(crate) fn failure(&self, failure: ActionFailure) {
        tracing::warn!(%failure, "action failed");
        if let Some(on_error) = &self.on_error {
            on_error(failure);
        }
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
