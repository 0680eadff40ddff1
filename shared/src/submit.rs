//! Submit pipeline: save the form, announce it, close the modal, then reload
//! the owner's task list. Each stage is a separate value so an event-loop host
//! can run the stages across several turns, while [`FormController::submit`]
//! runs them back to back.
//!
//! [`FormController::submit`]: crate::FormController::submit

use crate::error::{ApiError, FormError};
use crate::form::TaskForm;
use crate::task::Task;

pub const SAVE_FAILED: &str = "Failed to save the task.";

/// Remote task API consumed by the modal.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    async fn fetch_get_items(&self, owner_id: &str) -> Result<Vec<Task>, ApiError>;
    async fn fetch_post_item(&self, form: &TaskForm) -> Result<Task, ApiError>;
    async fn fetch_put_item(&self, form: &TaskForm) -> Result<Task, ApiError>;
}

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

pub trait ModalHost {
    fn close_modal(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Created,
    Updated,
}

impl SaveKind {
    pub fn notice(&self) -> &'static str {
        match self {
            SaveKind::Created => "Task added.",
            SaveKind::Updated => "Task updated.",
        }
    }
}

/// A validated form ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub kind: SaveKind,
    pub form: TaskForm,
    pub owner_id: String,
}

impl SaveRequest {
    pub async fn send<A: TaskApi>(self, api: &A) -> Result<Saved, ApiError> {
        let task = match self.kind {
            SaveKind::Created => api.fetch_post_item(&self.form).await?,
            SaveKind::Updated => api.fetch_put_item(&self.form).await?,
        };
        tracing::info!(kind = ?self.kind, id = %task.id, "task saved");

        Ok(Saved {
            kind: self.kind,
            task,
            owner_id: self.owner_id,
        })
    }
}

/// A save the API accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub kind: SaveKind,
    pub task: Task,
    pub owner_id: String,
}

impl Saved {
    /// Announces the save and closes the modal, in that order.
    pub fn finish<N: Notifier, M: ModalHost>(&self, notifier: &mut N, host: &mut M) {
        notifier.success(self.kind.notice());
        host.close_modal();
    }

    pub async fn refresh<A: TaskApi>(&self, api: &A) -> Result<Vec<Task>, ApiError> {
        api.fetch_get_items(&self.owner_id).await
    }
}

/// Logs a failed remote call and shows the generic failure notice. The
/// underlying error never reaches the user.
pub fn report_failure<N: Notifier>(error: &ApiError, notifier: &mut N) {
    tracing::error!(error = %error, "task request failed");
    notifier.error(SAVE_FAILED);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation stopped the submit before any request.
    Invalid(FormError),
    /// Mode and task do not call for a request.
    Skipped,
    /// The create or update call failed; the modal is still open.
    Failed(ApiError),
    /// The save went through. `tasks` is the result of the follow-up reload.
    Saved {
        saved: Saved,
        tasks: Result<Vec<Task>, ApiError>,
    },
}
