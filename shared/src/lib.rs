//! Platform-independent core of the task modal: the task entity, the form
//! state behind the modal, and the submit pipeline that talks to the API.

pub mod controller;
pub mod error;
pub mod form;
pub mod submit;
pub mod task;

pub use controller::FormController;
pub use error::{ApiError, FormError};
pub use form::{FormField, InputValue, ModalContents, ModalMode, ModalState, Session, TaskForm};
pub use submit::{ModalHost, Notifier, SaveKind, SaveRequest, Saved, SubmitOutcome, TaskApi};
pub use task::{CreateTaskRequest, Task, UpdateTaskRequest};
