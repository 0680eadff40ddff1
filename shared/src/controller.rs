use crate::error::FormError;
use crate::form::{FormField, InputValue, ModalContents, ModalMode, ModalState, Session, TaskForm};
use crate::submit::{report_failure, ModalHost, Notifier, SaveKind, SaveRequest, SubmitOutcome, TaskApi};

/// Owns the form behind the task modal.
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    session: Session,
    modal: ModalState,
    form: TaskForm,
}

impl FormController {
    pub fn new(session: Session, modal: ModalState) -> Self {
        let form = TaskForm::blank(&session);
        let mut controller = Self {
            session,
            modal,
            form,
        };
        controller.sync();
        controller
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn contents(&self) -> ModalContents {
        ModalContents::for_mode(self.modal.mode)
    }

    /// Every field is presentation-only in details mode.
    pub fn read_only(&self) -> bool {
        self.modal.mode == ModalMode::Details
    }

    /// Switches the modal target and resynchronizes the form if it changed.
    pub fn set_modal(&mut self, modal: ModalState) {
        if self.modal != modal {
            self.modal = modal;
            self.sync();
        }
    }

    fn sync(&mut self) {
        match (self.modal.mode, &self.modal.task) {
            (ModalMode::Update | ModalMode::Details, Some(task)) => {
                tracing::debug!(mode = self.modal.mode.name(), id = %task.id, "loading task into form");
                self.form = TaskForm::from_task(task);
            }
            (ModalMode::Create, None) => {
                self.form = TaskForm::blank(&self.session);
            }
            _ => {}
        }
    }

    pub fn handle_change(&mut self, field: FormField, value: InputValue) {
        if self.read_only() {
            tracing::debug!(field = field.name(), "ignoring edit in details mode");
            return;
        }
        if !self.form.set(field, value) {
            tracing::debug!(field = field.name(), "ignoring value of the wrong kind");
        }
    }

    /// Checks the required fields in order and returns the session user.
    pub fn validate(&self) -> Result<&str, FormError> {
        let user_id = self.session.user_id().ok_or(FormError::InvalidUser)?;
        if self.form.title.is_empty() {
            return Err(FormError::TitleRequired);
        }
        if self.form.description.is_empty() {
            return Err(FormError::DescriptionRequired);
        }
        if self.form.date.is_empty() {
            return Err(FormError::DateRequired);
        }
        Ok(user_id)
    }

    /// Validates and decides which request, if any, the current mode sends.
    pub fn prepare(&self) -> Result<Option<SaveRequest>, FormError> {
        let owner_id = self.validate()?.to_string();
        let kind = match (self.modal.mode, &self.modal.task) {
            (ModalMode::Create, None) => SaveKind::Created,
            (ModalMode::Update, Some(_)) => SaveKind::Updated,
            _ => return Ok(None),
        };

        Ok(Some(SaveRequest {
            kind,
            form: self.form.clone(),
            owner_id,
        }))
    }

    /// Runs the whole submit: validate, save, announce, close, reload.
    pub async fn submit<A, N, M>(&self, api: &A, notifier: &mut N, host: &mut M) -> SubmitOutcome
    where
        A: TaskApi,
        N: Notifier,
        M: ModalHost,
    {
        let request = match self.prepare() {
            Ok(Some(request)) => request,
            Ok(None) => return SubmitOutcome::Skipped,
            Err(error) => {
                notifier.error(&error.to_string());
                return SubmitOutcome::Invalid(error);
            }
        };

        let saved = match request.send(api).await {
            Ok(saved) => saved,
            Err(error) => {
                report_failure(&error, notifier);
                return SubmitOutcome::Failed(error);
            }
        };

        saved.finish(notifier, host);

        let tasks = saved.refresh(api).await;
        if let Err(error) = &tasks {
            report_failure(error, notifier);
        }

        SubmitOutcome::Saved { saved, tasks }
    }
}
