use sauron::{html::attributes::*, html::*, prelude::*};
use shared::submit::report_failure;
use shared::{
    ApiError, FormController, FormField, InputValue, ModalHost, ModalState, Notifier, Saved, Session, Task, TaskApi,
};

pub mod api;
pub mod config;
pub mod toast;

use api::HttpTaskApi;
use config::AppConfig;
use toast::{ToastKind, ToastTray};

#[derive(Debug, Clone)]
pub enum Msg {
    // Task list
    LoadTasks,
    TasksLoaded(Vec<Task>),
    LoadFailed(ApiError),

    // Modal
    OpenModal(ModalState),
    CloseModal,
    FieldChanged(FormField, InputValue),
    Submit,
    SaveSucceeded(Saved),
    SaveFailed(ApiError),
    RefreshFailed(ApiError),

    DismissToast(u64),
}

/// The open modal, if any. Closing drops its form state.
#[derive(Debug, Clone, Default)]
pub struct ModalSlot(Option<FormController>);

impl ModalSlot {
    pub fn controller(&self) -> Option<&FormController> {
        self.0.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }

    pub fn open(&mut self, session: &Session, modal: ModalState) {
        match &mut self.0 {
            Some(controller) => controller.set_modal(modal),
            None => self.0 = Some(FormController::new(session.clone(), modal)),
        }
    }

    fn change(&mut self, field: FormField, value: InputValue) {
        if let Some(controller) = &mut self.0 {
            controller.handle_change(field, value);
        }
    }
}

impl ModalHost for ModalSlot {
    fn close_modal(&mut self) {
        self.0 = None;
    }
}

#[derive(Debug, Clone)]
pub struct Model {
    api: HttpTaskApi,
    session: Session,
    tasks: Vec<Task>,
    loading: bool,
    modal: ModalSlot,
    toasts: ToastTray,
}

impl Model {
    pub fn new(config: AppConfig) -> Self {
        Self {
            api: HttpTaskApi::new(config.api_base.clone()),
            session: config.session(),
            tasks: Vec::new(),
            loading: false,
            modal: ModalSlot::default(),
            toasts: ToastTray::default(),
        }
    }
}

impl Application for Model {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        Cmd::new(async { Msg::LoadTasks })
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::LoadTasks => {
                let Some(owner_id) = self.session.user_id().map(str::to_string) else {
                    tracing::warn!("no signed-in user, skipping task load");
                    return Cmd::none();
                };
                self.loading = true;
                let api = self.api.clone();
                Cmd::new(async move {
                    match api.fetch_get_items(&owner_id).await {
                        Ok(tasks) => Msg::TasksLoaded(tasks),
                        Err(e) => Msg::LoadFailed(e),
                    }
                })
            }
            Msg::TasksLoaded(tasks) => {
                self.tasks = tasks;
                self.loading = false;
                Cmd::none()
            }
            Msg::LoadFailed(error) => {
                tracing::error!(error = %error, "failed to load tasks");
                self.loading = false;
                Cmd::none()
            }
            Msg::OpenModal(modal) => {
                self.modal.open(&self.session, modal);
                Cmd::none()
            }
            Msg::CloseModal => {
                self.modal.close_modal();
                Cmd::none()
            }
            Msg::FieldChanged(field, value) => {
                self.modal.change(field, value);
                Cmd::none()
            }
            Msg::Submit => {
                let Some(controller) = self.modal.controller() else {
                    return Cmd::none();
                };
                match controller.prepare() {
                    Err(error) => {
                        self.toasts.error(&error.to_string());
                        Cmd::none()
                    }
                    Ok(None) => Cmd::none(),
                    Ok(Some(request)) => {
                        let api = self.api.clone();
                        Cmd::new(async move {
                            match request.send(&api).await {
                                Ok(saved) => Msg::SaveSucceeded(saved),
                                Err(e) => Msg::SaveFailed(e),
                            }
                        })
                    }
                }
            }
            Msg::SaveSucceeded(saved) => {
                saved.finish(&mut self.toasts, &mut self.modal);
                let api = self.api.clone();
                Cmd::new(async move {
                    match saved.refresh(&api).await {
                        Ok(tasks) => Msg::TasksLoaded(tasks),
                        Err(e) => Msg::RefreshFailed(e),
                    }
                })
            }
            Msg::SaveFailed(error) | Msg::RefreshFailed(error) => {
                report_failure(&error, &mut self.toasts);
                Cmd::none()
            }
            Msg::DismissToast(id) => {
                self.toasts.dismiss(id);
                Cmd::none()
            }
        }
    }

    fn view(&self) -> Node<Msg> {
        div(
            [class("min-h-screen bg-ctp-base text-ctp-text")],
            [
                self.view_header(),
                div([class("max-w-4xl mx-auto px-6 py-8")], [self.view_tasks_page()]),
                match self.modal.controller() {
                    Some(controller) => view_modal(controller),
                    None => span([], []),
                },
                self.view_toasts(),
            ],
        )
    }
}

impl Model {
    fn view_header(&self) -> Node<Msg> {
        header([class("bg-ctp-mantle shadow-lg border-b border-ctp-surface0")], [
            div([class("max-w-4xl mx-auto px-6 py-4 flex items-center justify-between")], [
                h1([class("text-2xl font-bold text-ctp-text")], [text("To-do")]),
                button([
                    on_click(|_| Msg::OpenModal(ModalState::create())),
                    class("bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base font-medium px-6 py-2 rounded-md transition-colors duration-200"),
                ], [text("Add task")]),
            ]),
        ])
    }

    fn view_tasks_page(&self) -> Node<Msg> {
        if self.loading {
            return div([class("text-center py-10 text-ctp-subtext0 italic")], [text("Loading...")]);
        }
        if self.tasks.is_empty() {
            return div([class("text-center py-12")], [
                h3([class("text-lg font-medium text-ctp-text mb-2")], [text("No tasks yet")]),
                p([class("text-ctp-subtext0")], [text("Use \"Add task\" to create one.")]),
            ]);
        }
        div([class("space-y-4")], self.tasks.iter().map(|task| self.view_task(task)).collect::<Vec<_>>())
    }

    fn view_task(&self, task: &Task) -> Node<Msg> {
        let for_update = task.clone();
        let for_details = task.clone();
        div([class("bg-ctp-surface0 rounded-lg p-4 border border-ctp-surface1 flex items-center justify-between")], [
            div([], [
                h3([class(if task.is_completed {
                    "text-lg font-medium line-through text-ctp-subtext0"
                } else {
                    "text-lg font-medium text-ctp-text"
                })], [text(&task.title)]),
                p([class("text-sm text-ctp-subtext1")], [text(&task.date)]),
                if task.is_important {
                    span([class("bg-ctp-red/20 text-ctp-red px-2 py-1 rounded-full text-xs font-medium")], [text("Important")])
                } else {
                    span([], [])
                },
            ]),
            div([class("flex space-x-2")], [
                button([
                    on_click(move |_| Msg::OpenModal(ModalState::update(for_update.clone()))),
                    class("bg-ctp-yellow text-ctp-base px-3 py-1 rounded-md text-sm"),
                ], [text("Edit")]),
                button([
                    on_click(move |_| Msg::OpenModal(ModalState::details(for_details.clone()))),
                    class("bg-ctp-surface2 text-ctp-text px-3 py-1 rounded-md text-sm"),
                ], [text("Details")]),
            ]),
        ])
    }

    fn view_toasts(&self) -> Node<Msg> {
        div(
            [class("fixed bottom-4 right-4 space-y-2 z-50")],
            self.toasts
                .iter()
                .map(|toast| {
                    let id = toast.id;
                    div([
                        on_click(move |_| Msg::DismissToast(id)),
                        class(match toast.kind {
                            ToastKind::Success => "bg-ctp-green text-ctp-base px-4 py-2 rounded-md shadow cursor-pointer",
                            ToastKind::Error => "bg-ctp-red text-ctp-base px-4 py-2 rounded-md shadow cursor-pointer",
                        }),
                    ], [text(&toast.message)])
                })
                .collect::<Vec<_>>(),
        )
    }
}

fn view_modal(controller: &FormController) -> Node<Msg> {
    let contents = controller.contents();
    let read_only = controller.read_only();
    let form = controller.form();

    div([class("fixed bg-black bg-opacity-50 flex items-center justify-center w-full h-full left-0 top-0 z-40")], [
        div([class("bg-ctp-surface0 rounded-md w-1/2 flex flex-col items-center relative p-4")], [
            h2([class("text-2xl py-2 border-b border-ctp-surface2 w-fit font-semibold")], [text(contents.title)]),
            div([class("w-full space-y-4")], [
                text_field("Title", FormField::Title, &form.title, "Enter a title...", read_only),
                text_area_field("Description", FormField::Description, &form.description, read_only),
                text_field("Date", FormField::Date, &form.date, "", read_only),
                checkbox_field("Completed", FormField::IsCompleted, form.is_completed, read_only),
                checkbox_field("Important", FormField::IsImportant, form.is_important, read_only),
                div([class("flex justify-end")], [
                    if contents.show_submit {
                        button([
                            r#type("submit"),
                            on_click(|event| {
                                event.prevent_default();
                                Msg::Submit
                            }),
                            class("bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base py-3 px-6 rounded-md"),
                        ], [text(contents.submit_label)])
                    } else {
                        span([], [])
                    },
                ]),
            ]),
            button([
                on_click(|_| Msg::CloseModal),
                class("absolute right-6 top-6 text-ctp-subtext0 hover:text-ctp-text"),
            ], [text("✕")]),
        ]),
    ])
}

fn text_field(label_text: &str, field: FormField, current: &str, hint: &str, read_only: bool) -> Node<Msg> {
    let input_type = if field == FormField::Date { "date" } else { "text" };
    div([class("flex flex-col")], [
        span([class("text-sm text-ctp-subtext0")], [text(label_text)]),
        input([
            r#type(input_type),
            id(field.name()),
            attr("name", field.name()),
            placeholder(hint.to_string()),
            value(current.to_string()),
            disabled(read_only),
            on_input(move |event| Msg::FieldChanged(field, InputValue::Text(event.value()))),
            class("w-full px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text"),
        ], []),
    ])
}

fn text_area_field(label_text: &str, field: FormField, current: &str, read_only: bool) -> Node<Msg> {
    div([class("flex flex-col")], [
        span([class("text-sm text-ctp-subtext0")], [text(label_text)]),
        textarea([
            id(field.name()),
            attr("name", field.name()),
            placeholder("Enter a description..."),
            value(current.to_string()),
            disabled(read_only),
            on_input(move |event| Msg::FieldChanged(field, InputValue::Text(event.value()))),
            class("w-full px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text h-20 resize-y"),
        ], []),
    ])
}

fn checkbox_field(label_text: &str, field: FormField, is_checked: bool, read_only: bool) -> Node<Msg> {
    div([class("flex items-center justify-between")], [
        span([class("text-sm text-ctp-subtext0")], [text(label_text)]),
        input([
            r#type("checkbox"),
            id(field.name()),
            attr("name", field.name()),
            checked(is_checked),
            disabled(read_only),
            on_checked(move |now_checked| Msg::FieldChanged(field, InputValue::Checked(now_checked))),
        ], []),
    ])
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting task frontend");

    Program::mount_to_body(Model::new(AppConfig::from_document()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{SaveKind, TaskForm};

    fn model() -> Model {
        Model::new(AppConfig {
            api_base: "/api".to_string(),
            user_sub: Some("u1".to_string()),
        })
    }

    fn sample_task() -> Task {
        Task {
            id: "t1".into(),
            title: "Water plants".into(),
            description: "Balcony only".into(),
            date: "2024-03-02".into(),
            is_completed: false,
            is_important: true,
            owner_id: "u1".into(),
        }
    }

    #[test]
    fn invalid_submit_shows_one_toast_and_keeps_the_modal() {
        let mut model = model();
        let _ = model.update(Msg::OpenModal(ModalState::create()));
        let _ = model.update(Msg::Submit);

        assert!(model.modal.is_open());
        let messages: Vec<_> = model.toasts.iter().map(|toast| toast.message.clone()).collect();
        assert_eq!(messages, vec!["Please enter a title.".to_string()]);
    }

    #[test]
    fn field_changes_reach_the_form() {
        let mut model = model();
        let _ = model.update(Msg::OpenModal(ModalState::create()));
        let _ = model.update(Msg::FieldChanged(FormField::Title, InputValue::Text("Buy milk".into())));
        let _ = model.update(Msg::FieldChanged(FormField::IsImportant, InputValue::Checked(true)));

        let form = model.modal.controller().map(|c| c.form().clone()).unwrap();
        assert_eq!(form.title, "Buy milk");
        assert!(form.is_important);
        assert_eq!(form.owner_id, "u1");
    }

    #[test]
    fn reopening_switches_the_form_to_the_new_task() {
        let mut model = model();
        let _ = model.update(Msg::OpenModal(ModalState::create()));
        let _ = model.update(Msg::OpenModal(ModalState::details(sample_task())));

        let controller = model.modal.controller().unwrap();
        assert!(controller.read_only());
        assert_eq!(controller.form(), &TaskForm::from_task(&sample_task()));
    }

    #[test]
    fn successful_save_announces_and_closes() {
        let mut model = model();
        let _ = model.update(Msg::OpenModal(ModalState::update(sample_task())));
        let _ = model.update(Msg::SaveSucceeded(Saved {
            kind: SaveKind::Updated,
            task: sample_task(),
            owner_id: "u1".into(),
        }));

        assert!(!model.modal.is_open());
        let kinds: Vec<_> = model.toasts.iter().map(|toast| toast.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Success]);
    }

    #[test]
    fn failed_save_leaves_the_modal_open() {
        let mut model = model();
        let _ = model.update(Msg::OpenModal(ModalState::create()));
        let _ = model.update(Msg::SaveFailed(ApiError::Status(500)));

        assert!(model.modal.is_open());
        assert_eq!(model.toasts.iter().next().map(|t| t.message.as_str()), Some("Failed to save the task."));
    }

    #[test]
    fn modal_renders_in_every_mode() {
        for modal in [
            ModalState::create(),
            ModalState::update(sample_task()),
            ModalState::details(sample_task()),
        ] {
            let mut model = model();
            let _ = model.update(Msg::OpenModal(modal));
            let _ = model.update(Msg::FieldChanged(FormField::Title, InputValue::Text("draft".into())));
            let _ = model.view();
        }
    }

    #[test]
    fn checkbox_takes_the_reported_state() {
        let mut model = model();
        let _ = model.update(Msg::OpenModal(ModalState::create()));
        for _ in 0..2 {
            let _ = model.update(Msg::FieldChanged(FormField::IsCompleted, InputValue::Checked(true)));
        }

        let form = model.modal.controller().map(|c| c.form().clone()).unwrap();
        assert!(form.is_completed);
    }

    #[test]
    fn invalid_submit_leaves_everything_in_place() {
        let mut model = model();
        let _ = model.update(Msg::OpenModal(ModalState::create()));
        let _ = model.update(Msg::FieldChanged(FormField::Title, InputValue::Text("Buy milk".into())));
        let before = model.modal.controller().map(|c| c.form().clone()).unwrap();

        let _ = model.update(Msg::Submit);

        let controller = model.modal.controller().unwrap();
        assert_eq!(controller.prepare(), Err(shared::FormError::DescriptionRequired));
        assert_eq!(controller.form(), &before);
        assert!(!model.loading);
        assert!(model.tasks.is_empty());
        assert_eq!(model.toasts.len(), 1);
    }

    #[test]
    fn save_closes_the_modal_before_the_reload_lands() {
        let mut model = model();
        let owner_id = model.session.user_id().unwrap().to_string();
        let _ = model.update(Msg::OpenModal(ModalState::create()));
        let _ = model.update(Msg::SaveSucceeded(Saved {
            kind: SaveKind::Created,
            task: sample_task(),
            owner_id,
        }));

        assert!(!model.modal.is_open());
        assert!(model.tasks.is_empty());
        assert_eq!(model.toasts.iter().next().map(|t| t.message.as_str()), Some("Task added."));

        let _ = model.update(Msg::TasksLoaded(vec![sample_task()]));
        assert_eq!(model.tasks, vec![sample_task()]);
        assert!(!model.modal.is_open());
    }
}
