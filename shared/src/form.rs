use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Create,
    Update,
    Details,
}

impl ModalMode {
    pub fn name(&self) -> &'static str {
        match self {
            ModalMode::Create => "create",
            ModalMode::Update => "update",
            ModalMode::Details => "details",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "update" => ModalMode::Update,
            "details" => ModalMode::Details,
            _ => ModalMode::Create, // Default fallback
        }
    }
}

/// Heading and submit label shown for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalContents {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub show_submit: bool,
}

impl ModalContents {
    pub fn for_mode(mode: ModalMode) -> Self {
        match mode {
            ModalMode::Update => Self {
                title: "Edit task",
                submit_label: "Save changes",
                show_submit: true,
            },
            ModalMode::Details => Self {
                title: "Task details",
                submit_label: "",
                show_submit: false,
            },
            ModalMode::Create => Self {
                title: "Add task",
                submit_label: "Add task",
                show_submit: true,
            },
        }
    }
}

/// What the modal was opened for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    pub mode: ModalMode,
    pub task: Option<Task>,
}

impl ModalState {
    pub fn create() -> Self {
        Self {
            mode: ModalMode::Create,
            task: None,
        }
    }

    pub fn update(task: Task) -> Self {
        Self {
            mode: ModalMode::Update,
            task: Some(task),
        }
    }

    pub fn details(task: Task) -> Self {
        Self {
            mode: ModalMode::Details,
            task: Some(task),
        }
    }
}

/// Read-only view of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub sub: Option<String>,
}

impl Session {
    pub fn new(sub: impl Into<String>) -> Self {
        Self {
            sub: Some(sub.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { sub: None }
    }

    /// The user identifier, treating an empty string as missing.
    pub fn user_id(&self) -> Option<&str> {
        self.sub.as_deref().filter(|sub| !sub.is_empty())
    }
}

/// Local editable copy of a task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub is_completed: bool,
    pub is_important: bool,
    pub owner_id: String,
}

impl TaskForm {
    pub fn blank(session: &Session) -> Self {
        Self {
            owner_id: session.sub.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            date: task.date.clone(),
            is_completed: task.is_completed,
            is_important: task.is_important,
            owner_id: task.owner_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Date,
    IsCompleted,
    IsImportant,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::Date,
        FormField::IsCompleted,
        FormField::IsImportant,
    ];

    /// Input `name` attribute used in the rendered form.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Date => "date",
            FormField::IsCompleted => "isCompleted",
            FormField::IsImportant => "isImportant",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Value carried by a change event: checkboxes report their checked state,
/// everything else its string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    Text(String),
    Checked(bool),
}

impl TaskForm {
    /// Writes one field. Returns false when the value kind does not match the
    /// field, in which case nothing changes.
    pub fn set(&mut self, field: FormField, value: InputValue) -> bool {
        match (field, value) {
            (FormField::Title, InputValue::Text(text)) => self.title = text,
            (FormField::Description, InputValue::Text(text)) => self.description = text,
            (FormField::Date, InputValue::Text(text)) => self.date = text,
            (FormField::IsCompleted, InputValue::Checked(checked)) => self.is_completed = checked,
            (FormField::IsImportant, InputValue::Checked(checked)) => self.is_important = checked,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_names_fall_back_to_create() {
        assert_eq!(ModalMode::from_name("update"), ModalMode::Update);
        assert_eq!(ModalMode::from_name("details"), ModalMode::Details);
        assert_eq!(ModalMode::from_name("create"), ModalMode::Create);
        assert_eq!(ModalMode::from_name("delete"), ModalMode::Create);
        assert_eq!(ModalMode::from_name(""), ModalMode::Create);
    }

    #[test]
    fn details_mode_hides_the_submit_button() {
        let details = ModalContents::for_mode(ModalMode::Details);
        assert!(!details.show_submit);
        assert_eq!(details.submit_label, "");

        let create = ModalContents::for_mode(ModalMode::Create);
        assert_eq!(create.title, "Add task");
        assert_eq!(create.submit_label, "Add task");

        assert_eq!(ModalContents::for_mode(ModalMode::Update).title, "Edit task");
    }

    #[test]
    fn field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("ownerId"), None);
    }

    #[test]
    fn mismatched_value_kind_is_ignored() {
        let mut form = TaskForm::default();
        assert!(!form.set(FormField::Title, InputValue::Checked(true)));
        assert!(!form.set(FormField::IsImportant, InputValue::Text("on".into())));
        assert_eq!(form, TaskForm::default());
    }

    #[test]
    fn empty_sub_is_not_a_user() {
        assert_eq!(Session::new("").user_id(), None);
        assert_eq!(Session::anonymous().user_id(), None);
        assert_eq!(Session::new("u1").user_id(), Some("u1"));
    }
}
