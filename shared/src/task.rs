use serde::{Deserialize, Serialize};

use crate::form::TaskForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(alias = "iscompleted", default)]
    pub is_completed: bool,
    #[serde(alias = "isimportant", default)]
    pub is_important: bool,
    #[serde(alias = "userId", alias = "userid", default)]
    pub owner_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    pub is_completed: bool,
    pub is_important: bool,
    #[serde(rename = "userId", alias = "ownerId")]
    pub owner_id: String,
}

/// Full replacement of an existing task; the identifier travels in the body
/// as well as in the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub is_completed: bool,
    pub is_important: bool,
    #[serde(rename = "userId", alias = "ownerId")]
    pub owner_id: String,
}

impl From<&TaskForm> for CreateTaskRequest {
    fn from(form: &TaskForm) -> Self {
        Self {
            title: form.title.clone(),
            description: form.description.clone(),
            date: form.date.clone(),
            is_completed: form.is_completed,
            is_important: form.is_important,
            owner_id: form.owner_id.clone(),
        }
    }
}

impl UpdateTaskRequest {
    /// Returns `None` when the form was never loaded from an existing task.
    pub fn from_form(form: &TaskForm) -> Option<Self> {
        let id = form.id.clone()?;
        Some(Self {
            id,
            title: form.title.clone(),
            description: form.description.clone(),
            date: form.date.clone(),
            is_completed: form.is_completed,
            is_important: form.is_important,
            owner_id: form.owner_id.clone(),
        })
    }
}
