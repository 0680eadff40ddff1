use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ApiError, CreateTaskRequest, Task, TaskApi, TaskForm, UpdateTaskRequest};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// `TaskApi` over the browser's `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTaskApi {
    base: String,
}

impl HttpTaskApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn items_url(&self, owner_id: &str) -> String {
        format!("{}/tasks/{}", self.base, owner_id)
    }

    pub fn create_url(&self) -> String {
        format!("{}/tasks", self.base)
    }

    pub fn update_url(&self, id: &str) -> String {
        format!("{}/tasks/{}", self.base, id)
    }
}

impl TaskApi for HttpTaskApi {
    async fn fetch_get_items(&self, owner_id: &str) -> Result<Vec<Task>, ApiError> {
        let tasks: Vec<Task> = send_json("GET", &self.items_url(owner_id), None::<&()>).await?;
        tracing::debug!(count = tasks.len(), "tasks loaded");
        Ok(tasks)
    }

    async fn fetch_post_item(&self, form: &TaskForm) -> Result<Task, ApiError> {
        let body = CreateTaskRequest::from(form);
        send_json("POST", &self.create_url(), Some(&body)).await
    }

    async fn fetch_put_item(&self, form: &TaskForm) -> Result<Task, ApiError> {
        let body = UpdateTaskRequest::from_form(form).ok_or(ApiError::MissingId)?;
        send_json("PUT", &self.update_url(&body.id), Some(&body)).await
    }
}

async fn send_json<B, T>(method: &str, url: &str, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        opts.set_body(&wasm_bindgen::JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| ApiError::Transport("failed to create request".to_string()))?;

    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| ApiError::Transport("failed to set header".to_string()))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?
        .into();

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|_| ApiError::Decode("failed to read response".to_string()))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| ApiError::Decode("failed to get text".to_string()))?
        .as_string()
        .ok_or_else(|| ApiError::Decode("response is not a string".to_string()))?;

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_hang_off_the_base() {
        let api = HttpTaskApi::new("/api");
        assert_eq!(api.items_url("u1"), "/api/tasks/u1");
        assert_eq!(api.create_url(), "/api/tasks");
        assert_eq!(api.update_url("t1"), "/api/tasks/t1");
    }
}
