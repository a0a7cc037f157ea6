//! Todo Commands
//!
//! Bindings for `/todo/` endpoints.

use serde_json::to_value;

use crate::client::{ApiClient, CallOptions, Method, Transport};
use crate::error::Result;
use crate::models::{NewTodo, Todo, TodoPatch};

fn todo_path<T: Transport>(api: &ApiClient<T>, id: u32) -> String {
    api.endpoint(&format!("/todo/{}", id))
}

pub async fn list_todos<T: Transport>(api: &ApiClient<T>) -> Result<Vec<Todo>> {
    api.call_as(&api.endpoint("/todo/"), CallOptions::default()).await
}

pub async fn get_todo<T: Transport>(api: &ApiClient<T>, id: u32) -> Result<Todo> {
    api.call_as(&todo_path(api, id), CallOptions::default()).await
}

pub async fn create_todo<T: Transport>(api: &ApiClient<T>, todo: &NewTodo) -> Result<Todo> {
    let body = to_value(todo)?;
    api.call_as(&api.endpoint("/todo/"), CallOptions::new(Method::Post).json(body))
        .await
}

pub async fn update_todo<T: Transport>(api: &ApiClient<T>, id: u32, patch: &TodoPatch) -> Result<Todo> {
    let body = to_value(patch)?;
    api.call_as(&todo_path(api, id), CallOptions::new(Method::Put).json(body))
        .await
}

/// Completion toggle. On failure callers reload the list to drop the stale checkbox state.
pub async fn set_todo_completed<T: Transport>(api: &ApiClient<T>, id: u32, completed: bool) -> Result<Todo> {
    let patch = TodoPatch {
        completed: Some(completed),
        ..Default::default()
    };
    update_todo(api, id, &patch).await
}

pub async fn delete_todo<T: Transport>(api: &ApiClient<T>, id: u32) -> Result<()> {
    api.call(&todo_path(api, id), CallOptions::new(Method::Delete)).await?;
    Ok(())
}
