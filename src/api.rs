//! Backend API Bindings
//!
//! Thin async wrappers over the board REST API. Every function maps onto one
//! endpoint; callers are responsible for the reload that follows a mutation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::lifecycle::NewTask;
use crate::models::{Column, Task};
use crate::reconcile::MoveRequest;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Base address of the API server, overridable at build time
pub fn api_url() -> &'static str {
    option_env!("KANBAN_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Failure talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

fn expect_ok(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

async fn expect_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    Ok(expect_ok(response)?.json().await?)
}

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
struct CreateColumnBody<'a> {
    title: &'a str,
    position: i32,
}

#[derive(Serialize)]
struct CreateTaskBody<'a> {
    title: &'a str,
    description: &'a str,
    column_id: u32,
}

/// Canonical move contract: the `new_`-prefixed field names the backend's
/// move endpoint declares. Client and server must stay in lock-step here.
#[derive(Serialize)]
struct MoveTaskBody {
    new_column_id: u32,
    new_position: i32,
}

// ========================
// Column Endpoints
// ========================

pub async fn list_columns() -> Result<Vec<Column>, ApiError> {
    let response = reqwest::get(format!("{}/columns/", api_url())).await?;
    expect_json(response).await
}

pub async fn create_column(title: &str, position: i32) -> Result<Column, ApiError> {
    let response = reqwest::Client::new()
        .post(format!("{}/columns/", api_url()))
        .json(&CreateColumnBody { title, position })
        .send()
        .await?;
    expect_json(response).await
}

// ========================
// Task Endpoints
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let response = reqwest::get(format!("{}/tasks/", api_url())).await?;
    expect_json(response).await
}

pub async fn create_task(new_task: &NewTask) -> Result<Task, ApiError> {
    let response = reqwest::Client::new()
        .post(format!("{}/tasks/", api_url()))
        .json(&CreateTaskBody {
            title: &new_task.title,
            description: &new_task.description,
            column_id: new_task.column_id,
        })
        .send()
        .await?;
    expect_json(response).await
}

pub async fn delete_task(task_id: u32) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .delete(format!("{}/tasks/{}", api_url(), task_id))
        .send()
        .await?;
    expect_ok(response)?;
    Ok(())
}

pub async fn move_task(request: &MoveRequest) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .put(format!("{}/tasks/{}/move", api_url(), request.task_id))
        .json(&MoveTaskBody {
            new_column_id: request.column_id,
            new_position: request.position,
        })
        .send()
        .await?;
    expect_ok(response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_body_uses_canonical_field_names() {
        let body = MoveTaskBody {
            new_column_id: 4,
            new_position: 2,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"new_column_id":4,"new_position":2}"#
        );
    }

    #[test]
    fn test_create_task_body_omits_position() {
        // The server assigns positions for new tasks
        let body = CreateTaskBody {
            title: "Write spec",
            description: "",
            column_id: 1,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"title":"Write spec","description":"","column_id":1}"#
        );
    }
}
