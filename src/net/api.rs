//! REST API helpers for sidebar mutations.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `MutationError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed move or delete
//! degrades to a logged warning without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Prefix shared by every versioned endpoint.
pub const API_V2_PREFIX: &str = "/api/v2";

/// Error returned by sidebar REST calls.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// The request could not be sent or its body could not be built.
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
    /// HTTP is not available in this build (server-side render).
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn move_block_endpoint(team_id: &str, to_category_id: &str, block_id: &str) -> String {
    format!("{API_V2_PREFIX}/teams/{team_id}/categories/{to_category_id}/blocks/{block_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn move_block_body(from_category_id: &str) -> serde_json::Value {
    serde_json::json!({ "fromCategoryID": from_category_id })
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_board_endpoint(board_id: &str) -> String {
    format!("{API_V2_PREFIX}/boards/{board_id}")
}

/// Move `block_id` from `from_category_id` into `to_category_id`.
///
/// # Errors
///
/// Returns [`MutationError`] if the request fails or the server rejects it.
pub async fn move_block_to_category(
    team_id: &str,
    block_id: &str,
    to_category_id: &str,
    from_category_id: &str,
) -> Result<(), MutationError> {
    #[cfg(feature = "hydrate")]
    {
        let url = move_block_endpoint(team_id, to_category_id, block_id);
        let resp = gloo_net::http::Request::post(&url)
            .json(&move_block_body(from_category_id))
            .map_err(|e| MutationError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| MutationError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(MutationError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (team_id, block_id, to_category_id, from_category_id);
        Err(MutationError::Unavailable)
    }
}

/// Delete a board via `DELETE /api/v2/boards/{board_id}`.
///
/// # Errors
///
/// Returns [`MutationError`] if the request fails or the server rejects it.
pub async fn delete_board(board_id: &str) -> Result<(), MutationError> {
    #[cfg(feature = "hydrate")]
    {
        let url = delete_board_endpoint(board_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| MutationError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(MutationError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = board_id;
        Err(MutationError::Unavailable)
    }
}
