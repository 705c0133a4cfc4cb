//! Shared response types for API handlers.

use serde::Serialize;

/// Plain `{ "message": ... }` confirmation payload for operations that
/// have nothing else to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
