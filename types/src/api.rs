//! Typed request and response bodies for the HTTP boundary.
//!
//! Every shape the service accepts or returns is an explicit struct,
//! deserialized and validated before any of it reaches the core.

use crate::cart::Cart;
use crate::menu::MenuItem;

/// Body of a voice-command request: the raw transcript from the speech
/// service plus the caller's opaque session id.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCommandRequest {
    pub transcript: String,
    pub session_id: String,
}

/// Result of processing a voice command. Exactly one of the optional fields
/// is populated depending on the outcome: `order_id` for a checkout,
/// `cart`/`added_items` for an addition, `cart` alone for a no-match.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart: Option<Cart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_items: Option<Vec<MenuItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    pub message: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CartResponse {
    pub cart: Cart,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RemoveItemResponse {
    pub success: bool,
    pub cart: Cart,
    pub message: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ClearCartResponse {
    pub success: bool,
    pub message: String,
}

/// Uniform body for backing-store failures.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
