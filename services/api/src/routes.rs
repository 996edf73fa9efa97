use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tracing::error;
use voicecart::catalog::MenuCatalog;
use voicecart::session::{SessionError, SessionOrchestrator};
use voicecart_types::{
    CartResponse, ClearCartResponse, ErrorResponse, RemoveItemResponse, VoiceCommandRequest,
};

/// Shared handler state: the orchestrator plus a direct handle on the
/// catalog for the menu listing endpoint.
pub struct AppState {
    pub catalog: Arc<dyn MenuCatalog>,
    pub orchestrator: SessionOrchestrator,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/menu", get(list_menu))
        .route("/api/orders", post(process_voice_command))
        .route("/api/cart/{session_id}", get(get_cart).delete(clear_cart))
        .route("/api/cart/{session_id}/items/{item_id}", delete(remove_item))
        .with_state(state)
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

async fn list_menu(State(state): State<Arc<AppState>>) -> Response {
    match state.catalog.list_items().await {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            error!(error = %e, "failed to fetch menu");
            internal_error("Internal Server Error")
        }
    }
}

async fn process_voice_command(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VoiceCommandRequest>,
) -> Response {
    match state
        .orchestrator
        .process_command(&req.session_id, &req.transcript)
        .await
    {
        Ok(outcome) => Json(outcome.into_response()).into_response(),
        Err(SessionError::EmptySessionId) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "sessionId must not be empty".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to process voice command");
            internal_error("Failed to process order")
        }
    }
}

async fn get_cart(State(state): State<Arc<AppState>>, Path(session_id): Path<String>) -> Response {
    let cart = state.orchestrator.cart(&session_id).await;
    Json(CartResponse { cart }).into_response()
}

async fn remove_item(
    State(state): State<Arc<AppState>>,
    Path((session_id, item_id)): Path<(String, i64)>,
) -> Response {
    let cart = state.orchestrator.remove_item(&session_id, item_id).await;
    Json(RemoveItemResponse {
        success: true,
        cart,
        message: "Item removed from cart".to_string(),
    })
    .into_response()
}

async fn clear_cart(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Response {
    state.orchestrator.clear_cart(&session_id).await;
    Json(ClearCartResponse {
        success: true,
        message: "Cart cleared successfully".to_string(),
    })
    .into_response()
}
