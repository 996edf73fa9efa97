//! Per-request orchestration: resolve the session, interpret the transcript,
//! apply the resulting cart mutations, and drain the cart into the ledger on
//! checkout.

use crate::cart_store::CartStore;
use crate::catalog::{CatalogError, MenuCatalog};
use crate::interpreter::{interpret, Command};
use crate::ledger::{LedgerError, OrderLedger};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{info, warn};
use voicecart_types::{Cart, MenuItem, VoiceCommandResponse};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session id must be non-empty")]
    EmptySessionId,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// The single outcome of one voice-command request. Every request yields
/// exactly one of these; there is no partial success.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Checkout succeeded; the cart has been drained into the ledger.
    OrderPlaced { order_id: i64 },
    /// The matched items were appended to the cart.
    ItemsAdded { cart: Cart, added: Vec<MenuItem> },
    /// Checkout was requested on an empty cart. Nothing was mutated.
    EmptyCart,
    /// The transcript matched nothing; the cart is returned unchanged.
    NoMatch { cart: Cart },
}

impl CommandOutcome {
    /// Converts the outcome into the wire response, carrying the same
    /// user-facing messages the service has always returned.
    pub fn into_response(self) -> VoiceCommandResponse {
        match self {
            CommandOutcome::OrderPlaced { order_id } => VoiceCommandResponse {
                success: true,
                cart: None,
                added_items: None,
                order_id: Some(order_id),
                message: "Order placed successfully".to_string(),
            },
            CommandOutcome::ItemsAdded { cart, added } => VoiceCommandResponse {
                success: true,
                cart: Some(cart),
                order_id: None,
                message: format!("Added {} item(s) to cart", added.len()),
                added_items: Some(added),
            },
            CommandOutcome::EmptyCart => VoiceCommandResponse {
                success: false,
                cart: None,
                added_items: None,
                order_id: None,
                message: "Your cart is empty".to_string(),
            },
            CommandOutcome::NoMatch { cart } => VoiceCommandResponse {
                success: false,
                cart: Some(cart),
                added_items: None,
                order_id: None,
                message: "No menu items found in your request".to_string(),
            },
        }
    }
}

/// Composes the catalog, cart store and ledger into the per-request flow.
///
/// The orchestrator holds no cart state across calls; it fetches, mutates
/// and returns within one request, under a per-session lock. The lock is
/// what makes checkout exclusive: no addition or removal can interleave
/// between "read cart as non-empty" and "clear after the order commits".
pub struct SessionOrchestrator {
    catalog: Arc<dyn MenuCatalog>,
    carts: Arc<dyn CartStore>,
    ledger: Arc<dyn OrderLedger>,
    session_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SessionOrchestrator {
    pub fn new(
        catalog: Arc<dyn MenuCatalog>,
        carts: Arc<dyn CartStore>,
        ledger: Arc<dyn OrderLedger>,
    ) -> Self {
        Self {
            catalog,
            carts,
            ledger,
            session_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Serializes whole requests per session. Locks for different sessions
    /// are independent, so sessions never block each other.
    async fn session_guard(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.session_locks.lock().await;
            Arc::clone(locks.entry(session_id.to_string()).or_default())
        };
        lock.lock_owned().await
    }

    /// Runs one voice command for `session_id`.
    ///
    /// The session id is opaque; the only validation is non-emptiness.
    pub async fn process_command(
        &self,
        session_id: &str,
        transcript: &str,
    ) -> Result<CommandOutcome, SessionError> {
        if session_id.is_empty() {
            return Err(SessionError::EmptySessionId);
        }
        let _guard = self.session_guard(session_id).await;

        let cart = self.carts.get(session_id).await;
        let menu = self.catalog.list_items().await?;

        match interpret(transcript, &menu) {
            Command::Checkout => {
                if cart.is_empty() {
                    return Ok(CommandOutcome::EmptyCart);
                }
                // The cart is only cleared after the ledger commits; on
                // failure it stays intact as the source of truth.
                let order_id = match self.ledger.place_order(cart.total, &cart.items).await {
                    Ok(order_id) => order_id,
                    Err(e) => {
                        warn!(session_id, error = %e, "checkout failed, cart left unchanged");
                        return Err(e.into());
                    }
                };
                self.carts.clear(session_id).await;
                info!(session_id, order_id, total = %cart.total, "order placed");
                Ok(CommandOutcome::OrderPlaced { order_id })
            }
            Command::AddItems(matches) => {
                let cart = self.carts.apply_additions(session_id, &matches).await;
                info!(session_id, added = matches.len(), "items added to cart");
                Ok(CommandOutcome::ItemsAdded { cart, added: matches })
            }
            Command::NoMatch => Ok(CommandOutcome::NoMatch { cart }),
        }
    }

    /// Returns the session's cart, creating it lazily.
    pub async fn cart(&self, session_id: &str) -> Cart {
        self.carts.get(session_id).await
    }

    /// Explicit (non-voice) removal of every line carrying `menu_item_id`.
    /// Succeeds even when the id is not in the cart.
    pub async fn remove_item(&self, session_id: &str, menu_item_id: i64) -> Cart {
        let _guard = self.session_guard(session_id).await;
        self.carts.remove_line(session_id, menu_item_id).await
    }

    /// Explicit (non-voice) cart reset.
    pub async fn clear_cart(&self, session_id: &str) -> Cart {
        let _guard = self.session_guard(session_id).await;
        self.carts.clear(session_id).await
    }
}
