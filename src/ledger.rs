use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use rust_decimal::Decimal;
use voicecart_types::CartLine;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// An order must carry at least one line. The orchestrator checks the
    /// cart before calling the ledger; this exists so implementations can
    /// still refuse a bad call.
    #[error("cannot place an order with no lines")]
    EmptyOrder,
    #[error("order ledger unavailable: {0}")]
    Unavailable(String),
}

/// Append-only record of placed orders.
///
/// `place_order` must be atomic: the order header and every line row are
/// durably written together or not at all. A failure must leave no partial
/// order behind, and the caller must not clear the cart when it sees one;
/// the cart stays the source of truth until the order fully commits.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait OrderLedger: Send + Sync {
    /// Writes the order and returns its ledger-assigned id (unique,
    /// monotonic). New orders start in `pending` status.
    async fn place_order(&self, total: Decimal, lines: &[CartLine]) -> Result<i64, LedgerError>;
}
