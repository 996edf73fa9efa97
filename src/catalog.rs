use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use voicecart_types::MenuItem;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("menu catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read-only source of purchasable items.
///
/// The trait is the seam between the orchestrator and whatever actually
/// holds the menu (Postgres in production, a fixed `Vec` in tests). Mocked
/// with `mockall` in unit tests so the orchestrator can be exercised without
/// a database.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait MenuCatalog: Send + Sync {
    /// Lists all menu items ordered by id ascending. Deterministic and
    /// side-effect free. Fails with [`CatalogError::Unavailable`] if the
    /// backing store cannot be reached; callers treat that as fatal for the
    /// current request, with no stale-cache fallback.
    async fn list_items(&self) -> Result<Vec<MenuItem>, CatalogError>;
}
