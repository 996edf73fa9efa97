use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use voicecart::catalog::{CatalogError, MenuCatalog};
use voicecart_types::MenuItem;

/// [`MenuCatalog`] backed by the `menu_items` table.
pub struct PgMenuCatalog {
    pool: PgPool,
}

impl PgMenuCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MenuRow {
    id: i64,
    name: String,
    price: Decimal,
    currency: String,
    category: String,
}

impl From<MenuRow> for MenuItem {
    fn from(row: MenuRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            currency: row.currency,
            category: row.category,
        }
    }
}

#[async_trait]
impl MenuCatalog for PgMenuCatalog {
    async fn list_items(&self) -> Result<Vec<MenuItem>, CatalogError> {
        let rows: Vec<MenuRow> = sqlx::query_as(
            "SELECT id, name, price, currency, category FROM menu_items ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }
}
