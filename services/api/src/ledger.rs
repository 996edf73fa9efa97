use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use voicecart::ledger::{LedgerError, OrderLedger};
use voicecart_types::{CartLine, OrderLine, OrderStatus};

/// [`OrderLedger`] backed by the `orders` and `order_items` tables.
///
/// The header and all line rows are written inside a single transaction so a
/// crash or write failure can never leave a partial order behind.
pub struct PgOrderLedger {
    pool: PgPool,
}

impl PgOrderLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn unavailable(e: sqlx::Error) -> LedgerError {
    LedgerError::Unavailable(e.to_string())
}

#[async_trait]
impl OrderLedger for PgOrderLedger {
    async fn place_order(&self, total: Decimal, lines: &[CartLine]) -> Result<i64, LedgerError> {
        if lines.is_empty() {
            return Err(LedgerError::EmptyOrder);
        }

        let mut tx = self.pool.begin().await.map_err(unavailable)?;

        let (order_id,): (i64,) =
            sqlx::query_as("INSERT INTO orders (total, status) VALUES ($1, $2) RETURNING order_id")
                .bind(total)
                .bind(OrderStatus::Pending.as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(unavailable)?;

        for line in lines.iter().map(OrderLine::from) {
            sqlx::query(
                "INSERT INTO order_items (order_id, menu_item_id, quantity, price) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(order_id)
            .bind(line.menu_item_id)
            .bind(line.quantity as i32)
            .bind(line.price)
            .execute(&mut *tx)
            .await
            .map_err(unavailable)?;
        }

        tx.commit().await.map_err(unavailable)?;
        Ok(order_id)
    }
}
