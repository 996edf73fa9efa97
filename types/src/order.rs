use crate::cart::CartLine;
use rust_decimal::Decimal;

/// Lifecycle status of a placed order.
///
/// Orders are created as `Pending`; no transition logic exists at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

impl OrderStatus {
    /// The value stored in the `orders.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
        }
    }
}

/// One persisted line of an order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item_id: i64,
    pub quantity: u32,
    pub price: Decimal,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            menu_item_id: line.menu_item_id,
            quantity: line.quantity,
            price: line.price,
        }
    }
}

/// A durably recorded order, immutable once written.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    pub total: Decimal,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }

    #[test]
    fn order_serializes_with_camel_case_keys() {
        let order = Order {
            order_id: 17,
            total: dec!(129.99),
            status: OrderStatus::Pending,
            lines: vec![OrderLine {
                menu_item_id: 3,
                quantity: 1,
                price: dec!(129.99),
            }],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderId"], 17);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["lines"][0]["menuItemId"], 3);
    }

    #[test]
    fn order_line_copies_cart_line_fields() {
        let cart_line = CartLine {
            menu_item_id: 5,
            name: "coleslaw".to_string(),
            price: dec!(3.25),
            quantity: 2,
        };
        let line = OrderLine::from(&cart_line);
        assert_eq!(line.menu_item_id, 5);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, dec!(3.25));
    }
}
