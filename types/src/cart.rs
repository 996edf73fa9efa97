use crate::menu::MenuItem;
use rust_decimal::Decimal;

/// One line of a cart: a menu item reference plus the name and price as they
/// were at add time.
///
/// Repeat additions of the same item produce separate lines with quantity 1
/// each; lines are never merged into an incremented quantity.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub menu_item_id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    /// Builds a quantity-1 line from a matched menu item, denormalizing the
    /// name and price so later menu edits cannot retroactively change a cart.
    pub fn from_menu_item(item: &MenuItem) -> Self {
        Self {
            menu_item_id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A per-session shopping cart.
///
/// Invariant: `total` always equals the sum of `price * quantity` over
/// `items`. It is never set directly; every mutation ends with
/// [`Cart::recompute_total`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub session_id: String,
    pub items: Vec<CartLine>,
    pub total: Decimal,
}

impl Cart {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recomputes `total` from the current items. Pure function of `items`;
    /// mutations must call this unconditionally as their last step.
    pub fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartLine::line_total).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bucket() -> MenuItem {
        MenuItem {
            id: 3,
            name: "9 piece bucket".to_string(),
            price: dec!(129.99),
            currency: "USD".to_string(),
            category: "buckets".to_string(),
        }
    }

    #[test]
    fn line_from_menu_item_has_quantity_one() {
        let line = CartLine::from_menu_item(&bucket());
        assert_eq!(line.menu_item_id, 3);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.line_total(), dec!(129.99));
    }

    #[test]
    fn recompute_total_sums_price_times_quantity() {
        let mut cart = Cart::new("s1");
        cart.items.push(CartLine::from_menu_item(&bucket()));
        cart.items.push(CartLine {
            menu_item_id: 7,
            name: "fries".to_string(),
            price: dec!(4.50),
            quantity: 3,
        });
        cart.recompute_total();
        assert_eq!(cart.total, dec!(143.49));
    }

    #[test]
    fn cart_serializes_with_camel_case_keys() {
        let cart = Cart::new("abc");
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.get("sessionId").is_some());
        assert!(json.get("items").is_some());
        assert!(json.get("total").is_some());
    }
}
