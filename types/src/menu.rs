use rust_decimal::Decimal;

/// A purchasable item from the menu catalog.
///
/// Immutable once loaded; the id is unique and stable across the life of the
/// catalog.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub currency: String,
    pub category: String,
}
