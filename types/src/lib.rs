pub mod api;
pub mod cart;
pub mod menu;
pub mod order;

pub use api::*;
pub use cart::{Cart, CartLine};
pub use menu::MenuItem;
pub use order::{Order, OrderLine, OrderStatus};
