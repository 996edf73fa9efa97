pub mod cart_store;
pub mod catalog;
pub mod interpreter;
pub mod ledger;
pub mod session;

pub use cart_store::{CartStore, InMemoryCartStore};
pub use catalog::{CatalogError, MenuCatalog};
pub use interpreter::{interpret, Command};
pub use ledger::{LedgerError, OrderLedger};
pub use session::{CommandOutcome, SessionError, SessionOrchestrator};
