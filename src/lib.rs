//! Burger ordering kiosk: catalog, selection flow, cart reducer and checkout,
//! behind an explicit state store that publishes snapshots to its renderers.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod input;
pub mod kiosk;
pub mod model;
pub mod random;
pub mod selection;
pub mod utils;

pub use cart::Cart;
pub use catalog::Catalog;
pub use checkout::Receipt;
pub use error::{CatalogError, KioskError};
pub use kiosk::{Action, Kiosk, KioskEvent, Screen, Snapshot};
pub use model::{CartLine, Category, MenuEntry, MenuId, MergeKey, OptionEntry, OrderType};
pub use random::ReceiptNumbers;
pub use selection::SelectionState;
