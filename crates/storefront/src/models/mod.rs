//! Domain models for the storefront.

pub mod cart;
pub mod order;
pub mod user;

pub use cart::{CartLine, CustomizationSelections};
pub use order::{Order, OrderTotals};
pub use user::{Address, User};
