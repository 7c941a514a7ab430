//! Wishlist module - per-user saved movies with toggle semantics.

mod errors;
mod wishlist;

pub use errors::WishlistError;
pub use wishlist::{ToggleOutcome, WishlistEntry};
