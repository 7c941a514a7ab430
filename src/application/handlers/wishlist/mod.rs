//! Wishlist handlers - toggle, remove, clear, and list.

mod clear_wishlist;
mod list_wishlist;
mod remove_from_wishlist;
mod toggle_wishlist;

pub use clear_wishlist::{ClearWishlistCommand, ClearWishlistHandler, ClearWishlistResult};
pub use list_wishlist::{ListWishlistHandler, ListWishlistQuery, ListWishlistResult};
pub use remove_from_wishlist::{
    RemoveFromWishlistCommand, RemoveFromWishlistHandler, RemoveFromWishlistResult,
};
pub use toggle_wishlist::{ToggleWishlistCommand, ToggleWishlistHandler, ToggleWishlistResult};
