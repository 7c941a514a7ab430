//! In-memory adapter implementations.
//!
//! Mutex-backed repositories with the same observable behavior as the
//! postgres adapters (unique constraints included). Used by handler and
//! router tests, and handy for local development without a database.

mod movie_repository;
mod subscription_repository;
mod token_blacklist;
mod user_repository;
mod wishlist_repository;

pub use movie_repository::InMemoryMovieRepository;
pub use subscription_repository::InMemorySubscriptionRepository;
pub use token_blacklist::InMemoryTokenBlacklist;
pub use user_repository::InMemoryUserRepository;
pub use wishlist_repository::InMemoryWishlistRepository;
