//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! Expected schema (enums stored as text, timestamps as timestamptz):
//!
//! - `users(id uuid pk, first_name, last_name, email unique, password_hash,
//!   mobile_number, role, device_token null, notifications_enabled bool,
//!   created_at, updated_at)`
//! - `subscriptions(id uuid pk, user_id uuid unique references users
//!   on delete cascade, plan, status, payment_customer_id null,
//!   session_id null unique, session_expires_at null, expiry_date null,
//!   created_at, updated_at)`
//! - `movies(id uuid pk, title, genre, release_year int, rating float8,
//!   director, duration_minutes int, description, plan, poster_url null,
//!   banner_url null, created_at, updated_at)`
//! - `wishlists(id uuid pk, user_id uuid references users on delete
//!   cascade, movie_id uuid references movies on delete cascade,
//!   created_at, unique(user_id, movie_id))`
//! - `blacklisted_tokens(token text pk, expires_at)`

mod movie_repository;
mod subscription_repository;
mod token_blacklist;
mod user_repository;
mod wishlist_repository;

pub use movie_repository::PostgresMovieRepository;
pub use subscription_repository::PostgresSubscriptionRepository;
pub use token_blacklist::PostgresTokenBlacklist;
pub use user_repository::PostgresUserRepository;
pub use wishlist_repository::PostgresWishlistRepository;
