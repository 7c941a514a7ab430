//! Wishlist-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, MovieId};

/// Wishlist operation errors.
#[derive(Debug, Clone)]
pub enum WishlistError {
    /// The movie being toggled does not exist.
    MovieNotFound(MovieId),

    /// Removal requested for a movie that is not on the wishlist.
    NotInWishlist(MovieId),

    /// Infrastructure error.
    Infrastructure(String),
}

impl WishlistError {
    pub fn movie_not_found(id: MovieId) -> Self {
        WishlistError::MovieNotFound(id)
    }

    pub fn not_in_wishlist(id: MovieId) -> Self {
        WishlistError::NotInWishlist(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        WishlistError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            WishlistError::MovieNotFound(_) => ErrorCode::MovieNotFound,
            WishlistError::NotInWishlist(_) => ErrorCode::WishlistEntryNotFound,
            WishlistError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl std::fmt::Display for WishlistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WishlistError::MovieNotFound(id) => write!(f, "Movie {} not found", id),
            WishlistError::NotInWishlist(id) => write!(f, "Movie {} is not in the wishlist", id),
            WishlistError::Infrastructure(message) => {
                write!(f, "Infrastructure error: {}", message)
            }
        }
    }
}

impl std::error::Error for WishlistError {}

impl From<DomainError> for WishlistError {
    fn from(err: DomainError) -> Self {
        WishlistError::Infrastructure(err.message)
    }
}
