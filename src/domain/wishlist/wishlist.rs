//! Wishlist entry - a (user, movie) pair, unique per pair.

use crate::domain::foundation::{MovieId, Timestamp, UserId, WishlistEntryId};
use serde::{Deserialize, Serialize};

/// A movie saved to a user's wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: WishlistEntryId,
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub created_at: Timestamp,
}

impl WishlistEntry {
    /// Creates a new wishlist entry for the pair.
    pub fn new(user_id: UserId, movie_id: MovieId) -> Self {
        Self {
            id: WishlistEntryId::new(),
            user_id,
            movie_id,
            created_at: Timestamp::now(),
        }
    }
}

/// Result of toggling a movie on a wishlist.
///
/// Requesting an already-present pair removes it instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The pair was absent and has been added.
    Added,

    /// The pair was present and has been removed.
    Removed,
}

impl ToggleOutcome {
    /// Returns true if the movie is wishlisted after the toggle.
    pub fn is_wishlisted(&self) -> bool {
        matches!(self, ToggleOutcome::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_binds_the_pair() {
        let user_id = UserId::new();
        let movie_id = MovieId::new();
        let entry = WishlistEntry::new(user_id, movie_id);
        assert_eq!(entry.user_id, user_id);
        assert_eq!(entry.movie_id, movie_id);
    }

    #[test]
    fn toggle_outcome_reports_membership() {
        assert!(ToggleOutcome::Added.is_wishlisted());
        assert!(!ToggleOutcome::Removed.is_wishlisted());
    }
}
