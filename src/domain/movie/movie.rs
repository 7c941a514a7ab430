//! Movie aggregate entity.

use crate::domain::foundation::{MovieId, Timestamp, ValidationError};
use crate::domain::subscription::Plan;
use serde::{Deserialize, Serialize};

/// Earliest plausible release year (first film, roughly).
const RELEASE_YEAR_MIN: i32 = 1888;
const RELEASE_YEAR_MAX: i32 = 2100;

/// Catalog movie.
///
/// `plan` is the minimum subscription tier required to open the detail
/// view; the listing itself is public.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier for this movie.
    pub id: MovieId,

    /// Display title.
    pub title: String,

    /// Genre label used for filtering.
    pub genre: String,

    /// Year of release.
    pub release_year: i32,

    /// Rating on a 0-10 scale.
    pub rating: f64,

    /// Director name.
    pub director: String,

    /// Runtime in minutes.
    pub duration_minutes: i32,

    /// Synopsis.
    pub description: String,

    /// Minimum subscription tier required to view.
    pub plan: Plan,

    /// Poster image reference, if uploaded.
    pub poster_url: Option<String>,

    /// Banner image reference, if uploaded.
    pub banner_url: Option<String>,

    /// When the movie was added to the catalog.
    pub created_at: Timestamp,

    /// When the movie was last updated.
    pub updated_at: Timestamp,
}

impl Movie {
    /// Creates a movie from a validated draft.
    pub fn create(id: MovieId, draft: MovieDraft) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            title: draft.title,
            genre: draft.genre,
            release_year: draft.release_year,
            rating: draft.rating,
            director: draft.director,
            duration_minutes: draft.duration_minutes,
            description: draft.description,
            plan: draft.plan,
            poster_url: draft.poster_url,
            banner_url: draft.banner_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces this movie's content with a validated draft.
    pub fn apply(&mut self, draft: MovieDraft) {
        self.title = draft.title;
        self.genre = draft.genre;
        self.release_year = draft.release_year;
        self.rating = draft.rating;
        self.director = draft.director;
        self.duration_minutes = draft.duration_minutes;
        self.description = draft.description;
        self.plan = draft.plan;
        self.poster_url = draft.poster_url;
        self.banner_url = draft.banner_url;
        self.updated_at = Timestamp::now();
    }
}

/// Movie content as submitted by a supervisor or admin.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub rating: f64,
    pub director: String,
    pub duration_minutes: i32,
    pub description: String,
    pub plan: Plan,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
}

impl MovieDraft {
    /// Validates all fields, collecting every failure.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("title", &self.title),
            ("genre", &self.genre),
            ("director", &self.director),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::empty_field(field));
            }
        }

        if !(RELEASE_YEAR_MIN..=RELEASE_YEAR_MAX).contains(&self.release_year) {
            errors.push(ValidationError::invalid_format(
                "release_year",
                format!("must be between {} and {}", RELEASE_YEAR_MIN, RELEASE_YEAR_MAX),
            ));
        }

        if !(0.0..=10.0).contains(&self.rating) {
            errors.push(ValidationError::invalid_format(
                "rating",
                "must be between 0 and 10",
            ));
        }

        if self.duration_minutes <= 0 {
            errors.push(ValidationError::invalid_format(
                "duration_minutes",
                "must be positive",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> MovieDraft {
        MovieDraft {
            title: "Blade Runner".to_string(),
            genre: "Sci-Fi".to_string(),
            release_year: 1982,
            rating: 8.1,
            director: "Ridley Scott".to_string(),
            duration_minutes: 117,
            description: "A blade runner must pursue replicants.".to_string(),
            plan: Plan::Gold,
            poster_url: None,
            banner_url: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn create_stamps_timestamps_and_copies_fields() {
        let movie = Movie::create(MovieId::new(), valid_draft());
        assert_eq!(movie.title, "Blade Runner");
        assert_eq!(movie.plan, Plan::Gold);
        assert_eq!(movie.created_at, movie.updated_at);
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn release_year_out_of_range_is_rejected() {
        for year in [1800, 2500] {
            let mut draft = valid_draft();
            draft.release_year = year;
            assert!(draft.validate().is_err(), "expected rejection for {}", year);
        }
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let mut draft = valid_draft();
        draft.rating = 10.5;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn apply_replaces_content_and_touches_updated_at() {
        let mut movie = Movie::create(MovieId::new(), valid_draft());
        let mut draft = valid_draft();
        draft.title = "Blade Runner 2049".to_string();
        draft.plan = Plan::Platinum;
        movie.apply(draft);
        assert_eq!(movie.title, "Blade Runner 2049");
        assert_eq!(movie.plan, Plan::Platinum);
    }
}
