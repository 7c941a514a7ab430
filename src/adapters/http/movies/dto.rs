//! HTTP DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::movie::{Movie, MovieDraft};
use crate::domain::subscription::Plan;
use crate::ports::MoviePage;

/// Movie payload for create/update.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRequest {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub rating: f64,
    pub director: String,
    /// Runtime in minutes.
    pub duration: i32,
    pub description: String,
    pub plan: Plan,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
}

impl From<MovieRequest> for MovieDraft {
    fn from(req: MovieRequest) -> Self {
        MovieDraft {
            title: req.title,
            genre: req.genre,
            release_year: req.release_year,
            rating: req.rating,
            director: req.director,
            duration_minutes: req.duration,
            description: req.description,
            plan: req.plan,
            poster_url: req.poster_url,
            banner_url: req.banner_url,
        }
    }
}

/// Movie fields exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct MovieResponse {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub rating: f64,
    pub director: String,
    pub duration: i32,
    pub description: String,
    pub plan: Plan,
    pub poster_url: Option<String>,
    pub banner_url: Option<String>,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            release_year: movie.release_year,
            rating: movie.rating,
            director: movie.director.clone(),
            duration: movie.duration_minutes,
            description: movie.description.clone(),
            plan: movie.plan,
            poster_url: movie.poster_url.clone(),
            banner_url: movie.banner_url.clone(),
        }
    }
}

/// Paged listing response.
#[derive(Debug, Clone, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<MovieResponse>,
    pub total_pages: u32,
    pub current_page: u32,
}

impl From<&MoviePage> for MovieListResponse {
    fn from(page: &MoviePage) -> Self {
        Self {
            movies: page.movies.iter().map(MovieResponse::from).collect(),
            total_pages: page.total_pages,
            current_page: page.current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::MovieId;

    #[test]
    fn request_maps_duration_to_minutes() {
        let req: MovieRequest = serde_json::from_str(
            r#"{
                "title": "Dune",
                "genre": "Sci-Fi",
                "release_year": 2021,
                "rating": 8.0,
                "director": "Denis Villeneuve",
                "duration": 155,
                "description": "Arrakis.",
                "plan": "platinum"
            }"#,
        )
        .unwrap();
        let draft: MovieDraft = req.into();
        assert_eq!(draft.duration_minutes, 155);
        assert_eq!(draft.plan, Plan::Platinum);
    }

    #[test]
    fn response_serializes_plan_lowercase() {
        let draft = MovieDraft {
            title: "Dune".to_string(),
            genre: "Sci-Fi".to_string(),
            release_year: 2021,
            rating: 8.0,
            director: "Denis Villeneuve".to_string(),
            duration_minutes: 155,
            description: "Arrakis.".to_string(),
            plan: Plan::Gold,
            poster_url: None,
            banner_url: None,
        };
        let movie = Movie::create(MovieId::new(), draft);
        let json = serde_json::to_value(MovieResponse::from(&movie)).unwrap();
        assert_eq!(json["plan"], "gold");
        assert_eq!(json["duration"], 155);
    }
}
